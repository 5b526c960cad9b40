//! Smoothing kernels.

pub use self::cubic::Cubic;
pub use self::family::{Kernel, KernelFamily};
pub use self::kernel::{Dim, KernelError, SmoothingKernel};
pub use self::quintic::Quintic;
pub use self::wendland_c2::WendlandC2;
pub use self::wendland_c4::WendlandC4;
pub use self::wendland_c6::WendlandC6;
pub use self::wendland_c8::WendlandC8;

mod cubic;
mod family;
mod kernel;
mod quintic;
mod wendland_c2;
mod wendland_c4;
mod wendland_c6;
mod wendland_c8;
