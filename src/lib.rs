//! Compactly-supported radial smoothing kernels for Smoothed-Particle
//! Hydrodynamics (SPH).
//!
//! Evaluates kernel values and first derivatives in 1, 2 and 3 dimensions for
//! the cubic and quintic B-splines of Monaghan & Lattanzio (1985) and the
//! Wendland C2/C4/C6/C8 functions of Dehnen & Aly (2012), plus the
//! Wendland-family density bias correction (Dehnen & Aly 2012, Eqs. 18-19).
//!
//! All kernels use the compact-support convention: for a distance `r` to the
//! kernel origin and support radius `h`, the normalized distance is
//! `u = r / h` and value/derivative are exactly zero for `u >= 1`. The
//! inverse support radius `h_inv = 1/h` is passed explicitly so callers can
//! hoist the division out of their pair loops.
//!
//! ```
//! use sph_kernels::{Dim, Kernel, KernelFamily, SmoothingKernel};
//!
//! let kernel = Kernel::<f64>::new(KernelFamily::WendlandC6);
//! let w = kernel.value(0.5, 1.0, Dim::Three);
//! assert!(w > 0.0);
//! assert_eq!(kernel.value(1.0, 1.0, Dim::Three), 0.0);
//! ```
//!
//! Kernels are immutable `Copy` values; construct one per simulation
//! configuration and share it freely between threads.

pub mod smoothing_kernel;
pub mod units;

pub use smoothing_kernel::{
    Cubic, Dim, Kernel, KernelError, KernelFamily, Quintic, SmoothingKernel, WendlandC2,
    WendlandC4, WendlandC6, WendlandC8,
};
pub use units::Real;
