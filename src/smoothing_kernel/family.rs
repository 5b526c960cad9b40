use std::fmt;
use std::str::FromStr;

use super::kernel::{Dim, KernelError, SmoothingKernel};
use super::{Cubic, Quintic, WendlandC2, WendlandC4, WendlandC6, WendlandC8};
use crate::units::Real;

/// Tag for one of the built-in kernel families.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KernelFamily {
    Cubic,
    Quintic,
    WendlandC2,
    WendlandC4,
    WendlandC6,
    WendlandC8,
}

impl KernelFamily {
    pub const ALL: [KernelFamily; 6] = [
        KernelFamily::Cubic,
        KernelFamily::Quintic,
        KernelFamily::WendlandC2,
        KernelFamily::WendlandC4,
        KernelFamily::WendlandC6,
        KernelFamily::WendlandC8,
    ];

    pub fn name(self) -> &'static str {
        match self {
            KernelFamily::Cubic => "cubic",
            KernelFamily::Quintic => "quintic",
            KernelFamily::WendlandC2 => "wendland_c2",
            KernelFamily::WendlandC4 => "wendland_c4",
            KernelFamily::WendlandC6 => "wendland_c6",
            KernelFamily::WendlandC8 => "wendland_c8",
        }
    }

    /// Nominal neighbour count for a stable density estimate.
    pub fn default_neighbours(self) -> u32 {
        match self {
            KernelFamily::Cubic => 64,
            KernelFamily::Quintic => 216,
            KernelFamily::WendlandC2 => 100,
            KernelFamily::WendlandC4 => 216,
            KernelFamily::WendlandC6 => 295,
            KernelFamily::WendlandC8 => 395,
        }
    }
}

impl fmt::Display for KernelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelFamily {
    type Err = KernelError;

    fn from_str(name: &str) -> Result<KernelFamily, KernelError> {
        KernelFamily::ALL
            .into_iter()
            .find(|family| family.name() == name)
            .ok_or_else(|| KernelError::UnknownKernelFamily(name.to_owned()))
    }
}

/// A kernel whose family is selected at runtime.
///
/// Dispatches every [`SmoothingKernel`] operation to the wrapped family, so
/// code driven by a configuration value and code generic over the trait share
/// one path. Statically known families can use the concrete types directly.
#[derive(Copy, Clone, Debug)]
pub enum Kernel<T: Real> {
    Cubic(Cubic<T>),
    Quintic(Quintic<T>),
    WendlandC2(WendlandC2<T>),
    WendlandC4(WendlandC4<T>),
    WendlandC6(WendlandC6<T>),
    WendlandC8(WendlandC8<T>),
}

macro_rules! dispatch {
    ($kernel:expr, $inner:ident => $body:expr) => {
        match $kernel {
            Kernel::Cubic($inner) => $body,
            Kernel::Quintic($inner) => $body,
            Kernel::WendlandC2($inner) => $body,
            Kernel::WendlandC4($inner) => $body,
            Kernel::WendlandC6($inner) => $body,
            Kernel::WendlandC8($inner) => $body,
        }
    };
}

impl<T: Real> Kernel<T> {
    /// Kernel of the given family with its nominal neighbour count.
    pub fn new(family: KernelFamily) -> Self {
        Self::with_neighbours(family, family.default_neighbours())
    }

    pub fn with_neighbours(family: KernelFamily, neighbours: u32) -> Self {
        match family {
            KernelFamily::Cubic => Kernel::Cubic(Cubic::with_neighbours(neighbours)),
            KernelFamily::Quintic => Kernel::Quintic(Quintic::with_neighbours(neighbours)),
            KernelFamily::WendlandC2 => Kernel::WendlandC2(WendlandC2::with_neighbours(neighbours)),
            KernelFamily::WendlandC4 => Kernel::WendlandC4(WendlandC4::with_neighbours(neighbours)),
            KernelFamily::WendlandC6 => Kernel::WendlandC6(WendlandC6::with_neighbours(neighbours)),
            KernelFamily::WendlandC8 => Kernel::WendlandC8(WendlandC8::with_neighbours(neighbours)),
        }
    }

    pub fn family(&self) -> KernelFamily {
        match self {
            Kernel::Cubic(_) => KernelFamily::Cubic,
            Kernel::Quintic(_) => KernelFamily::Quintic,
            Kernel::WendlandC2(_) => KernelFamily::WendlandC2,
            Kernel::WendlandC4(_) => KernelFamily::WendlandC4,
            Kernel::WendlandC6(_) => KernelFamily::WendlandC6,
            Kernel::WendlandC8(_) => KernelFamily::WendlandC8,
        }
    }
}

impl<T: Real> SmoothingKernel<T> for Kernel<T> {
    #[inline]
    fn neighbour_hint(&self) -> u32 {
        dispatch!(self, kernel => kernel.neighbour_hint())
    }

    #[inline]
    fn value(&self, u: T, h_inv: T, dim: Dim) -> T {
        dispatch!(self, kernel => kernel.value(u, h_inv, dim))
    }

    #[inline]
    fn derivative(&self, u: T, h_inv: T, dim: Dim) -> T {
        dispatch!(self, kernel => kernel.derivative(u, h_inv, dim))
    }

    // The trait default is the identity; route through the family so the
    // Wendland overrides are reached.
    #[inline]
    fn bias_correction(&self, density: T, mass: T, h_inv: T, dim: Dim) -> T {
        dispatch!(self, kernel => kernel.bias_correction(density, mass, h_inv, dim))
    }
}
