use thiserror::Error;

use crate::units::Real;

/// Contract violations surfaced at the API boundary.
///
/// Kernel evaluation itself is infallible; these only arise when a runtime
/// integer or name enters the typed API.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KernelError {
    /// Kernels are defined in 1, 2 or 3 spatial dimensions only.
    #[error("invalid dimension {0}, expected 1, 2 or 3")]
    InvalidDimension(u32),
    /// No kernel family is registered under the given name.
    #[error("unknown kernel family `{0}`")]
    UnknownKernelFamily(String),
}

/// Spatial dimension a kernel is evaluated in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dim {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Dim {
    pub const ALL: [Dim; 3] = [Dim::One, Dim::Two, Dim::Three];

    /// The exponent of the `h_inv` volume scaling, i.e. the dimension itself.
    #[inline]
    pub fn power(self) -> i32 {
        self as i32
    }
}

impl TryFrom<u32> for Dim {
    type Error = KernelError;

    fn try_from(dim: u32) -> Result<Dim, KernelError> {
        match dim {
            1 => Ok(Dim::One),
            2 => Ok(Dim::Two),
            3 => Ok(Dim::Three),
            _ => Err(KernelError::InvalidDimension(dim)),
        }
    }
}

/// SPH smoothing kernel.
///
/// Only radially symmetric kernels with compact support are supported.
/// Kernels are evaluated at the normalized distance `u = r / h`, where `h` is
/// the compact support radius; `h_inv = 1/h` is passed explicitly so callers
/// can hoist the division out of their pair loops. Value and derivative are
/// exactly zero for `u >= 1`.
///
/// `u >= 0` and `h_inv > 0` are preconditions of every call and are not
/// validated; evaluation stays branch-light for inner-loop use.
pub trait SmoothingKernel<T: Real> {
    /// Suggested neighbour count for a stable density estimate with this
    /// kernel. Metadata only, never used in the evaluation itself.
    fn neighbour_hint(&self) -> u32;

    /// Evaluates the kernel at `u`, scaled by `h_inv^dim` and the
    /// per-dimension normalization so the kernel integrates to 1 over its
    /// support.
    fn value(&self, u: T, h_inv: T, dim: Dim) -> T;

    /// Evaluates the analytic first derivative of the kernel with respect to
    /// the physical distance `r`, i.e. `d/du` scaled by `h_inv^(dim + 1)`.
    fn derivative(&self, u: T, h_inv: T, dim: Dim) -> T;

    /// Corrects a density estimate for the kernel's self-contribution bias.
    ///
    /// The identity for kernels without a known bias; the Wendland family
    /// overrides this with the Dehnen & Aly (2012), Eqs. 18-19 correction.
    fn bias_correction(&self, density: T, _mass: T, _h_inv: T, _dim: Dim) -> T {
        density
    }

    #[inline]
    fn value_1d(&self, u: T, h_inv: T) -> T {
        self.value(u, h_inv, Dim::One)
    }

    #[inline]
    fn value_2d(&self, u: T, h_inv: T) -> T {
        self.value(u, h_inv, Dim::Two)
    }

    #[inline]
    fn value_3d(&self, u: T, h_inv: T) -> T {
        self.value(u, h_inv, Dim::Three)
    }

    #[inline]
    fn derivative_1d(&self, u: T, h_inv: T) -> T {
        self.derivative(u, h_inv, Dim::One)
    }

    #[inline]
    fn derivative_2d(&self, u: T, h_inv: T) -> T {
        self.derivative(u, h_inv, Dim::Two)
    }

    #[inline]
    fn derivative_3d(&self, u: T, h_inv: T) -> T {
        self.derivative(u, h_inv, Dim::Three)
    }

    #[inline]
    fn bias_correction_1d(&self, density: T, mass: T, h_inv: T) -> T {
        self.bias_correction(density, mass, h_inv, Dim::One)
    }

    #[inline]
    fn bias_correction_2d(&self, density: T, mass: T, h_inv: T) -> T {
        self.bias_correction(density, mass, h_inv, Dim::Two)
    }

    #[inline]
    fn bias_correction_3d(&self, density: T, mass: T, h_inv: T) -> T {
        self.bias_correction(density, mass, h_inv, Dim::Three)
    }
}
