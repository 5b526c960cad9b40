use numeric_literals::replace_float_literals;
use std::f64::consts::PI;

use super::family::KernelFamily;
use super::kernel::{Dim, SmoothingKernel};
use crate::units::Real;

/// Wendland C6 smoothing kernel.
///
/// See Dehnen & Aly (2012). The 1D variant uses the dimensionally matched
/// Wendland function.
#[derive(Copy, Clone, Debug)]
pub struct WendlandC6<T: Real> {
    neighbours: u32,
    norm_1d: T,
    norm_2d: T,
    norm_3d: T,
    bias_eps: T,
}

impl<T: Real> WendlandC6<T> {
    /// Kernel with the nominal neighbour count for this family.
    pub fn new() -> Self {
        Self::with_neighbours(KernelFamily::WendlandC6.default_neighbours())
    }

    pub fn with_neighbours(neighbours: u32) -> Self {
        WendlandC6 {
            neighbours,
            norm_1d: T::from_f64(55.0 / 32.0),
            norm_2d: T::from_f64(78.0 / (7.0 * PI)),
            norm_3d: T::from_f64(1365.0 / (64.0 * PI)),
            // Dehnen & Aly (2012), eq. 19 fit for this family.
            bias_eps: T::from_f64(0.0116 * (0.01 * f64::from(neighbours)).powf(-2.236)),
        }
    }

    #[inline]
    fn norm(&self, dim: Dim) -> T {
        match dim {
            Dim::One => self.norm_1d,
            Dim::Two => self.norm_2d,
            Dim::Three => self.norm_3d,
        }
    }
}

impl<T: Real> Default for WendlandC6<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real> SmoothingKernel<T> for WendlandC6<T> {
    #[inline]
    fn neighbour_hint(&self) -> u32 {
        self.neighbours
    }

    #[inline]
    #[replace_float_literals(T::from_f64(literal))]
    fn value(&self, u: T, h_inv: T, dim: Dim) -> T {
        if u >= 1.0 {
            return 0.0;
        }
        let n = self.norm(dim) * h_inv.powi(dim.power());
        let m = 1.0 - u;
        match dim {
            Dim::One => n * m.powi(7) * (1.0 + u * (7.0 + u * (19.0 + u * 21.0))),
            _ => n * m.powi(8) * (1.0 + u * (8.0 + u * (25.0 + u * 32.0))),
        }
    }

    #[inline]
    #[replace_float_literals(T::from_f64(literal))]
    fn derivative(&self, u: T, h_inv: T, dim: Dim) -> T {
        if u >= 1.0 {
            return 0.0;
        }
        let n = self.norm(dim) * h_inv.powi(dim.power() + 1);
        let m = 1.0 - u;
        match dim {
            Dim::One => n * -6.0 * u * (3.0 + u * (18.0 + u * 35.0)) * m.powi(6),
            _ => n * -22.0 * u * (1.0 + u * (7.0 + u * 16.0)) * m.powi(7),
        }
    }

    #[inline]
    fn bias_correction(&self, density: T, mass: T, h_inv: T, dim: Dim) -> T {
        // W(0) = norm * h_inv^dim for this family.
        density - self.bias_eps * mass * self.norm(dim) * h_inv.powi(dim.power())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_value_and_derivative_3d() {
        let kernel = WendlandC6::<f64>::new();
        assert!((kernel.value(0.5, 1.0, Dim::Three) - 0.40442005421590166).abs() < 1e-13);
        assert!((kernel.derivative(0.5, 1.0, Dim::Three) - -4.959118041860564).abs() < 1e-12);
    }

    #[test]
    fn bias_correction_shrinks_density() {
        let kernel = WendlandC6::<f64>::new();
        let corrected = kernel.bias_correction(1.0, 1.0, 0.5, Dim::Three);
        assert!((corrected - 0.9991237081365336).abs() < 1e-13);
    }

    #[test]
    fn zero_at_support_boundary() {
        let kernel = WendlandC6::<f64>::new();
        for dim in Dim::ALL {
            assert_eq!(kernel.value(1.0, 2.0, dim), 0.0);
            assert_eq!(kernel.derivative(1.0, 2.0, dim), 0.0);
        }
    }
}
