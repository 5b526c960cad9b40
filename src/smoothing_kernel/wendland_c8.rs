use numeric_literals::replace_float_literals;
use std::f64::consts::PI;

use super::family::KernelFamily;
use super::kernel::{Dim, SmoothingKernel};
use crate::units::Real;

/// Wendland C8 smoothing kernel.
///
/// Highest-order Wendland function in this crate, constructed with the same
/// dimension walk as the families published in Dehnen & Aly (2012). The 1D
/// variant uses the dimensionally matched Wendland function.
#[derive(Copy, Clone, Debug)]
pub struct WendlandC8<T: Real> {
    neighbours: u32,
    norm_1d: T,
    norm_2d: T,
    norm_3d: T,
    bias_eps: T,
}

impl<T: Real> WendlandC8<T> {
    /// Kernel with the nominal neighbour count for this family.
    pub fn new() -> Self {
        Self::with_neighbours(KernelFamily::WendlandC8.default_neighbours())
    }

    pub fn with_neighbours(neighbours: u32) -> Self {
        WendlandC8 {
            neighbours,
            norm_1d: T::from_f64(245.0 / 128.0),
            norm_2d: T::from_f64(40.0 / (3.0 * PI)),
            norm_3d: T::from_f64(1785.0 / (64.0 * PI)),
            // No published fit for C8; the Dehnen & Aly (2012) C6 fit is the
            // closest available.
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

impl<T: Real> Default for WendlandC8<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real> SmoothingKernel<T> for WendlandC8<T> {
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
            Dim::One => {
                n * m.powi(9)
                    * (1.0 + u * (9.0 + u * (237.0 / 7.0 + u * (453.0 / 7.0 + u * 384.0 / 7.0))))
            }
            _ => {
                n * m.powi(10)
                    * (1.0 + u * (10.0 + u * (42.0 + u * (90.0 + u * 429.0 / 5.0))))
            }
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
            Dim::One => {
                n * (-156.0 / 7.0) * u * (1.0 + u * (8.0 + u * (25.0 + u * 32.0))) * m.powi(8)
            }
            _ => {
                n * -26.0 * u * (1.0 + u * (9.0 + u * (159.0 / 5.0 + u * 231.0 / 5.0))) * m.powi(9)
            }
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
    fn reference_values() {
        let kernel = WendlandC8::<f64>::new();
        assert!((kernel.value(0.5, 1.0, Dim::Three) - 0.2870783149669719).abs() < 1e-13);
        assert!((kernel.value(0.3, 1.0, Dim::Two) - 1.307356822054428).abs() < 1e-13);
    }

    #[test]
    fn zero_at_support_boundary() {
        let kernel = WendlandC8::<f64>::new();
        for dim in Dim::ALL {
            assert_eq!(kernel.value(1.0, 2.0, dim), 0.0);
            assert_eq!(kernel.derivative(1.0, 2.0, dim), 0.0);
        }
    }
}
