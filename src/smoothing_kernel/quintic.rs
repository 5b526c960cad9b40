use numeric_literals::replace_float_literals;
use std::f64::consts::PI;

use super::family::KernelFamily;
use super::kernel::{Dim, SmoothingKernel};
use crate::units::Real;

/// Quintic spline smoothing kernel (M6).
///
/// Quintic B-spline from Monaghan & Lattanzio (1985), rescaled so the compact
/// support ends at `u = 1` with segment boundaries at `u = 1/3` and `u = 2/3`.
#[derive(Copy, Clone, Debug)]
pub struct Quintic<T: Real> {
    neighbours: u32,
    norm_1d: T,
    norm_2d: T,
    norm_3d: T,
}

impl<T: Real> Quintic<T> {
    /// Kernel with the nominal neighbour count for this family.
    pub fn new() -> Self {
        Self::with_neighbours(KernelFamily::Quintic.default_neighbours())
    }

    pub fn with_neighbours(neighbours: u32) -> Self {
        Quintic {
            neighbours,
            norm_1d: T::from_f64(243.0 / 40.0),
            norm_2d: T::from_f64(15309.0 / (478.0 * PI)),
            norm_3d: T::from_f64(2187.0 / (40.0 * PI)),
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

impl<T: Real> Default for Quintic<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real> SmoothingKernel<T> for Quintic<T> {
    #[inline]
    fn neighbour_hint(&self) -> u32 {
        self.neighbours
    }

    #[inline]
    #[replace_float_literals(T::from_f64(literal))]
    fn value(&self, u: T, h_inv: T, dim: Dim) -> T {
        let n = self.norm(dim) * h_inv.powi(dim.power());
        if u < 1.0 / 3.0 {
            n * ((1.0 - u).powi(5) - 6.0 * (2.0 / 3.0 - u).powi(5) + 15.0 * (1.0 / 3.0 - u).powi(5))
        } else if u < 2.0 / 3.0 {
            n * ((1.0 - u).powi(5) - 6.0 * (2.0 / 3.0 - u).powi(5))
        } else if u < 1.0 {
            n * (1.0 - u).powi(5)
        } else {
            0.0
        }
    }

    #[inline]
    #[replace_float_literals(T::from_f64(literal))]
    fn derivative(&self, u: T, h_inv: T, dim: Dim) -> T {
        let n = self.norm(dim) * h_inv.powi(dim.power() + 1);
        if u < 1.0 / 3.0 {
            n * (-5.0 * (1.0 - u).powi(4) + 30.0 * (2.0 / 3.0 - u).powi(4)
                - 75.0 * (1.0 / 3.0 - u).powi(4))
        } else if u < 2.0 / 3.0 {
            n * (-5.0 * (1.0 - u).powi(4) + 30.0 * (2.0 / 3.0 - u).powi(4))
        } else if u < 1.0 {
            n * -5.0 * (1.0 - u).powi(4)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_values() {
        let kernel = Quintic::<f64>::new();
        assert!((kernel.value(0.2, 1.0, Dim::Three) - 3.402681753722935).abs() < 1e-13);
        assert!((kernel.value(0.5, 1.0, Dim::One) - 0.18515625).abs() < 1e-13);
    }

    #[test]
    fn zero_at_support_boundary() {
        let kernel = Quintic::<f64>::new();
        for dim in Dim::ALL {
            assert_eq!(kernel.value(1.0, 2.0, dim), 0.0);
            assert_eq!(kernel.derivative(1.0, 2.0, dim), 0.0);
        }
    }
}
