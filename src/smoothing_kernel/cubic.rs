use numeric_literals::replace_float_literals;
use std::f64::consts::PI;

use super::family::KernelFamily;
use super::kernel::{Dim, SmoothingKernel};
use crate::units::Real;

/// Cubic spline smoothing kernel (M4).
///
/// Classic cubic B-spline from "J. Monaghan & J. Lattanzio, A refined
/// particle method for astrophysical problems, A&A 149 (1985)", rescaled so
/// the compact support ends at `u = 1` with segment boundary at `u = 1/2`.
#[derive(Copy, Clone, Debug)]
pub struct Cubic<T: Real> {
    neighbours: u32,
    norm_1d: T,
    norm_2d: T,
    norm_3d: T,
}

impl<T: Real> Cubic<T> {
    /// Kernel with the nominal neighbour count for this family.
    pub fn new() -> Self {
        Self::with_neighbours(KernelFamily::Cubic.default_neighbours())
    }

    pub fn with_neighbours(neighbours: u32) -> Self {
        Cubic {
            neighbours,
            norm_1d: T::from_f64(4.0 / 3.0),
            norm_2d: T::from_f64(40.0 / (7.0 * PI)),
            norm_3d: T::from_f64(8.0 / PI),
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

impl<T: Real> Default for Cubic<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real> SmoothingKernel<T> for Cubic<T> {
    #[inline]
    fn neighbour_hint(&self) -> u32 {
        self.neighbours
    }

    #[inline]
    #[replace_float_literals(T::from_f64(literal))]
    fn value(&self, u: T, h_inv: T, dim: Dim) -> T {
        let n = self.norm(dim) * h_inv.powi(dim.power());
        if u < 0.5 {
            n * (1.0 + (u * u * u - u * u) * 6.0)
        } else if u < 1.0 {
            n * (1.0 - u).powi(3) * 2.0
        } else {
            0.0
        }
    }

    #[inline]
    #[replace_float_literals(T::from_f64(literal))]
    fn derivative(&self, u: T, h_inv: T, dim: Dim) -> T {
        let n = self.norm(dim) * h_inv.powi(dim.power() + 1);
        if u < 0.5 {
            n * (u * u * 3.0 - u * 2.0) * 6.0
        } else if u < 1.0 {
            -n * (1.0 - u).powi(2) * 6.0
        } else {
            0.0
        }
    }
}
