use std::f64::consts::PI;

use more_asserts::{assert_ge, assert_le, assert_lt};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use sph_kernels::{Dim, Kernel, KernelFamily, SmoothingKernel};

fn kernels() -> impl Iterator<Item = Kernel<f64>> {
    KernelFamily::ALL.into_iter().map(Kernel::new)
}

/// Volume integral of the kernel over its compact support for `h_inv = 1`,
/// by composite Simpson quadrature. Equals 1 for a correctly normalized
/// kernel.
fn volume_integral(kernel: &Kernel<f64>, dim: Dim) -> f64 {
    const STEPS: usize = 20_000;
    let du = 1.0 / STEPS as f64;
    let mut sum = 0.0;
    for i in 0..=STEPS {
        let u = i as f64 * du;
        let weight = if i == 0 || i == STEPS {
            1.0
        } else if i % 2 == 1 {
            4.0
        } else {
            2.0
        };
        let shell = match dim {
            Dim::One => 2.0,
            Dim::Two => 2.0 * PI * u,
            Dim::Three => 4.0 * PI * u * u,
        };
        sum += weight * shell * kernel.value(u, 1.0, dim);
    }
    sum * du / 3.0
}

/// Sample points on the interior of the support, away from the B-spline
/// segment boundaries at 1/3, 1/2 and 2/3.
const INTERIOR_SAMPLES: [f64; 7] = [0.05, 0.15, 0.25, 0.45, 0.55, 0.8, 0.95];

#[test]
fn compact_support() {
    for kernel in kernels() {
        for dim in Dim::ALL {
            for u in [1.0, 1.5, 10.0] {
                assert_eq!(kernel.value(u, 2.0, dim), 0.0, "{} dim {:?}", kernel.family(), dim);
                assert_eq!(kernel.derivative(u, 2.0, dim), 0.0, "{} dim {:?}", kernel.family(), dim);
            }
        }
    }
}

#[test]
fn non_negative_on_support() {
    let mut rng = SmallRng::seed_from_u64(0xb1a5);
    for kernel in kernels() {
        for dim in Dim::ALL {
            for _ in 0..1000 {
                let u = rng.gen_range(0.0..1.0);
                assert_ge!(
                    kernel.value(u, 1.0, dim),
                    0.0,
                    "{} dim {:?} u {}",
                    kernel.family(),
                    dim,
                    u
                );
            }
        }
    }
}

#[test]
fn unit_normalization() {
    for kernel in kernels() {
        for dim in Dim::ALL {
            let integral = volume_integral(&kernel, dim);
            assert_le!(
                (integral - 1.0).abs(),
                1e-4,
                "{} dim {:?} integrates to {}",
                kernel.family(),
                dim,
                integral
            );
        }
    }
}

#[test]
fn derivative_matches_finite_difference() {
    const STEP: f64 = 1e-6;
    for kernel in kernels() {
        for dim in Dim::ALL {
            for u in INTERIOR_SAMPLES {
                let analytic = kernel.derivative(u, 1.0, dim);
                let numeric =
                    (kernel.value(u + STEP, 1.0, dim) - kernel.value(u - STEP, 1.0, dim))
                        / (2.0 * STEP);
                assert_le!(
                    (analytic - numeric).abs(),
                    1e-5 * analytic.abs().max(1.0),
                    "{} dim {:?} u {}",
                    kernel.family(),
                    dim,
                    u
                );
            }
        }
    }
}

#[test]
fn derivative_is_non_positive() {
    // All families decay monotonically from the origin.
    for kernel in kernels() {
        for dim in Dim::ALL {
            for u in INTERIOR_SAMPLES {
                assert_le!(kernel.derivative(u, 1.0, dim), 0.0);
            }
        }
    }
}

#[test]
fn h_inv_scaling() {
    let h_inv = 2.5;
    for kernel in kernels() {
        for dim in Dim::ALL {
            let d = dim.power();
            let value = kernel.value(0.4, h_inv, dim);
            let scaled = kernel.value(0.4, 1.0, dim) * h_inv.powi(d);
            assert_le!((value - scaled).abs(), 1e-12 * scaled.abs());

            let deriv = kernel.derivative(0.4, h_inv, dim);
            let deriv_scaled = kernel.derivative(0.4, 1.0, dim) * h_inv.powi(d + 1);
            assert_le!((deriv - deriv_scaled).abs(), 1e-12 * deriv_scaled.abs());
        }
    }
}

#[test]
fn bspline_seams_are_continuous() {
    const EPS: f64 = 1e-9;
    let seams: [(KernelFamily, &[f64]); 2] = [
        (KernelFamily::Cubic, &[0.5]),
        (KernelFamily::Quintic, &[1.0 / 3.0, 2.0 / 3.0]),
    ];
    for (family, knots) in seams {
        let kernel = Kernel::<f64>::new(family);
        for dim in Dim::ALL {
            for &knot in knots {
                let below = kernel.value(knot - EPS, 1.0, dim);
                let above = kernel.value(knot + EPS, 1.0, dim);
                assert_le!((below - above).abs(), 1e-6, "{} at {}", family, knot);
                // B-splines are C1, so the first derivative is continuous too.
                let d_below = kernel.derivative(knot - EPS, 1.0, dim);
                let d_above = kernel.derivative(knot + EPS, 1.0, dim);
                assert_le!((d_below - d_above).abs(), 1e-5, "{} at {}", family, knot);
            }
        }
    }
}

#[test]
fn bias_correction_is_identity_for_bsplines() {
    for family in [KernelFamily::Cubic, KernelFamily::Quintic] {
        let kernel = Kernel::<f64>::new(family);
        for dim in Dim::ALL {
            for (density, mass, h_inv) in [(1.0, 1.0, 1.0), (0.37, 2.0, 4.0), (1e6, 0.5, 0.01)] {
                assert_eq!(kernel.bias_correction(density, mass, h_inv, dim), density);
            }
        }
    }
}

#[test]
fn bias_correction_reduces_wendland_density() {
    let wendland = [
        KernelFamily::WendlandC2,
        KernelFamily::WendlandC4,
        KernelFamily::WendlandC6,
        KernelFamily::WendlandC8,
    ];
    for family in wendland {
        let kernel = Kernel::<f64>::new(family);
        for dim in Dim::ALL {
            let corrected = kernel.bias_correction(1.0, 1.0, 0.5, dim);
            assert_lt!(corrected, 1.0, "{} dim {:?}", family, dim);
        }
    }
}

#[test]
fn wendland_c6_reference_scenario() {
    let kernel = Kernel::<f64>::with_neighbours(KernelFamily::WendlandC6, 295);
    let value = kernel.value(0.5, 1.0, Dim::Three);
    assert_le!((value - 0.40442005421590166).abs(), 1e-13);

    let corrected = kernel.bias_correction(1.0, 1.0, 0.5, Dim::Three);
    assert_le!((corrected - 0.9991237081365336).abs(), 1e-13);
    assert_lt!(corrected, 1.0);
}

#[test]
fn single_precision_agrees_with_double() {
    for family in KernelFamily::ALL {
        let single = Kernel::<f32>::new(family);
        let double = Kernel::<f64>::new(family);
        for dim in Dim::ALL {
            for u in INTERIOR_SAMPLES {
                let ws = f64::from(single.value(u as f32, 1.0, dim));
                let wd = double.value(u, 1.0, dim);
                assert_le!((ws - wd).abs(), 1e-5 * wd.abs().max(1.0), "{}", family);
            }
        }
    }
}

#[test]
fn fixed_dimension_entry_points_agree() {
    for kernel in kernels() {
        let (u, h_inv) = (0.42, 1.7);
        assert_eq!(kernel.value_1d(u, h_inv), kernel.value(u, h_inv, Dim::One));
        assert_eq!(kernel.value_2d(u, h_inv), kernel.value(u, h_inv, Dim::Two));
        assert_eq!(kernel.value_3d(u, h_inv), kernel.value(u, h_inv, Dim::Three));
        assert_eq!(
            kernel.derivative_2d(u, h_inv),
            kernel.derivative(u, h_inv, Dim::Two)
        );
        assert_eq!(
            kernel.bias_correction_3d(1.0, 1.0, h_inv),
            kernel.bias_correction(1.0, 1.0, h_inv, Dim::Three)
        );
    }
}
