use num_traits::Float;

/// Floating-point precision used for kernel constants and results.
///
/// Implemented for `f32` and `f64`. Normalization constants are specified in
/// `f64` and rounded once at kernel construction.
pub trait Real: Float + std::fmt::Debug + Send + Sync + 'static {
    /// Conversion from an `f64` constant.
    fn from_f64(value: f64) -> Self;
}

impl Real for f32 {
    #[inline]
    fn from_f64(value: f64) -> f32 {
        value as f32
    }
}

impl Real for f64 {
    #[inline]
    fn from_f64(value: f64) -> f64 {
        value
    }
}
