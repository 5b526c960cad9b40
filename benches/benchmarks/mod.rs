pub mod smoothing_kernel;
