/// Numeric conversion helpers.
///
/// Provides lossless conversion from integer literals to `f64`, failing
/// instead of silently rounding.
pub mod num;
