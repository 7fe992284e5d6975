use thiserror::Error;

/// User-input errors. Recoverable: the caller surfaces the message and
/// blocks prediction until the allocation is corrected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("expected {expected} allocation shares, got {got}")]
    WrongLength { expected: usize, got: usize },

    #[error("allocation share for {cadre} is out of range: {value}")]
    ShareOutOfRange { cadre: &'static str, value: f64 },

    #[error("allocation shares sum to {sum}, expected 1 (tolerance {tolerance})")]
    SumMismatch { sum: f64, tolerance: f64 },
}

/// Configuration defects (not user error). Fatal to the request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("baseline cost share for {cadre} is not strictly positive: {value}")]
    NonPositiveBaselineShare { cadre: &'static str, value: f64 },
}
