use thiserror::Error;

/// Ways the scoring pipeline can fail before producing a result.
///
/// None of these reach callers of [`crate::analyze`]; they are reported
/// through [`crate::Outcome::Fallback`] alongside the neutral result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("metric `{metric}` is not a finite number")]
    NonFinite { metric: &'static str },

    #[error("metric `{metric}` out of range: {value}")]
    OutOfRange { metric: &'static str, value: f64 },

    #[error("scoring panicked: {0}")]
    Panicked(String),
}
