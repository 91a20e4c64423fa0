use thiserror::Error;

use crate::utils::dp_cache::DpError;

/// Error returned by [`MemoCounter`](super::MemoCounter) and [`parse_items`](super::parse_items).
#[derive(Debug, Error)]
pub enum CountError {
    #[error("step count must be non-negative, got {0}")]
    NegativeSteps(i64),
    #[error("item count overflows u64")]
    Overflow,
    #[error("transformation rule failed: {0}")]
    Rule(#[source] anyhow::Error),
    #[error("invalid item {token:?}: {reason}")]
    InvalidItem { token: String, reason: String },
}

impl From<DpError> for CountError {
    fn from(error: DpError) -> Self {
        match error {
            DpError::Overflow => CountError::Overflow,
            DpError::Problem(e) => CountError::Rule(e),
        }
    }
}
