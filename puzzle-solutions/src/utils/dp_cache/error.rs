//! Errors raised while resolving a DP value.

use thiserror::Error;

/// Error returned when a value cannot be computed.
///
/// Failed computations are never stored, so a later `get` for the same
/// index recomputes and fails the same way.
#[derive(Debug, Error)]
pub enum DpError {
    /// Combining dependency values overflowed the value type
    #[error("arithmetic overflow while combining dependency values")]
    Overflow,
    /// Problem-specific failure raised by `deps` or `compute`
    #[error(transparent)]
    Problem(#[from] anyhow::Error),
}
