use thiserror::Error;

/// Input that a solver's parser rejected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed input: {0}")]
    InvalidFormat(String),
    #[error("input is missing {0}")]
    MissingData(String),
}

/// Failure to answer one part
#[derive(Debug, Error)]
pub enum SolveError {
    /// No `PartSolver` exists for this part
    #[error("part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Part 0, or a part above the solver's `PARTS`
    #[error("part {0} is out of range")]
    PartOutOfRange(u8),
    #[error("solving failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap any error raised while computing an answer
    pub fn failed<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        SolveError::SolveFailed(error.into())
    }
}

/// Failure to get a parsed solver out of the registry
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("no solver registered for {0}/{1:02}")]
    NotFound(u16, u8),
    #[error("{0}/{1:02} is outside the supported years and days")]
    InvalidYearDay(u16, u8),
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

/// Rejected solver registration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("a solver is already registered for {0}/{1:02}")]
    DuplicateSolver(u16, u8),
    #[error("cannot register {0}/{1:02}: outside the supported years and days")]
    InvalidYearDay(u16, u8),
}
