//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] puzzle_solver::RegistrationError),

    /// One or more solvers failed (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Errors reading a puzzle input
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file does not exist
    #[error("input file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Input could not be loaded
    #[error("{year}/{day:02}: {source}")]
    Input {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    /// Solver could not be created (not registered, or parsing failed)
    #[error("{year}/{day:02}: {source}")]
    Solver {
        year: u16,
        day: u8,
        #[source]
        source: puzzle_solver::SolverError,
    },

    /// A single part failed
    #[error("{year}/{day:02} part {part}: {source}")]
    Part {
        year: u16,
        day: u8,
        part: u8,
        #[source]
        source: puzzle_solver::SolveError,
    },

    /// Multiple errors collected during execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Combine two Arc-wrapped errors into one, flattening `Multiple`s
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second);
                combined
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }

    /// The individual failures, in the order they were collected
    pub fn flatten(&self) -> Vec<ArcExecutorError> {
        match self.inner() {
            ExecutorError::Multiple(v) => v.clone(),
            _ => vec![self.clone()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part_error(day: u8) -> ArcExecutorError {
        ExecutorError::Part {
            year: 2024,
            day,
            part: 1,
            source: puzzle_solver::SolveError::PartNotImplemented(1),
        }
        .into()
    }

    fn days(error: &ArcExecutorError) -> Vec<u8> {
        error
            .flatten()
            .iter()
            .map(|e| match e.inner() {
                ExecutorError::Part { day, .. } => *day,
                other => panic!("unexpected {other}"),
            })
            .collect()
    }

    #[test]
    fn test_combine_keeps_order_and_flattens() {
        let ab = ArcExecutorError::combine(part_error(1), part_error(2));
        assert_eq!(days(&ab), vec![1, 2]);

        let abc = ArcExecutorError::combine(ab.clone(), part_error(3));
        assert_eq!(days(&abc), vec![1, 2, 3]);

        let zab = ArcExecutorError::combine(part_error(0), ab.clone());
        assert_eq!(days(&zab), vec![0, 1, 2]);

        let abab = ArcExecutorError::combine(ab.clone(), ab);
        assert_eq!(days(&abab), vec![1, 2, 1, 2]);
        assert_eq!(abab.to_string(), "Multiple errors occurred (4 total)");
    }

    #[test]
    fn test_combine_opt() {
        let single = ArcExecutorError::combine_opt(None, part_error(5));
        assert_eq!(days(&single), vec![5]);
        assert_eq!(single.to_string(), "2024/05 part 1: part 1 is not implemented");

        let both = ArcExecutorError::combine_opt(Some(single), part_error(6));
        assert_eq!(days(&both), vec![5, 6]);
    }
}
