//! The capability interface a puzzle solver implements
//!
//! A solver is split in two: [`AocParser`] turns the raw input into the
//! day's shared data once, and one [`PartSolver<N>`] impl per part computes
//! an answer from it. `#[derive(AocSolver)]` ties the parts together into a
//! [`Solver`] that dispatches on the part number at runtime.

use crate::error::{ParseError, SolveError};

/// Parses a day's input into the data every part works on.
pub trait AocParser {
    /// Parsed input plus anything the parts want to cache between them.
    ///
    /// The lifetime lets the data borrow from the input when no owned copy
    /// is needed.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Part `N` of a puzzle.
///
/// Takes the shared data mutably, so an earlier part can leave behind a
/// memo table or partial results for a later one.
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Runtime dispatch over a solver's parts, normally derived.
pub trait Solver: AocParser {
    /// Highest part number; parts run from 1 to `PARTS`.
    const PARTS: u8;

    /// Answer `part`, or `SolveError::PartNotImplemented` when no
    /// `PartSolver` exists for it.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Bounds checking in front of [`Solver::solve_part`].
pub trait SolverExt: Solver {
    /// Rejects part 0 and anything above `PARTS` with
    /// `SolveError::PartOutOfRange` before dispatching.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        match part {
            1..=u8::MAX if part <= Self::PARTS => Self::solve_part(shared, part),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
