//! Parsed solver instances and the object-safe handle the registry returns

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// One part's answer and how long it took to compute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartAnswer {
    pub part: u8,
    pub answer: String,
    pub elapsed: TimeDelta,
}

/// A day's input, parsed once, ready to answer any of its parts.
///
/// Parts run against the same shared data, in whatever order the caller
/// asks for them.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_time: TimeDelta,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let started = Utc::now();
        let shared = S::parse(input)?;

        Ok(Self {
            year,
            day,
            shared,
            parse_time: elapsed_since(started),
        })
    }
}

fn elapsed_since(started: DateTime<Utc>) -> TimeDelta {
    Utc::now() - started
}

/// Type-erased solver, as handed out by the registry.
///
/// ```no_run
/// use puzzle_solver::DynSolver;
///
/// fn report(solver: &mut dyn DynSolver) {
///     println!("{}/{:02} parsed in {}", solver.year(), solver.day(), solver.parse_time());
///     for part in 1..=solver.parts() {
///         match solver.solve(part) {
///             Ok(solved) => println!("  part {}: {} in {}", solved.part, solved.answer, solved.elapsed),
///             Err(e) => println!("  part {part}: {e}"),
///         }
///     }
/// }
/// ```
pub trait DynSolver {
    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Highest part number this solver answers
    fn parts(&self) -> u8;

    /// Time spent turning the input into shared data
    fn parse_time(&self) -> TimeDelta;

    /// Answer one part, timing only the solve.
    ///
    /// Parts outside `1..=parts()` fail with `SolveError::PartOutOfRange`.
    fn solve(&mut self, part: u8) -> Result<PartAnswer, SolveError>;
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_time(&self) -> TimeDelta {
        self.parse_time
    }

    fn solve(&mut self, part: u8) -> Result<PartAnswer, SolveError> {
        let started = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        Ok(PartAnswer {
            part,
            answer,
            elapsed: elapsed_since(started),
        })
    }
}
