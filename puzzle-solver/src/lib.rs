//! Framework for puzzle solvers that parse once and answer several parts
//!
//! - [`AocParser`], [`PartSolver`] and [`Solver`] form the capability
//!   interface; `#[derive(AocSolver)]` generates the `Solver` dispatch from
//!   the `PartSolver<N>` impls.
//! - [`SolverInstance`] holds one day's parsed data and times each part;
//!   callers drive it through the object-safe [`DynSolver`].
//! - [`SolverRegistryBuilder`] maps `(year, day)` to solver factories by
//!   explicit registration calls.
//!
//! All parts of one instance share `SharedData` mutably, so part 2 can reuse
//! anything part 1 stored, such as a memo table.
//!
//! ```
//! use puzzle_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverExt};
//!
//! /// Part 1 counts the depth readings, part 2 the readings deeper than the first.
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Sonar;
//!
//! impl AocParser for Sonar {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .split_whitespace()
//!             .map(|depth| depth.parse().map_err(|_| ParseError::InvalidFormat(depth.into())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sonar {
//!     fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(depths.len().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Sonar {
//!     fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         let first = depths.first().copied().ok_or_else(|| SolveError::failed("no readings"))?;
//!         Ok(depths.iter().filter(|&&d| d > first).count().to_string())
//!     }
//! }
//!
//! let mut depths = Sonar::parse("199 200 208 199 263").unwrap();
//! assert_eq!(Sonar::solve_part_checked_range(&mut depths, 1).unwrap(), "5");
//! assert_eq!(Sonar::solve_part_checked_range(&mut depths, 2).unwrap(), "3");
//! assert!(Sonar::solve_part_checked_range(&mut depths, 3).is_err());
//! ```

// Lets the derive macro's `::puzzle_solver` paths resolve inside this crate.
extern crate self as puzzle_solver;

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, PartAnswer, SolverInstance};
pub use registry::{
    DAYS, FactoryInfo, SolverFactory, SolverRegistry, SolverRegistryBuilder, YEARS,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

pub use puzzle_solver_macros::AocSolver;
