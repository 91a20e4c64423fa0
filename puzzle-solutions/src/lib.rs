//! Puzzle solutions and the utilities they share
//!
//! Each day is a `#[derive(AocSolver)]` type under [`solutions`]. Nothing is
//! discovered implicitly: [`register_all`] adds every day to a registry
//! builder with one explicit call per solver.
//!
//! ```rust
//! use puzzle_solver::{DynSolver, SolverRegistryBuilder};
//!
//! let registry = puzzle_solutions::register_all(SolverRegistryBuilder::new())
//!     .unwrap()
//!     .build();
//! let mut solver = registry.create_solver(2024, 11, "125 17").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "55312");
//! ```

pub mod solutions;
pub mod utils;

use puzzle_solver::{RegistrationError, SolverRegistryBuilder};

use solutions::{year_2024, year_2025};

/// Registers every solution in this crate.
pub fn register_all(
    builder: SolverRegistryBuilder,
) -> Result<SolverRegistryBuilder, RegistrationError> {
    builder
        .register::<year_2024::day_1::Solver>(2024, 1, &["sorting"])?
        .register::<year_2024::day_11::Solver>(2024, 11, &["memo", "recursion"])?
        .register::<year_2024::day_12::Solver>(2024, 12, &["grid", "flood-fill"])?
        .register::<year_2025::day_1::Solver>(2025, 1, &["simulation"])?
        .register::<year_2025::day_2::Solver>(2025, 2, &["strings"])?
        .register::<year_2025::day_3::Solver>(2025, 3, &["greedy"])
}
