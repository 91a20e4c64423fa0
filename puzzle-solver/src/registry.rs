//! Explicit registry of solver factories, keyed by year and day
//!
//! Every solver is added by a [`SolverRegistryBuilder`] call naming its
//! type, year and day; nothing is discovered implicitly. The built
//! [`SolverRegistry`] is immutable and iterates in year/day order.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// Years a solver can be registered for
pub const YEARS: RangeInclusive<u16> = 2015..=2034;
/// Days a solver can be registered for
pub const DAYS: RangeInclusive<u8> = 1..=25;

/// Parses an input and returns a solver ready to answer its parts
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

fn is_supported(year: u16, day: u8) -> bool {
    YEARS.contains(&year) && DAYS.contains(&day)
}

/// What the registry knows about a solver without running it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
    /// Free-form labels used to select solvers, e.g. "memo" or "grid"
    pub tags: &'static [&'static str],
}

impl FactoryInfo {
    /// Whether every tag in `required` is attached to this solver
    pub fn has_all_tags<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required
            .iter()
            .all(|tag| self.tags.contains(&tag.as_ref()))
    }
}

struct Entry {
    factory: SolverFactory,
    parts: u8,
    tags: &'static [&'static str],
}

impl Entry {
    fn info(&self, (year, day): (u16, u8)) -> FactoryInfo {
        FactoryInfo {
            year,
            day,
            parts: self.parts,
            tags: self.tags,
        }
    }
}

/// Collects solver registrations, rejecting duplicates and unsupported
/// year/day pairs as they are added.
///
/// ```
/// use puzzle_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 1)]
/// struct Floors;
///
/// impl AocParser for Floors {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl PartSolver<1> for Floors {
///     fn solve(moves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         let floor: i32 = moves.chars().map(|c| if c == '(' { 1 } else { -1 }).sum();
///         Ok(floor.to_string())
///     }
/// }
///
/// let registry = SolverRegistryBuilder::new()
///     .register::<Floors>(2015, 1, &["strings"])
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2015, 1, "(()(()(").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "3");
/// ```
#[derive(Default)]
pub struct SolverRegistryBuilder {
    entries: BTreeMap<(u16, u8), Entry>,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register solver type `S`; its factory parses into a [`SolverInstance`]
    pub fn register<S>(
        self,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_factory(year, day, S::PARTS, tags, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
        })
    }

    /// Register a hand-written factory answering `parts` parts
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        tags: &'static [&'static str],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if !is_supported(year, day) {
            return Err(RegistrationError::InvalidYearDay(year, day));
        }
        if self.entries.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.entries.insert(
            (year, day),
            Entry {
                factory: Box::new(factory),
                parts,
                tags,
            },
        );
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

/// Registered solvers, looked up by `(year, day)`
pub struct SolverRegistry {
    entries: BTreeMap<(u16, u8), Entry>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for `year`/`day`.
    ///
    /// Unsupported pairs fail with `InvalidYearDay`, unregistered ones with
    /// `NotFound`, and parse failures are wrapped in `ParseError`.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        if !is_supported(year, day) {
            return Err(SolverError::InvalidYearDay(year, day));
        }
        let entry = self
            .entries
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Every registered solver, in ascending year/day order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().map(|(&key, entry)| entry.info(key))
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        self.entries
            .get(&(year, day))
            .map(|entry| entry.info((year, day)))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.entries.contains_key(&(year, day))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
