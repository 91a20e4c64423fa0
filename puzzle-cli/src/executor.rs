//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use chrono::TimeDelta;
use puzzle_solver::{DynSolver, SolverRegistry};
use std::ops::RangeInclusive;
use tracing::{debug, info, warn};

/// Result from a single solver execution
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Set on the first part run for a day, where parsing happened
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs every selected solver in year/day/part order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
    tags: Vec<String>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone(), config.input_kind),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
            tags: config.tags.clone(),
        }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .filter(|info| info.has_all_tags(self.tags.as_slice()))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if (1..=max_parts).contains(&p) => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items, handing each result to `sink` as soon as it
    /// is ready
    ///
    /// A failing day or part never stops the run; every failure is also
    /// collected into the returned error.
    pub fn execute<F>(&self, mut sink: F) -> Result<(), ArcExecutorError>
    where
        F: FnMut(SolverResult),
    {
        let work_items = self.collect_work_items();
        info!(solvers = work_items.len(), "running solvers");

        let mut collected_error: Option<ArcExecutorError> = None;
        for work in &work_items {
            if let Err(e) = self.run_solver(work, &mut sink) {
                collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
            }
        }
        collected_error.map_or(Ok(()), Err)
    }

    /// Run a single solver for its selected parts
    fn run_solver<F>(&self, work: &WorkItem, sink: &mut F) -> Result<(), ArcExecutorError>
    where
        F: FnMut(SolverResult),
    {
        let (year, day) = (work.year, work.day);

        let input = self.inputs.read(year, day).map_err(|source| {
            warn!(year, day, error = %source, "input unavailable");
            ArcExecutorError::from(ExecutorError::Input { year, day, source })
        });
        let input = match input {
            Ok(input) => input,
            Err(e) => return Err(fail_all_parts(work, e, sink)),
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(source) => {
                let e = ExecutorError::Solver { year, day, source }.into();
                return Err(fail_all_parts(work, e, sink));
            }
        };

        let mut parse_duration = Some(solver.parse_time());
        let mut collected_error = None;
        for part in work.parts.clone() {
            let result = solve_part(&mut *solver, part, parse_duration.take());
            if let Err(e) = &result.answer {
                collected_error = Some(ArcExecutorError::combine_opt(collected_error, e.clone()));
            }
            sink(result);
        }
        collected_error.map_or(Ok(()), Err)
    }
}

/// Emit the same error for every selected part of a day
fn fail_all_parts<F>(work: &WorkItem, error: ArcExecutorError, sink: &mut F) -> ArcExecutorError
where
    F: FnMut(SolverResult),
{
    for part in work.parts.clone() {
        sink(SolverResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(error.clone()),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        });
    }
    error
}

/// Solve a single part
fn solve_part(
    solver: &mut dyn DynSolver,
    part: u8,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    let (year, day) = (solver.year(), solver.day());
    match solver.solve(part) {
        Ok(solved) => {
            let solve_duration = solved.elapsed;
            debug!(
                year,
                day,
                part,
                solve_us = solve_duration.num_microseconds(),
                "solved part"
            );
            SolverResult {
                year,
                day,
                part,
                answer: Ok(solved.answer),
                parse_duration,
                solve_duration,
            }
        }
        Err(source) => {
            debug!(year, day, part, error = %source, "part failed");
            SolverResult {
                year,
                day,
                part,
                answer: Err(ExecutorError::Part {
                    year,
                    day,
                    part,
                    source,
                }
                .into()),
                parse_duration,
                solve_duration: TimeDelta::zero(),
            }
        }
    }
}
