//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use itertools::Itertools;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{}", answer),
            (Ok(_), false) => println!("{}", format_result(result)),
            (Err(e), true) => eprintln!("Error: {}", e),
            (Err(_), false) => eprintln!("{}", format_result(result)),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let summary = Summary::from_results(results);
        println!();
        println!("--- Summary ---");
        println!(
            "Solvers: {} solved, {} failed",
            summary.total.solved, summary.total.failed
        );
        println!("Total parse time: {}", format_duration(summary.total.parse_time));
        println!("Total solve time: {}", format_duration(summary.total.solve_time));
        if summary.years.len() > 1 {
            for year in &summary.years {
                println!(
                    "  {}: {} solved, {} failed, {}",
                    year.year,
                    year.solved,
                    year.failed,
                    format_duration(year.parse_time + year.solve_time)
                );
            }
        }
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// `YYYY/DD Part P: answer (parse: …, solve: …)`, or the error
pub fn format_result(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{}: Error - {}", prefix, e),
    }
}

/// Counts and times for a group of results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub year: u16,
    pub solved: usize,
    pub failed: usize,
    pub parse_time: TimeDelta,
    pub solve_time: TimeDelta,
}

impl Tally {
    fn new(year: u16) -> Self {
        Self {
            year,
            solved: 0,
            failed: 0,
            parse_time: TimeDelta::zero(),
            solve_time: TimeDelta::zero(),
        }
    }

    fn add(mut self, result: &SolverResult) -> Self {
        if result.answer.is_ok() {
            self.solved += 1;
            self.parse_time += result.parse_duration.unwrap_or_default();
            self.solve_time += result.solve_duration;
        } else {
            self.failed += 1;
        }
        self
    }
}

/// Overall tally plus one per year, in the order the years were run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: Tally,
    pub years: Vec<Tally>,
}

impl Summary {
    pub fn from_results(results: &[SolverResult]) -> Self {
        let total = results.iter().fold(Tally::new(0), Tally::add);
        let years = results
            .iter()
            .chunk_by(|r| r.year)
            .into_iter()
            .map(|(year, group)| group.fold(Tally::new(year), Tally::add))
            .collect();
        Self { total, years }
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
