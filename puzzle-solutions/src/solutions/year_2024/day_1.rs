use anyhow::{anyhow, bail};
use itertools::Itertools;
use puzzle_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parse_lines;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Both location lists, each sorted ascending.
#[derive(Debug)]
pub struct SharedData {
    left: Vec<u32>,
    right: Vec<u32>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let pairs = parse_lines(input, |line| {
            let Some((left, right)) = line.split_whitespace().collect_tuple() else {
                bail!("expected two location ids, got {line:?}");
            };
            let left: u32 = left.parse().map_err(|e| anyhow!("left id {left:?}: {e}"))?;
            let right: u32 = right.parse().map_err(|e| anyhow!("right id {right:?}: {e}"))?;
            Ok((left, right))
        })?;

        if pairs.is_empty() {
            return Err(ParseError::MissingData("location ids".into()));
        }

        let (mut left, mut right): (Vec<u32>, Vec<u32>) = pairs.into_iter().unzip();
        left.sort_unstable();
        right.sort_unstable();
        Ok(SharedData { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let distance: u64 = shared
            .left
            .iter()
            .zip(&shared.right)
            .map(|(l, r)| u64::from(l.abs_diff(*r)))
            .sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let occurrences = shared.right.iter().counts();
        let similarity: u64 = shared
            .left
            .iter()
            .map(|id| u64::from(*id) * occurrences.get(id).copied().unwrap_or(0) as u64)
            .sum();
        Ok(similarity.to_string())
    }
}
