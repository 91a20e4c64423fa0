use std::collections::BTreeSet;

use anyhow::anyhow;
use puzzle_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Every product id covered by at least one range, deduplicated.
#[derive(Debug)]
pub struct SharedData {
    ids: BTreeSet<u64>,
}

fn parse_range(range: &str) -> anyhow::Result<(u64, u64)> {
    let (start, end) = range
        .split_once('-')
        .ok_or_else(|| anyhow!("range {range:?} is missing '-'"))?;
    let start: u64 = start.trim().parse().map_err(|e| anyhow!("range start {start:?}: {e}"))?;
    let end: u64 = end.trim().parse().map_err(|e| anyhow!("range end {end:?}: {e}"))?;
    if start > end {
        return Err(anyhow!("range {range:?} ends before it starts"));
    }
    Ok((start, end))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let ranges = input
            .split(',')
            .map(str::trim)
            .filter(|range| !range.is_empty())
            .enumerate()
            .map(|(idx, range)| parse_range(range).map_err(|e| anyhow!("(range {}) {}", idx + 1, e)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        if ranges.is_empty() {
            return Err(ParseError::MissingData("id ranges".into()));
        }

        let ids = ranges
            .into_iter()
            .flat_map(|(start, end)| start..=end)
            .collect();
        Ok(SharedData { ids })
    }
}

/// Whether `digits` are one block repeated `times` times.
fn is_repeated(digits: &[u8], times: usize) -> bool {
    if times < 2 || digits.len() % times != 0 {
        return false;
    }
    let block = digits.len() / times;
    digits.chunks(block).all(|chunk| chunk == &digits[..block])
}

fn sum_matching<F>(ids: &BTreeSet<u64>, invalid: F) -> u64
where
    F: Fn(&[u8]) -> bool,
{
    ids.iter()
        .filter(|id| invalid(id.to_string().as_bytes()))
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_matching(&shared.ids, |digits| is_repeated(digits, 2)).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total = sum_matching(&shared.ids, |digits| {
            (2..=digits.len()).any(|times| is_repeated(digits, times))
        });
        Ok(total.to_string())
    }
}
