use anyhow::bail;
use puzzle_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parse_lines;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Battery banks, one digit (0-9) per battery.
#[derive(Debug)]
pub struct SharedData {
    banks: Vec<Vec<u8>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let banks = parse_lines(input, |line| {
            line.bytes()
                .map(|b| match b {
                    b'0'..=b'9' => Ok(b - b'0'),
                    other => bail!("unexpected battery {:?}", other as char),
                })
                .collect::<anyhow::Result<Vec<u8>>>()
        })?;
        Ok(SharedData { banks })
    }
}

/// Largest number formed by picking `count` batteries in order.
///
/// Greedy: each digit is the highest one that still leaves enough batteries
/// for the remaining positions; ties take the leftmost. `None` when the bank
/// is shorter than `count`.
fn max_joltage(bank: &[u8], count: usize) -> Option<u64> {
    if bank.len() < count {
        return None;
    }
    let mut start = 0;
    let mut joltage = 0u64;
    for picked in 0..count {
        let end = bank.len() - (count - picked);
        let (offset, digit) = bank[start..=end]
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|(_, digit)| **digit)?;
        joltage = joltage * 10 + u64::from(*digit);
        start += offset + 1;
    }
    Some(joltage)
}

fn total_joltage(banks: &[Vec<u8>], count: usize) -> u64 {
    banks.iter().filter_map(|bank| max_joltage(bank, count)).sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_joltage(&shared.banks, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_joltage(&shared.banks, 12).to_string())
    }
}
