use anyhow::{anyhow, bail};
use puzzle_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parse_lines;

const DIAL_SIZE: u32 = 100;
const DIAL_START: u32 = 50;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rotation {
    Left(u32),
    Right(u32),
}

#[derive(Debug)]
pub struct SharedData {
    rotations: Vec<Rotation>,
    zero_counts: Option<ZeroCounts>,
}

#[derive(Debug, Clone, Copy)]
struct ZeroCounts {
    /// Rotations that leave the dial at 0
    landed: u64,
    /// Clicks that move the dial onto 0, wherever the rotation ends
    passed: u64,
}

fn parse_rotation(line: &str) -> anyhow::Result<Rotation> {
    let (direction, clicks) = line.split_at_checked(1).ok_or_else(|| anyhow!("empty rotation"))?;
    let clicks: u32 = clicks
        .parse()
        .map_err(|e| anyhow!("click count {clicks:?}: {e}"))?;
    match direction {
        "L" => Ok(Rotation::Left(clicks)),
        "R" => Ok(Rotation::Right(clicks)),
        other => bail!("first character need to be 'L' or 'R', got {other:?}"),
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(SharedData {
            rotations: parse_lines(input, parse_rotation)?,
            zero_counts: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).landed.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).passed.to_string())
    }
}

fn solve_once_for_both(shared: &mut SharedData) -> ZeroCounts {
    let rotations = &shared.rotations;
    *shared.zero_counts.get_or_insert_with(|| {
        let mut position = DIAL_START;
        let mut counts = ZeroCounts {
            landed: 0,
            passed: 0,
        };

        for rotation in rotations {
            let (Rotation::Left(clicks) | Rotation::Right(clicks)) = *rotation;
            let (full_turns, rest) = (clicks / DIAL_SIZE, clicks % DIAL_SIZE);
            // Whole turns each pass 0 once; only `rest` (below DIAL_SIZE) is added to the position
            let (to_zero, next) = match *rotation {
                Rotation::Right(_) => (
                    DIAL_SIZE - position,
                    (position + rest) % DIAL_SIZE,
                ),
                Rotation::Left(_) => (
                    match position {
                        0 => DIAL_SIZE,
                        p => p,
                    },
                    (position + DIAL_SIZE - rest) % DIAL_SIZE,
                ),
            };
            counts.passed += u64::from(full_turns) + u64::from(rest >= to_zero);
            position = next;
            if position == 0 {
                counts.landed += 1;
            }
        }

        counts
    })
}
