use puzzle_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::transform_count::{parse_items, MemoCounter, StoneRule};

pub const PART_1_BLINKS: i64 = 25;
pub const PART_2_BLINKS: i64 = 75;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Engraved stones plus one counter shared by both parts, so the 75-blink
/// count reuses everything memoized for 25 blinks.
pub struct SharedData {
    stones: Vec<u64>,
    counter: MemoCounter<u64, StoneRule>,
}

impl SharedData {
    fn blink(&self, times: i64) -> Result<String, SolveError> {
        self.counter
            .count_all(&self.stones, times)
            .map(|count| count.to_string())
            .map_err(SolveError::failed)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stones: Vec<u64> =
            parse_items(input.trim()).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        if stones.is_empty() {
            return Err(ParseError::MissingData("stones".into()));
        }

        Ok(SharedData {
            stones,
            counter: MemoCounter::new(StoneRule),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.blink(PART_1_BLINKS)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.blink(PART_2_BLINKS)
    }
}
