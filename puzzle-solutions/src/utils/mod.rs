//! Building blocks shared by the solutions.

pub mod dp_cache;
pub mod transform_count;

use anyhow::anyhow;
use puzzle_solver::ParseError;

/// Parses every non-empty line with `parse_line`, prefixing failures with
/// their 1-based line number.
pub fn parse_lines<T, F>(input: &str, parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: Fn(&str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_idx, line)| {
            parse_line(line.trim()).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
        })
        .collect::<anyhow::Result<Vec<T>>>()
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
}
