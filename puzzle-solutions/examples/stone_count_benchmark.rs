//! Benchmark comparing memo backends on the stone counter.
//!
//! Run with: cargo run --example stone_count_benchmark --release
//!
//! Counts stones for increasing blink counts and compares:
//! - Full expansion of the stone list (only for small blink counts)
//! - NoCacheBackend (whole recursion tree, no memoization)
//! - HashMapBackend (the default `MemoCounter`)

use std::time::Instant;

use puzzle_solutions::utils::dp_cache::NoCacheBackend;
use puzzle_solutions::utils::transform_count::{
    parse_items, MemoCounter, StoneRule, TransformRule,
};

const STONES: &str = "125 17 0 2024 9 999999";
const EXPANSION_LIMIT: i64 = 25;
const NO_CACHE_LIMIT: i64 = 30;

/// Materializes every stone; exponential in `blinks`.
fn expand(stones: &[u64], blinks: i64) -> anyhow::Result<u64> {
    let mut current = stones.to_vec();
    for _ in 0..blinks {
        let mut next = Vec::with_capacity(current.len() * 2);
        for stone in &current {
            next.extend(StoneRule.successors(stone)?);
        }
        current = next;
    }
    Ok(current.len() as u64)
}

fn main() -> anyhow::Result<()> {
    let stones: Vec<u64> = parse_items(STONES)?;

    println!("Stone Count Benchmark");
    println!("=====================");
    println!("Initial stones: {:?}\n", stones);
    println!(
        "{:>6} {:>20} {:>14} {:>14} {:>14} {:>10}",
        "blinks", "stones", "expansion", "no cache", "memo", "memo keys"
    );

    for blinks in [5, 10, 15, 20, 25, 30, 40, 50, 75] {
        let start = Instant::now();
        let memo = MemoCounter::new(StoneRule);
        let count = memo.count_all(&stones, blinks)?;
        let memo_time = start.elapsed();

        let expansion_time = if blinks <= EXPANSION_LIMIT {
            let start = Instant::now();
            assert_eq!(expand(&stones, blinks)?, count);
            format!("{:?}", start.elapsed())
        } else {
            "-".to_string()
        };

        let no_cache_time = if blinks <= NO_CACHE_LIMIT {
            let start = Instant::now();
            let brute: MemoCounter<u64, _, _> =
                MemoCounter::with_backend(NoCacheBackend::new(), StoneRule);
            assert_eq!(brute.count_all(&stones, blinks)?, count);
            format!("{:?}", start.elapsed())
        } else {
            "-".to_string()
        };

        println!(
            "{:>6} {:>20} {:>14} {:>14} {:>14} {:>10}",
            blinks,
            count,
            expansion_time,
            no_cache_time,
            format!("{:?}", memo_time),
            memo.memo_len()
        );
    }

    Ok(())
}
