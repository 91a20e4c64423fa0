//! Memoized Transformation Counter
//!
//! Counts how many items a starting multiset turns into after applying a
//! branching rule (each item becomes one or two items) a given number of
//! times. The collection itself is never built: counts are memoized per
//! `(item, remaining steps)` in a [`DpCache`](crate::utils::dp_cache::DpCache)
//! owned by the counter.
//!
//! - [`TransformRule`]: the one-step rule, [`StoneRule`] being the reference one
//! - [`MemoCounter`]: `count` / `count_all` with its own memo table
//! - [`parse_items`]: reads the starting items from a line of text
//!
//! # Example
//!
//! ```rust
//! use puzzle_solutions::utils::transform_count::{parse_items, MemoCounter, StoneRule};
//!
//! let stones: Vec<u64> = parse_items("125 17").unwrap();
//! let counter = MemoCounter::new(StoneRule);
//!
//! assert_eq!(counter.count_all(&stones, 6).unwrap(), 22);
//! assert_eq!(counter.count_all(&stones, 25).unwrap(), 55312);
//! assert!(counter.count_all(&stones, -1).is_err());
//! ```

mod counter;
mod error;
mod rule;

pub use counter::{parse_items, CountKey, MemoCounter};
pub use error::CountError;
pub use rule::{ClosureRule, StoneRule, Successors, TransformRule, STONE_MULTIPLIER};
