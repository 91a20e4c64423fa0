//! Memoized item counting on top of [`DpCache`].

use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;

use tracing::trace;

use super::error::CountError;
use super::rule::TransformRule;
use crate::utils::dp_cache::{Backend, DpCache, DpError, DpProblem, HashMapBackend};

/// Memo key: the item and how many steps are still to be applied.
pub type CountKey<T> = (T, usize);

/// `count(v, 0) = 1`, `count(v, r) = Σ count(s, r - 1)` over the successors of `v`.
///
/// Remaining steps strictly decrease along every dependency edge, so the
/// dependency graph is always a DAG.
struct CountProblem<R> {
    rule: R,
}

impl<T, R> DpProblem<CountKey<T>, u64> for CountProblem<R>
where
    R: TransformRule<T>,
{
    fn deps(&self, (item, remaining): &CountKey<T>) -> Result<Vec<CountKey<T>>, DpError> {
        if *remaining == 0 {
            return Ok(vec![]);
        }
        let successors = self.rule.successors(item)?;
        Ok(successors
            .into_iter()
            .map(|next| (next, remaining - 1))
            .collect())
    }

    fn compute(&self, _key: &CountKey<T>, counts: Vec<u64>) -> Result<u64, DpError> {
        if counts.is_empty() {
            return Ok(1);
        }
        counts
            .into_iter()
            .try_fold(0u64, u64::checked_add)
            .ok_or(DpError::Overflow)
    }
}

/// Counts how many items a starting set grows into without materializing it.
///
/// The counter owns its memo table, keyed by `(item, remaining steps)`. The
/// table lives as long as the counter and is shared by every `count` call on
/// it, so asking for 25 and then 75 steps reuses the first run's entries.
/// Call [`reset`](Self::reset) to start over.
///
/// # Example
///
/// ```rust
/// use puzzle_solutions::utils::transform_count::{MemoCounter, StoneRule};
///
/// let counter = MemoCounter::new(StoneRule);
/// assert_eq!(counter.count_all(&[125u64, 17], 25).unwrap(), 55312);
/// ```
pub struct MemoCounter<T, R, B = HashMapBackend<CountKey<T>, u64>> {
    cache: DpCache<CountKey<T>, u64, B, CountProblem<R>>,
}

impl<T, R> MemoCounter<T, R>
where
    T: Clone + Hash + Eq,
    R: TransformRule<T>,
{
    /// Creates a counter with an empty hash-map memo table.
    pub fn new(rule: R) -> Self {
        Self::with_backend(HashMapBackend::new(), rule)
    }
}

impl<T, R, B> MemoCounter<T, R, B>
where
    T: Clone,
    R: TransformRule<T>,
    B: Backend<CountKey<T>, u64>,
{
    /// Creates a counter storing its memo table in `backend`.
    ///
    /// A `NoCacheBackend` turns the counter into a brute-force evaluator.
    pub fn with_backend(backend: B, rule: R) -> Self {
        Self {
            cache: DpCache::builder()
                .backend(backend)
                .problem(CountProblem { rule })
                .build(),
        }
    }

    /// Number of items `item` turns into after `steps` applications of the rule.
    ///
    /// # Errors
    ///
    /// - [`CountError::NegativeSteps`] if `steps < 0`
    /// - [`CountError::Overflow`] if the count exceeds `u64::MAX`
    /// - [`CountError::Rule`] if the rule rejects an item it was given
    pub fn count(&self, item: &T, steps: i64) -> Result<u64, CountError> {
        let remaining = remaining_steps(steps)?;
        if remaining == 0 {
            return Ok(1);
        }
        Ok(self.cache.get(&(item.clone(), remaining))?)
    }

    /// Sum of [`count`](Self::count) over `items`; duplicates are counted
    /// independently.
    pub fn count_all<'a, I>(&self, items: I, steps: i64) -> Result<u64, CountError>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let remaining = remaining_steps(steps)?;
        let mut total = 0u64;
        let mut seen = 0usize;
        for item in items {
            let count = self.count(item, steps)?;
            total = total.checked_add(count).ok_or(CountError::Overflow)?;
            seen += 1;
        }
        trace!(
            items = seen,
            steps = remaining,
            memo_len = self.memo_len(),
            "counted items"
        );
        Ok(total)
    }

    /// Forgets every memoized count.
    pub fn reset(&self) {
        self.cache.clear();
    }

    /// Number of memoized `(item, remaining steps)` entries.
    pub fn memo_len(&self) -> usize {
        self.cache.len()
    }
}

fn remaining_steps(steps: i64) -> Result<usize, CountError> {
    usize::try_from(steps).map_err(|_| CountError::NegativeSteps(steps))
}

/// Parses a line of whitespace- or comma-separated items.
///
/// Empty tokens (repeated separators) are skipped; the first token that does
/// not parse is reported with its text.
///
/// ```rust
/// use puzzle_solutions::utils::transform_count::parse_items;
///
/// let items: Vec<u64> = parse_items("125 17, 0").unwrap();
/// assert_eq!(items, vec![125, 17, 0]);
/// assert!(parse_items::<u64>("12 x").is_err());
/// ```
pub fn parse_items<T>(line: &str) -> Result<Vec<T>, CountError>
where
    T: FromStr,
    T::Err: Display,
{
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse().map_err(|e: T::Err| CountError::InvalidItem {
                token: token.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}
