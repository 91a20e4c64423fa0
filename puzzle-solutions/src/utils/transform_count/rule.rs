//! Branching transformation rules.

use std::iter::{Chain, Once, once};
use std::marker::PhantomData;

use anyhow::anyhow;

/// What one item turns into after a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Successors<T> {
    One(T),
    Two(T, T),
}

impl<T> Successors<T> {
    /// Number of successor items (1 or 2).
    pub fn len(&self) -> usize {
        match self {
            Successors::One(_) => 1,
            Successors::Two(_, _) => 2,
        }
    }

    /// Returns false: a step always yields at least one item.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<T> IntoIterator for Successors<T> {
    type Item = T;
    type IntoIter = Chain<Once<T>, std::option::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Successors::One(a) => once(a).chain(None),
            Successors::Two(a, b) => once(a).chain(Some(b)),
        }
    }
}

/// A pure, deterministic one-step transformation.
///
/// Implementations must be closed over their own outputs: any item a rule
/// produces must itself be accepted by the rule. Failing to do so surfaces as
/// an error from the counter, never a panic.
pub trait TransformRule<T> {
    fn successors(&self, item: &T) -> anyhow::Result<Successors<T>>;
}

/// The stone rule.
///
/// - `0` becomes `1`
/// - an even number of decimal digits splits into its two halves
///   (`1000` becomes `10` and `0`)
/// - anything else is multiplied by 2024
#[derive(Debug, Clone, Copy, Default)]
pub struct StoneRule;

/// Multiplier applied to stones that neither are zero nor split.
pub const STONE_MULTIPLIER: u64 = 2024;

impl TransformRule<u64> for StoneRule {
    fn successors(&self, stone: &u64) -> anyhow::Result<Successors<u64>> {
        let stone = *stone;
        if stone == 0 {
            return Ok(Successors::One(1));
        }

        let digits = stone.ilog10() + 1;
        if digits % 2 == 0 {
            let divisor = 10u64.pow(digits / 2);
            Ok(Successors::Two(stone / divisor, stone % divisor))
        } else {
            stone
                .checked_mul(STONE_MULTIPLIER)
                .map(Successors::One)
                .ok_or_else(|| anyhow!("stone {stone} overflows u64 when multiplied by {STONE_MULTIPLIER}"))
        }
    }
}

/// Adapts a closure to [`TransformRule`].
///
/// ```rust
/// use puzzle_solutions::utils::transform_count::{ClosureRule, MemoCounter, Successors};
///
/// // Every item doubles each step
/// let doubling = ClosureRule::new(|n: &u32| Ok(Successors::Two(*n, *n)));
/// let counter = MemoCounter::new(doubling);
/// assert_eq!(counter.count(&7, 10).unwrap(), 1024);
/// ```
pub struct ClosureRule<T, F>
where
    F: Fn(&T) -> anyhow::Result<Successors<T>>,
{
    rule_fn: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, F> ClosureRule<T, F>
where
    F: Fn(&T) -> anyhow::Result<Successors<T>>,
{
    pub fn new(rule_fn: F) -> Self {
        Self {
            rule_fn,
            _phantom: PhantomData,
        }
    }
}

impl<T, F> TransformRule<T> for ClosureRule<T, F>
where
    F: Fn(&T) -> anyhow::Result<Successors<T>>,
{
    fn successors(&self, item: &T) -> anyhow::Result<Successors<T>> {
        (self.rule_fn)(item)
    }
}
