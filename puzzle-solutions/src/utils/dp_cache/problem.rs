//! Trait-based DP problem definition.

use std::marker::PhantomData;

use super::error::DpError;

/// A trait for defining dynamic programming problems.
///
/// Implement this trait to define the dependency structure and computation
/// logic for a DP problem.
///
/// # Type Parameters
///
/// - `I`: Index type for the DP cache
/// - `K`: Value type stored in the cache
///
/// # Example
///
/// ```rust
/// use puzzle_solutions::utils::dp_cache::{DpCache, DpError, DpProblem, VecBackend};
///
/// struct Fibonacci;
///
/// impl DpProblem<usize, u64> for Fibonacci {
///     fn deps(&self, n: &usize) -> Result<Vec<usize>, DpError> {
///         Ok(if *n <= 1 { vec![] } else { vec![n - 1, n - 2] })
///     }
///
///     fn compute(&self, n: &usize, deps: Vec<u64>) -> Result<u64, DpError> {
///         if *n <= 1 { Ok(*n as u64) }
///         else { deps[0].checked_add(deps[1]).ok_or(DpError::Overflow) }
///     }
/// }
///
/// let cache = DpCache::builder()
///     .backend(VecBackend::new())
///     .problem(Fibonacci)
///     .build();
/// assert_eq!(cache.get(&10).unwrap(), 55);
/// ```
pub trait DpProblem<I, K> {
    /// Returns the indices that this index depends on.
    ///
    /// For base cases, return an empty vector.
    fn deps(&self, index: &I) -> Result<Vec<I>, DpError>;

    /// Computes the value for the given index using resolved dependency values.
    ///
    /// The `deps` vector contains the computed values for each dependency
    /// returned by `deps()`, in the same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> Result<K, DpError>;
}

/// Wrapper to adapt closure functions to the DpProblem trait.
///
/// Handy for one-off recurrences in tests and benchmarks where a named
/// problem type would be noise.
pub struct ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    dep_fn: D,
    compute_fn: C,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, D, C> ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    /// Creates a problem from an infallible dependency function and compute function.
    pub fn new(dep_fn: D, compute_fn: C) -> Self {
        Self {
            dep_fn,
            compute_fn,
            _phantom: PhantomData,
        }
    }
}

impl<I, K, D, C> DpProblem<I, K> for ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    fn deps(&self, index: &I) -> Result<Vec<I>, DpError> {
        Ok((self.dep_fn)(index))
    }

    fn compute(&self, index: &I, deps: Vec<K>) -> Result<K, DpError> {
        Ok((self.compute_fn)(index, deps))
    }
}
