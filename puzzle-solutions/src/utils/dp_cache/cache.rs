//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::error::DpError;
use super::problem::DpProblem;

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// `DpCache` provides memoization for recursive computations where values may depend
/// on other values. Dependencies are resolved automatically and each value is computed
/// at most once per backend lifetime.
///
/// # Type Parameters
///
/// - `I`: Index type (must implement `Clone`)
/// - `K`: Value type (must implement `Clone`)
/// - `B`: Backend storage type (must implement `Backend<I, K>`)
/// - `P`: Problem type (must implement `DpProblem<I, K>`)
///
/// # Warning: No Cycle Detection
///
/// This cache does NOT detect cycles in the dependency graph. If cycles exist,
/// the recursion never terminates (stack overflow).
/// **Users MUST ensure dependencies form a DAG.**
///
/// # Example
///
/// ```rust
/// use puzzle_solutions::utils::dp_cache::{ClosureProblem, DpCache, VecBackend};
///
/// let factorial = ClosureProblem::new(
///     |n: &usize| if *n == 0 { vec![] } else { vec![n - 1] },
///     |n: &usize, deps: Vec<u64>| if *n == 0 { 1 } else { (*n as u64) * deps[0] },
/// );
///
/// let cache = DpCache::with_problem(VecBackend::new(), factorial);
/// assert_eq!(cache.get(&5).unwrap(), 120);
/// ```
pub struct DpCache<I, K, B, P> {
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<(I, K)>,
}

impl DpCache<(), (), (), ()> {
    /// Starts building a cache; both a backend and a problem must be supplied.
    pub fn builder() -> DpCacheBuilder<(), ()> {
        DpCacheBuilder {
            backend: (),
            problem: (),
        }
    }
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Creates a new DpCache with the given backend and problem definition.
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Retrieves the value for the given index, computing it if necessary.
    ///
    /// If the value is already cached, returns a clone of the cached value.
    /// Otherwise, resolves all dependencies recursively, computes the value,
    /// caches it, and returns a clone.
    ///
    /// # Errors
    ///
    /// Returns the first [`DpError`] raised by `deps` or `compute` anywhere in
    /// the dependency tree. Values computed before the failure stay cached.
    pub fn get(&self, index: &I) -> Result<K, DpError> {
        // Fast path: check if already computed
        if let Some(value) = self.backend.borrow().get(index) {
            return Ok(value.clone());
        }

        // Resolve dependencies recursively (no borrow held)
        let deps = self.problem.deps(index)?;
        let dep_values = deps
            .iter()
            .map(|dep| self.get(dep))
            .collect::<Result<Vec<K>, DpError>>()?;

        let mut backend = self.backend.borrow_mut();
        let value = backend
            .get_or_insert(index.clone(), || self.problem.compute(index, dep_values))?
            .clone();
        Ok(value)
    }

    /// Number of memoized values.
    pub fn len(&self) -> usize {
        self.backend.borrow().len()
    }

    /// Whether nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.backend.borrow().is_empty()
    }

    /// Forgets every memoized value.
    pub fn clear(&self) {
        self.backend.borrow_mut().clear();
    }

    /// The problem definition driving this cache.
    pub fn problem(&self) -> &P {
        &self.problem
    }
}

/// Typed builder returned by [`DpCache::builder`].
///
/// `()` marks a part that has not been supplied yet; `build` only exists once
/// both the backend and the problem are set.
pub struct DpCacheBuilder<B, P> {
    backend: B,
    problem: P,
}

impl<P> DpCacheBuilder<(), P> {
    /// Sets the storage backend.
    pub fn backend<B>(self, backend: B) -> DpCacheBuilder<B, P> {
        DpCacheBuilder {
            backend,
            problem: self.problem,
        }
    }
}

impl<B> DpCacheBuilder<B, ()> {
    /// Sets the problem definition.
    pub fn problem<P>(self, problem: P) -> DpCacheBuilder<B, P> {
        DpCacheBuilder {
            backend: self.backend,
            problem,
        }
    }
}

impl<B, P> DpCacheBuilder<B, P> {
    /// Builds the cache.
    pub fn build<I, K>(self) -> DpCache<I, K, B, P>
    where
        I: Clone,
        K: Clone,
        B: Backend<I, K>,
        P: DpProblem<I, K>,
    {
        DpCache::with_problem(self.backend, self.problem)
    }
}
