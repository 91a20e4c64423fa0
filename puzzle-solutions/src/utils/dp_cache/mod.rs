//! Dynamic Programming Cache with Lazy Evaluation
//!
//! This module provides a memoization cache for dynamic programming problems where values
//! depend on other values in a directed acyclic graph (DAG).
//!
//! # Backend Types
//!
//! - [`VecBackend`]: Efficient for dense, sequential `usize` indices (auto-growing)
//! - [`HashMapBackend`]: Supports arbitrary hashable index types
//! - [`NoCacheBackend`]: Stores nothing; evaluates the whole recursion tree
//!
//! # Warning: Cycle Behavior
//!
//! **This cache does NOT support cycle detection.** A cyclic dependency graph
//! recurses until the stack overflows.
//!
//! # Example: Trait-based API with Builder
//!
//! ```rust
//! use puzzle_solutions::utils::dp_cache::{DpCache, DpError, DpProblem, HashMapBackend};
//!
//! struct GridPaths;
//!
//! impl DpProblem<(usize, usize), u64> for GridPaths {
//!     fn deps(&self, pos: &(usize, usize)) -> Result<Vec<(usize, usize)>, DpError> {
//!         let (r, c) = *pos;
//!         Ok(match (r, c) {
//!             (0, 0) => vec![],
//!             (0, _) => vec![(0, c - 1)],
//!             (_, 0) => vec![(r - 1, 0)],
//!             _ => vec![(r - 1, c), (r, c - 1)],
//!         })
//!     }
//!     fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> Result<u64, DpError> {
//!         Ok(if deps.is_empty() { 1 } else { deps.iter().sum() })
//!     }
//! }
//!
//! let cache = DpCache::builder()
//!     .backend(HashMapBackend::new())
//!     .problem(GridPaths)
//!     .build();
//! assert_eq!(cache.get(&(4, 4)).unwrap(), 70); // C(8,4) = 70 paths
//! ```

mod backend;
mod cache;
mod error;
mod problem;

pub use backend::{Backend, HashMapBackend, NoCacheBackend, VecBackend};
pub use cache::{DpCache, DpCacheBuilder};
pub use error::DpError;
pub use problem::{ClosureProblem, DpProblem};

#[cfg(test)]
mod tests;
