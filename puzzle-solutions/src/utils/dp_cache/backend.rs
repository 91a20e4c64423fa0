//! Storage backends for the DP cache.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use super::error::DpError;

/// A storage backend for the DP cache.
///
/// Implementations choose the data structure (Vec, HashMap, ...) based on
/// the index type.
///
/// # Contract
///
/// - `get_or_insert` calls `f` only when the index has no stored value
/// - if `f` fails, nothing is stored and the error is returned
/// - `get` never computes anything
pub trait Backend<I, K> {
    /// Returns the stored value for the index, if any.
    fn get(&self, index: &I) -> Option<&K>;

    /// Returns the stored value, computing and storing it with `f` if absent.
    fn get_or_insert<F>(&mut self, index: I, f: F) -> Result<&K, DpError>
    where
        F: FnOnce() -> Result<K, DpError>;

    /// Number of stored values.
    fn len(&self) -> usize;

    /// Whether nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every stored value.
    fn clear(&mut self);
}

/// A Vec-based backend for usize indices.
///
/// This backend is efficient for dense, sequential integer indices starting from 0.
/// The Vec automatically grows to accommodate new indices.
#[derive(Debug)]
pub struct VecBackend<K> {
    data: Vec<Option<K>>,
}

impl<K> VecBackend<K> {
    /// Creates a new empty VecBackend.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a new VecBackend with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.data.get(*index)?.as_ref()
    }

    fn get_or_insert<F>(&mut self, index: usize, f: F) -> Result<&K, DpError>
    where
        F: FnOnce() -> Result<K, DpError>,
    {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }

        let slot = &mut self.data[index];
        let value = match slot.take() {
            Some(value) => value,
            None => f()?,
        };
        Ok(slot.insert(value))
    }

    fn len(&self) -> usize {
        self.data.iter().filter(|slot| slot.is_some()).count()
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

/// A HashMap-based backend for arbitrary hashable indices.
///
/// This backend supports any index type that implements `Hash + Eq`.
/// It is suitable for sparse indices or composite keys such as
/// `(item, remaining_steps)`.
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    /// Creates a new empty HashMapBackend.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn get_or_insert<F>(&mut self, index: I, f: F) -> Result<&K, DpError>
    where
        F: FnOnce() -> Result<K, DpError>,
    {
        match self.data.entry(index) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(f()?)),
        }
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

/// A backend that remembers nothing.
///
/// Every lookup misses, so a `DpCache` over this backend evaluates the full
/// recursion tree. Used as a brute-force baseline.
#[derive(Debug)]
pub struct NoCacheBackend<K> {
    last: Option<K>,
}

impl<K> NoCacheBackend<K> {
    /// Creates a new NoCacheBackend.
    pub fn new() -> Self {
        Self { last: None }
    }
}

impl<K> Default for NoCacheBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, K> Backend<I, K> for NoCacheBackend<K> {
    fn get(&self, _index: &I) -> Option<&K> {
        None
    }

    fn get_or_insert<F>(&mut self, _index: I, f: F) -> Result<&K, DpError>
    where
        F: FnOnce() -> Result<K, DpError>,
    {
        Ok(self.last.insert(f()?))
    }

    fn len(&self) -> usize {
        0
    }

    fn clear(&mut self) {
        self.last = None;
    }
}
