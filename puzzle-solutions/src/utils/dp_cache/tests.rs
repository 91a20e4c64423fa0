//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::anyhow;

use super::*;

/// Simple problem with no dependencies for testing
struct NoDeps;

impl DpProblem<usize, i32> for NoDeps {
    fn deps(&self, _n: &usize) -> Result<Vec<usize>, DpError> {
        Ok(vec![])
    }

    fn compute(&self, n: &usize, _deps: Vec<i32>) -> Result<i32, DpError> {
        Ok((*n as i32) * 2)
    }
}

/// Fibonacci with overflow detection
struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Result<Vec<usize>, DpError> {
        Ok(if *n <= 1 { vec![] } else { vec![n - 1, n - 2] })
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> Result<u64, DpError> {
        if *n <= 1 {
            Ok(*n as u64)
        } else {
            deps[0].checked_add(deps[1]).ok_or(DpError::Overflow)
        }
    }
}

/// Collatz chain length
struct Collatz;

impl DpProblem<u64, u64> for Collatz {
    fn deps(&self, n: &u64) -> Result<Vec<u64>, DpError> {
        Ok(if *n <= 1 {
            vec![]
        } else if n % 2 == 0 {
            vec![n / 2]
        } else {
            vec![3 * n + 1]
        })
    }

    fn compute(&self, _n: &u64, deps: Vec<u64>) -> Result<u64, DpError> {
        Ok(if deps.is_empty() { 0 } else { 1 + deps[0] })
    }
}

#[test]
fn test_basic_cache_creation_and_single_value() {
    let cache = DpCache::builder()
        .backend(VecBackend::new())
        .problem(NoDeps)
        .build();

    assert_eq!(cache.get(&5).unwrap(), 10);
    assert_eq!(cache.get(&0).unwrap(), 0);
    assert_eq!(cache.get(&100).unwrap(), 200);
    assert_eq!(cache.len(), 3);
}

#[test]
fn test_fibonacci_linear_dependency_chain() {
    let cache = DpCache::builder()
        .backend(VecBackend::new())
        .problem(Fibonacci)
        .build();

    assert_eq!(cache.get(&0).unwrap(), 0);
    assert_eq!(cache.get(&1).unwrap(), 1);
    assert_eq!(cache.get(&2).unwrap(), 1);
    assert_eq!(cache.get(&10).unwrap(), 55);
    assert_eq!(cache.get(&20).unwrap(), 6765);
    assert_eq!(cache.get(&90).unwrap(), 2880067194370816120);
}

#[test]
fn test_overflow_is_reported_not_wrapped() {
    let cache = DpCache::builder()
        .backend(VecBackend::new())
        .problem(Fibonacci)
        .build();

    // fib(94) exceeds u64::MAX
    assert!(matches!(cache.get(&94), Err(DpError::Overflow)));
    // Everything below the failing index is still usable
    assert_eq!(cache.get(&93).unwrap(), 12200160415121876738);
    assert!(matches!(cache.get(&94), Err(DpError::Overflow)));
}

#[test]
fn test_diamond_dependency_memoization() {
    // A(0) depends on B(1) and C(2), both depend on D(3)
    let compute_count = Rc::new(Cell::new(0));

    struct Diamond {
        count: Rc<Cell<i32>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Result<Vec<usize>, DpError> {
            Ok(match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            })
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> Result<i32, DpError> {
            self.count.set(self.count.get() + 1);
            Ok(match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 10,
            })
        }
    }

    let cache = DpCache::builder()
        .backend(VecBackend::new())
        .problem(Diamond {
            count: compute_count.clone(),
        })
        .build();

    // D=10, B=20, C=30, A=50
    assert_eq!(cache.get(&0).unwrap(), 50);
    assert_eq!(compute_count.get(), 4);

    // Getting A again should not recompute
    assert_eq!(cache.get(&0).unwrap(), 50);
    assert_eq!(compute_count.get(), 4);

    // After clearing, everything is recomputed
    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.get(&0).unwrap(), 50);
    assert_eq!(cache.problem().count.get(), 8);
}

#[test]
fn test_vec_backend_get_or_insert() {
    let mut backend: VecBackend<i32> = VecBackend::new();

    let value = backend.get_or_insert(5, || Ok(42)).unwrap();
    assert_eq!(*value, 42);

    // Same index again returns the cached value, not recompute
    let value = backend.get_or_insert(5, || Ok(999)).unwrap();
    assert_eq!(*value, 42);

    assert_eq!(backend.get(&5), Some(&42));
    assert_eq!(backend.get(&10), None);
    assert_eq!(backend.get(&3), None);

    let value = backend.get_or_insert(10, || Ok(100)).unwrap();
    assert_eq!(*value, 100);
    assert_eq!(backend.get(&5), Some(&42));
    assert_eq!(backend.len(), 2);
}

#[test]
fn test_failed_insert_stores_nothing() {
    let mut backend: HashMapBackend<&str, i32> = HashMapBackend::new();

    let result = backend.get_or_insert("key", || Err(anyhow!("boom").into()));
    assert!(matches!(result, Err(DpError::Problem(_))));
    assert_eq!(backend.get(&"key"), None);
    assert!(backend.is_empty());

    let mut backend: VecBackend<i32> = VecBackend::new();
    assert!(backend.get_or_insert(2, || Err(DpError::Overflow)).is_err());
    assert_eq!(backend.get(&2), None);
    assert_eq!(backend.len(), 0);
}

#[test]
fn test_hashmap_backend_get_or_insert() {
    let mut backend: HashMapBackend<String, i32> = HashMapBackend::new();

    let value = backend.get_or_insert("key1".to_string(), || Ok(42)).unwrap();
    assert_eq!(*value, 42);

    let value = backend.get_or_insert("key1".to_string(), || Ok(999)).unwrap();
    assert_eq!(*value, 42);

    assert_eq!(backend.get(&"key1".to_string()), Some(&42));
    assert_eq!(backend.get(&"key2".to_string()), None);

    backend.clear();
    assert_eq!(backend.get(&"key1".to_string()), None);
}

#[test]
fn test_no_cache_backend_never_remembers() {
    let mut backend: NoCacheBackend<i32> = NoCacheBackend::new();

    let value = *backend.get_or_insert(1usize, || Ok(7)).unwrap();
    assert_eq!(value, 7);
    assert_eq!(Backend::<usize, i32>::get(&backend, &1), None);

    let value = *backend.get_or_insert(1usize, || Ok(8)).unwrap();
    assert_eq!(value, 8);
    assert_eq!(Backend::<usize, i32>::len(&backend), 0);
}

#[test]
fn test_no_cache_matches_memoized() {
    let calls = Rc::new(Cell::new(0u32));
    let counted = {
        let calls = calls.clone();
        ClosureProblem::new(
            |n: &usize| if *n <= 1 { vec![] } else { vec![n - 1, n - 2] },
            move |n: &usize, deps: Vec<u64>| {
                calls.set(calls.get() + 1);
                if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
            },
        )
    };

    let brute = DpCache::builder()
        .backend(NoCacheBackend::new())
        .problem(counted)
        .build();
    let memo = DpCache::builder()
        .backend(VecBackend::new())
        .problem(Fibonacci)
        .build();

    assert_eq!(brute.get(&15).unwrap(), memo.get(&15).unwrap());
    // The full tree of fib(15) has 2 * fib(16) - 1 nodes
    assert_eq!(calls.get(), 1973);
    assert_eq!(memo.len(), 16);
}

#[test]
fn test_hashmap_backend_with_string_keys() {
    struct StringLength;

    impl DpProblem<String, usize> for StringLength {
        fn deps(&self, s: &String) -> Result<Vec<String>, DpError> {
            Ok(if s.is_empty() {
                vec![]
            } else {
                vec![s[..s.len() - 1].to_string()]
            })
        }

        fn compute(&self, s: &String, deps: Vec<usize>) -> Result<usize, DpError> {
            Ok(if s.is_empty() { 0 } else { deps[0] + 1 })
        }
    }

    let cache = DpCache::builder()
        .backend(HashMapBackend::new())
        .problem(StringLength)
        .build();

    assert_eq!(cache.get(&"".to_string()).unwrap(), 0);
    assert_eq!(cache.get(&"abc".to_string()).unwrap(), 3);
    assert_eq!(cache.len(), 4);
}

#[test]
fn test_collatz_known_values() {
    let cache = DpCache::builder()
        .backend(HashMapBackend::new())
        .problem(Collatz)
        .build();

    assert_eq!(cache.get(&1u64).unwrap(), 0);
    assert_eq!(cache.get(&8u64).unwrap(), 3);
    // 6 -> 3 -> 10 -> 5 -> 16 -> 8 -> 4 -> 2 -> 1
    assert_eq!(cache.get(&6u64).unwrap(), 8);
    assert_eq!(cache.get(&27u64).unwrap(), 111);
}

#[test]
fn test_problem_error_propagates_from_deps() {
    struct Picky;

    impl DpProblem<u32, u32> for Picky {
        fn deps(&self, n: &u32) -> Result<Vec<u32>, DpError> {
            match *n {
                0 => Ok(vec![]),
                13 => Err(anyhow!("unlucky index {n}").into()),
                _ => Ok(vec![n - 1]),
            }
        }

        fn compute(&self, _n: &u32, deps: Vec<u32>) -> Result<u32, DpError> {
            Ok(deps.first().map_or(0, |d| d + 1))
        }
    }

    let cache = DpCache::with_problem(HashMapBackend::new(), Picky);
    assert_eq!(cache.get(&12).unwrap(), 12);

    let err = cache.get(&20).unwrap_err();
    assert_eq!(err.to_string(), "unlucky index 13");
    // 14..=20 were never stored
    assert_eq!(cache.len(), 13);
}
