//! Lazily recomputed derived values.

use std::cell::OnceCell;

/// A derived value that is computed on first read and dropped on invalidation.
///
/// Reads go through `&self` so queries such as collision can fill the caches
/// of both operands. Invalidation needs `&mut self`, which every point edit
/// already holds. Nothing is recomputed until the next read.
#[derive(Debug, Clone)]
pub(crate) struct Cached<T> {
    cell: OnceCell<T>,
}

impl<T> Cached<T> {
    pub(crate) fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Returns the cached value, computing it first if it is stale.
    #[inline]
    pub(crate) fn get_or_compute(&self, compute: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(compute)
    }

    /// Returns the cached value only if it is fresh.
    #[inline]
    pub(crate) fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Mutable access to a fresh value, used to carry it through rigid transforms.
    #[inline]
    pub(crate) fn get_mut(&mut self) -> Option<&mut T> {
        self.cell.get_mut()
    }

    #[inline]
    pub(crate) fn invalidate(&mut self) {
        self.cell.take();
    }

    #[inline]
    pub(crate) fn is_stale(&self) -> bool {
        self.cell.get().is_none()
    }
}

impl<T> Default for Cached<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_computes_once_until_invalidated() {
        let calls = Cell::new(0);
        let mut cached: Cached<u32> = Cached::new();
        assert!(cached.is_stale());

        let compute = || {
            calls.set(calls.get() + 1);
            7
        };
        assert_eq!(*cached.get_or_compute(compute), 7);
        assert_eq!(*cached.get_or_compute(compute), 7);
        assert_eq!(calls.get(), 1);
        assert!(!cached.is_stale());

        cached.invalidate();
        assert!(cached.is_stale());
        assert!(cached.get().is_none());
        assert_eq!(calls.get(), 1);

        assert_eq!(*cached.get_or_compute(compute), 7);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_get_mut_only_when_fresh() {
        let mut cached: Cached<Vec<i32>> = Cached::new();
        assert!(cached.get_mut().is_none());
        cached.get_or_compute(|| vec![1, 2]);
        cached.get_mut().unwrap().push(3);
        assert_eq!(cached.get().unwrap(), &vec![1, 2, 3]);
    }

    #[test]
    fn test_clone_copies_value() {
        let cached: Cached<String> = Cached::new();
        cached.get_or_compute(|| "edges".to_string());
        let copy = cached.clone();
        assert_eq!(copy.get().map(String::as_str), Some("edges"));
    }
}
