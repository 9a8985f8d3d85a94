//! Fixed-capacity FIFO of recently produced values.
//!
//! Used to keep the last few processed images for thumbnail previews, but
//! generic over any value type. The container stores exactly what it is
//! given: pushing a [`PixelBuffer`](crate::PixelBuffer) moves it in, pushing
//! an `Arc` shares it.
//!
//! Eviction is strict FIFO: reading never reorders elements and `push` is the
//! only operation that removes one. Not synchronized; wrap in a mutex to share
//! across threads.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::HistoryError;

/// Default number of retained items.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Ring buffer keeping the newest `capacity` items.
#[derive(Debug, Clone)]
pub struct BoundedHistory<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedHistory<T> {
    /// Create an empty history holding at most `capacity` items.
    pub fn new(capacity: usize) -> Result<Self, HistoryError> {
        if capacity == 0 {
            return Err(HistoryError::ZeroCapacity);
        }
        Ok(Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append `item` as the newest entry.
    ///
    /// When the history is full the oldest entry is removed first and
    /// returned.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        if evicted.is_some() {
            debug!(capacity = self.capacity, "history full, evicted oldest entry");
        }
        self.items.push_back(item);
        evicted
    }

    /// Items from oldest to newest.
    pub fn items(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.items.iter()
    }

    /// Item at `index`, counted from the oldest.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Most recently pushed item.
    pub fn latest(&self) -> Option<&T> {
        self.items.back()
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Default for BoundedHistory<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::with_capacity(DEFAULT_HISTORY_CAPACITY),
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl<'a, T> IntoIterator for &'a BoundedHistory<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity_is_five() {
        let history: BoundedHistory<u32> = BoundedHistory::default();
        assert_eq!(history.capacity(), 5);
        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            BoundedHistory::<u8>::new(0).unwrap_err(),
            HistoryError::ZeroCapacity
        );
    }

    #[test]
    fn test_push_seven_keeps_last_five() {
        let mut history = BoundedHistory::new(5).unwrap();
        for i in 1..=7 {
            history.push(i);
        }
        assert_eq!(history.len(), 5);
        assert_eq!(history.items().copied().collect::<Vec<_>>(), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_push_returns_evicted() {
        let mut history = BoundedHistory::new(2).unwrap();
        assert_eq!(history.push("a"), None);
        assert_eq!(history.push("b"), None);
        assert!(history.is_full());
        assert_eq!(history.push("c"), Some("a"));
        assert_eq!(history.push("d"), Some("b"));
    }

    #[test]
    fn test_reads_do_not_reorder() {
        let mut history = BoundedHistory::new(3).unwrap();
        for i in 0..3 {
            history.push(i);
        }
        assert_eq!(history.get(0), Some(&0));
        assert_eq!(history.latest(), Some(&2));
        let _ = history.items().rev().count();
        history.push(3);
        // Oldest (0) goes first even though it was just read.
        assert_eq!(history.items().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_capacity_one() {
        let mut history = BoundedHistory::new(1).unwrap();
        history.push(10);
        assert_eq!(history.push(20), Some(10));
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest(), Some(&20));
    }

    #[test]
    fn test_iterates_by_reference() {
        let mut history = BoundedHistory::default();
        history.push(String::from("x"));
        history.push(String::from("y"));
        let joined: Vec<&str> = (&history).into_iter().map(String::as_str).collect();
        assert_eq!(joined, vec!["x", "y"]);
    }
}
