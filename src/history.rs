use std::iter::{Chain, Copied};
use std::slice::Iter;

/// Fixed-capacity ring of displacement samples, used for trails.
///
/// The capacity is set once at construction. `record` overwrites the oldest sample and keeps
/// the cursor in range itself, so callers never deal with wraparound.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryBuffer {
    samples: Vec<i32>,
    cursor: usize,
}

/// Samples in render order: oldest retained sample first, newest last.
pub type HistoryIter<'a> = Chain<Copied<Iter<'a, i32>>, Copied<Iter<'a, i32>>>;

impl HistoryBuffer {
    pub fn new(capacity: usize) -> HistoryBuffer {
        HistoryBuffer {
            samples: vec![0; capacity.max(1)],
            cursor: 0,
        }
    }

    pub fn record(&mut self, value: i32) {
        self.samples[self.cursor] = value;
        self.cursor = (self.cursor + 1) % self.samples.len();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Slot the next `record` will overwrite. This is also the oldest sample.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn latest(&self) -> i32 {
        let len = self.samples.len();
        self.samples[(self.cursor + len - 1) % len]
    }

    /// Lazy walk from the cursor forward through the wrapped buffer. Clone it to restart.
    pub fn iter(&self) -> HistoryIter<'_> {
        let (newer, older) = self.samples.split_at(self.cursor);
        older.iter().copied().chain(newer.iter().copied())
    }

    pub fn snapshot(&self) -> Vec<i32> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let history = HistoryBuffer::new(4);
        assert_eq!(history.len(), 4);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.snapshot(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn cursor_returns_after_full_lap() {
        let mut history = HistoryBuffer::new(100);
        for value in 0..37 {
            history.record(value);
        }
        let start = history.cursor();
        for value in 0..100 {
            history.record(value);
        }
        assert_eq!(history.cursor(), start);
        assert_eq!(history.len(), 100);
    }

    #[test]
    fn render_order_is_oldest_first() {
        let mut history = HistoryBuffer::new(3);
        for value in 1..=5 {
            history.record(value);
        }
        // 4 and 5 wrapped over 1 and 2.
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.snapshot(), vec![3, 4, 5]);
        assert_eq!(history.latest(), 5);
    }

    #[test]
    fn iter_is_restartable() {
        let mut history = HistoryBuffer::new(3);
        history.record(7);
        let walk = history.iter();
        let first: Vec<i32> = walk.clone().collect();
        let second: Vec<i32> = walk.collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![0, 0, 7]);
    }

    #[test]
    fn zero_capacity_still_holds_one_sample() {
        let mut history = HistoryBuffer::new(0);
        history.record(9);
        history.record(11);
        assert_eq!(history.len(), 1);
        assert_eq!(history.snapshot(), vec![11]);
    }
}
