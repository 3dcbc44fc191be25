//! Min-priority queue shared by Prim, Dijkstra and A*.
//!
//! `BinaryHeap` is a max-heap and float weights are not `Ord`, so entries
//! order by [`Weight::compare`] reversed. Equal keys pop in push order, which
//! keeps every algorithm built on top deterministic.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use graph_toolkit_core::Weight;

struct Entry<W, T> {
    key: W,
    seq: u64,
    item: T,
}

impl<W: Weight, T> Ord for Entry<W, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .compare(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<W: Weight, T> PartialOrd for Entry<W, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight, T> PartialEq for Entry<W, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight, T> Eq for Entry<W, T> {}

/// Priority queue popping the smallest key first
pub(crate) struct MinQueue<W, T> {
    heap: BinaryHeap<Entry<W, T>>,
    seq: u64,
}

impl<W: Weight, T> MinQueue<W, T> {
    pub(crate) fn new() -> Self {
        Self { heap: BinaryHeap::new(), seq: 0 }
    }

    pub(crate) fn push(&mut self, key: W, item: T) {
        self.heap.push(Entry { key, seq: self.seq, item });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<(W, T)> {
        self.heap.pop().map(|e| (e.key, e.item))
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_first() {
        let mut q = MinQueue::new();
        for (k, v) in [(5i64, 'a'), (1, 'b'), (3, 'c')] {
            q.push(k, v);
        }
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop(), Some((1, 'b')));
        assert_eq!(q.pop(), Some((3, 'c')));
        assert_eq!(q.pop(), Some((5, 'a')));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn equal_keys_are_fifo() {
        let mut q = MinQueue::new();
        q.push(2.0f64, "first");
        q.push(2.0, "second");
        q.push(0.5, "cheap");
        assert_eq!(q.pop().map(|(_, v)| v), Some("cheap"));
        assert_eq!(q.pop().map(|(_, v)| v), Some("first"));
        assert_eq!(q.pop().map(|(_, v)| v), Some("second"));
    }
}
