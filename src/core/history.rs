//! Fixed-capacity rolling window of percentage samples.

use std::collections::{VecDeque, vec_deque};

/// Oldest sample is evicted once `capacity` is reached.
#[derive(Clone, Debug)]
pub struct SampleHistory {
    buf: VecDeque<f64>,
    cap: usize,
}

impl SampleHistory {
    /// Empty history. A zero capacity is bumped to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let cap = capacity.max(1);
        Self {
            buf: VecDeque::with_capacity(cap),
            cap,
        }
    }

    /// History already holding `capacity` zeros, so a graph is full-width
    /// from the first frame on.
    #[must_use]
    pub fn zeroed(capacity: usize) -> Self {
        let mut h = Self::new(capacity);
        h.buf.extend(std::iter::repeat_n(0.0, h.cap));
        h
    }

    /// Append, dropping the oldest sample when full.
    pub fn push(&mut self, value: f64) {
        if self.buf.len() == self.cap {
            self.buf.pop_front();
        }
        self.buf.push_back(value);
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn latest(&self) -> Option<f64> {
        self.buf.back().copied()
    }

    /// Oldest first.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<vec_deque::Iter<'_, f64>> {
        self.buf.iter().copied()
    }
}

impl<'a> IntoIterator for &'a SampleHistory {
    type Item = f64;
    type IntoIter = std::iter::Copied<vec_deque::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
