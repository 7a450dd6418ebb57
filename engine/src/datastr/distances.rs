//! Distance array which can be shared between worker threads without locking.

use crate::datastr::graph::{Distance, INFINITY};
use std::sync::atomic::{AtomicI64, Ordering};

/// One tentative distance per vertex, all initialized to `INFINITY`.
///
/// All accesses use relaxed atomics. Callers must make sure that each entry has at most one writer at a time,
/// a `store` is not a compare-and-swap, so two concurrent writers to the same entry could lose an improvement.
/// Reads may race with writes to the same entry and observe either the old or the new value.
/// Ordering between separate phases is provided by whatever joins the worker threads, not by this struct.
#[derive(Debug)]
pub struct AtomicDistances {
    data: Box<[AtomicI64]>,
}

impl AtomicDistances {
    pub fn new(size: usize) -> Self {
        AtomicDistances {
            data: (0..size).map(|_| AtomicI64::new(INFINITY)).collect(),
        }
    }

    pub fn set(&self, index: usize, value: Distance) {
        self.data[index].store(value, Ordering::Relaxed);
    }

    pub fn get(&self, index: usize) -> Distance {
        self.data[index].load(Ordering::Relaxed)
    }

    /// Number of elements in the data structure
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Are there no elements in the data structure
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the array once all workers are done.
    pub fn into_vec(self) -> Vec<Distance> {
        self.data.into_vec().into_iter().map(AtomicI64::into_inner).collect()
    }
}
