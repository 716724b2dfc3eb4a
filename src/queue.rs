//! Module implement a first-in-first-out container for query results.

use std::{collections::VecDeque, fmt};

use crate::{Error, Result};

/// Queue of items, dequeued in the same order they were enqueued.
///
/// [OrderedMap][crate::OrderedMap] returns key queries as a Queue.
/// Iterating a Queue drains it, so the sequence can be consumed only
/// once.
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Queue<T> {
        Queue::new()
    }
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Queue<T> {
        Queue {
            items: VecDeque::default(),
        }
    }

    /// Add item at the end of the queue.
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item)
    }

    /// Remove and return the least recently added item.
    pub fn dequeue(&mut self) -> Result<T> {
        match self.items.pop_front() {
            Some(item) => Ok(item),
            None => err_at!(EmptyCollection, msg: "dequeue on empty queue"),
        }
    }

    /// Return the least recently added item, without removing it.
    pub fn peek(&self) -> Result<&T> {
        match self.items.front() {
            Some(item) => Ok(item),
            None => err_at!(EmptyCollection, msg: "peek on empty queue"),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Iterator for Queue<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.items.len(), Some(self.items.len()))
    }
}

impl<T> ExactSizeIterator for Queue<T> {}

impl<T> fmt::Debug for Queue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
#[path = "queue_test.rs"]
mod queue_test;
