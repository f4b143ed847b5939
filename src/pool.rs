use alloc::collections::BinaryHeap;
use core::cmp::Reverse;

/// Allocates and reuses small dense non-negative integer ids.
///
/// `get()` returns the smallest currently-unused id without claiming it; the
/// caller must immediately [`IdPool::consume`] it. Released ids return to the
/// free set and are handed out again before any fresh id, which keeps the id
/// space dense enough to index flat arrays by id.
///
/// Capacity grows silently (doubling) when the free set runs dry; there are
/// no error conditions.
#[derive(Clone, Debug, Default)]
pub struct IdPool {
    free: BinaryHeap<Reverse<u32>>,
    capacity: u32,
}

impl IdPool {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            free: (0..capacity).map(Reverse).collect(),
            capacity,
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the smallest currently-unused id, growing capacity if the
    /// free set is exhausted. Does not claim the id: call `consume` next.
    pub fn get(&mut self) -> u32 {
        if self.free.is_empty() {
            self.grow();
        }
        match self.free.peek() {
            Some(&Reverse(id)) => id,
            // grow() always leaves at least one free id.
            None => 0,
        }
    }

    /// Claims `id`, which must be the value just returned by `get`.
    pub fn consume(&mut self, id: u32) {
        let popped = self.free.pop();
        debug_assert_eq!(
            popped,
            Some(Reverse(id)),
            "consume must claim the id returned by get (id={id})"
        );
        if popped.is_none() {
            swwarn!(id, "IdPool::consume called with an empty free set");
        }
    }

    /// Returns `id` to the free set.
    pub fn release(&mut self, id: u32) {
        debug_assert!(id < self.capacity, "release of never-allocated id {id}");
        self.free.push(Reverse(id));
    }

    fn grow(&mut self) {
        let new_capacity = if self.capacity == 0 {
            1
        } else {
            self.capacity.saturating_mul(2)
        };
        swdebug!(
            from = self.capacity,
            to = new_capacity,
            "IdPool: growing capacity"
        );
        for id in self.capacity..new_capacity {
            self.free.push(Reverse(id));
        }
        self.capacity = new_capacity;
    }
}
