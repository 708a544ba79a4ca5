//! Shortest-remaining selection over an arrival-sorted arena.
//!
//! Processes enter the queue when the clock reaches their arrival and leave
//! it when selected. Keys are `(remaining, slot)` where `slot` is the
//! arrival-order index, so ties on remaining time go to the earlier
//! arrival and then to the earlier generated id.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::process::{ProcessSet, State};

#[derive(Debug, Default)]
pub struct ReadyQueue {
    heap: BinaryHeap<Reverse<(u64, usize)>>,
    // first slot not yet admitted
    next_slot: usize,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits every process with `arrival <= now`, marking it eligible.
    pub fn admit_until(&mut self, set: &mut ProcessSet, now: u64) {
        while self.next_slot < set.len() && set.get(self.next_slot).arrival() <= now {
            let slot = self.next_slot;
            let p = set.get_mut(slot);
            p.set_state(State::Eligible);
            self.heap.push(Reverse((p.remaining(), slot)));
            self.next_slot += 1;
        }
    }

    /// Arrival time of the earliest process not yet admitted.
    pub fn next_arrival(&self, set: &ProcessSet) -> Option<u64> {
        (self.next_slot < set.len()).then(|| set.get(self.next_slot).arrival())
    }

    /// Puts a suspended process back, keyed by its current remaining time.
    pub fn push(&mut self, set: &ProcessSet, slot: usize) {
        self.heap.push(Reverse((set.get(slot).remaining(), slot)));
    }

    pub fn pop_shortest(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse((_, slot))| slot)
    }

    /// Remaining time of the shortest queued process.
    pub fn peek_remaining(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse((remaining, _))| *remaining)
    }

    /// True once every process has been admitted and selected.
    pub fn is_drained(&self, set: &ProcessSet) -> bool {
        self.heap.is_empty() && self.next_slot >= set.len()
    }
}
