//! Identifier types and the session identifier allocator
//!
//! Order and taker identifiers are strictly increasing integers. Their
//! numeric order doubles as submission order, which is what the matching
//! engine's FIFO tie-break rests on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a resting order.
///
/// Allocated by [`IdAllocator`] when a limit remainder is placed on the
/// book. Lower id means earlier submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Create from a raw counter value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw counter value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for one incoming submission (the taker side of any trades
/// it produces).
///
/// Assigned per `submit_*` call, whether or not the order ever rests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TakerId(u64);

impl TakerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TakerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues strictly increasing order and taker identifiers.
///
/// Owned as a field by the engine (one allocator per book), so multiple
/// independent sessions can coexist and be tested in isolation. Both
/// counters start at 1 and only go back to 1 through [`reset`].
///
/// [`reset`]: IdAllocator::reset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next_order: u64,
    next_taker: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            next_order: 1,
            next_taker: 1,
        }
    }

    /// Allocate the next order id.
    pub fn next_order_id(&mut self) -> OrderId {
        let id = OrderId(self.next_order);
        self.next_order += 1;
        id
    }

    /// Allocate the next taker id.
    pub fn next_taker_id(&mut self) -> TakerId {
        let id = TakerId(self.next_taker);
        self.next_taker += 1;
        id
    }

    /// Restart both counters at 1. Only meaningful together with clearing
    /// the book they numbered.
    pub fn reset(&mut self) {
        self.next_order = 1;
        self.next_taker = 1;
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
