//! Bid (buy-side) order book
//!
//! Maintains resting bids sorted by price descending (best bid first).
//! BTreeMap keeps the levels sorted through every mutation; within a
//! level the FIFO queue preserves time priority.

use std::collections::BTreeMap;
use types::numeric::{Price, Quantity};
use types::order::{BookSide, RestingOrder};

use super::price_level::PriceLevel;
use super::OpposingBook;

/// Bid (buy) side of the order book.
///
/// Levels are keyed ascending in the map; the best bid is the last key.
#[derive(Debug, Clone, Default)]
pub struct BidBook {
    levels: BTreeMap<Price, PriceLevel>,
}

impl BidBook {
    /// Create a new empty bid book.
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Insert a resting order at its price level.
    pub fn insert(&mut self, order: RestingOrder) {
        debug_assert_eq!(order.side, BookSide::Bid);
        debug_assert!(!order.quantity.is_zero());
        self.levels.entry(order.price).or_default().insert(order);
    }

    /// Get the best bid as (price, level quantity).
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        // BTreeMap iter is ascending, so the best bid is the last entry
        self.levels
            .iter()
            .next_back()
            .map(|(price, level)| (*price, level.total_quantity()))
    }

    /// Get the best bid price.
    pub fn best_bid_price(&self) -> Option<Price> {
        self.levels.keys().next_back().copied()
    }

    /// Get depth snapshot (top N price levels, best first).
    pub fn depth_snapshot(&self, depth: usize) -> Vec<(Price, Quantity)> {
        self.levels
            .iter()
            .rev()
            .take(depth)
            .map(|(price, level)| (*price, level.total_quantity()))
            .collect()
    }

    /// All levels as (price, quantity), best first.
    pub fn levels(&self) -> Vec<(Price, Quantity)> {
        self.depth_snapshot(self.levels.len())
    }

    /// Snapshot of every resting bid in priority order.
    pub fn orders(&self) -> Vec<RestingOrder> {
        self.levels
            .values()
            .rev()
            .flat_map(|level| level.iter().copied())
            .collect()
    }

    /// Check if the bid book is empty.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the total number of price levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Total number of resting bids.
    pub fn order_count(&self) -> usize {
        self.levels.values().map(|level| level.order_count()).sum()
    }

    /// Total quantity resting on the bid side.
    pub fn total_quantity(&self) -> Quantity {
        self.levels.values().map(|level| level.total_quantity()).sum()
    }

    /// Remove all resting bids.
    pub fn clear(&mut self) {
        self.levels.clear();
    }
}

impl OpposingBook for BidBook {
    fn book_side(&self) -> BookSide {
        BookSide::Bid
    }

    fn peek_best(&self) -> Option<&RestingOrder> {
        self.levels.values().next_back().and_then(|level| level.front())
    }

    fn consume_best(&mut self, traded: Quantity) {
        if let Some((&price, level)) = self.levels.iter_mut().next_back() {
            level.consume_front(traded);
            if level.is_empty() {
                self.levels.remove(&price);
            }
        }
    }
}
