//! Ask (sell-side) order book
//!
//! Maintains resting asks sorted by price ascending (best ask first).
//! BTreeMap keeps the levels sorted through every mutation; within a
//! level the FIFO queue preserves time priority.

use std::collections::BTreeMap;
use types::numeric::{Price, Quantity};
use types::order::{BookSide, RestingOrder};

use super::price_level::PriceLevel;
use super::OpposingBook;

/// Ask (sell) side of the order book.
///
/// Levels are keyed ascending in the map; the best ask is the first key.
#[derive(Debug, Clone, Default)]
pub struct AskBook {
    levels: BTreeMap<Price, PriceLevel>,
}

impl AskBook {
    /// Create a new empty ask book.
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Insert a resting order at its price level.
    pub fn insert(&mut self, order: RestingOrder) {
        debug_assert_eq!(order.side, BookSide::Ask);
        debug_assert!(!order.quantity.is_zero());
        self.levels.entry(order.price).or_default().insert(order);
    }

    /// Get the best ask as (price, level quantity).
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        // BTreeMap iter is ascending, so the best ask is the first entry
        self.levels
            .iter()
            .next()
            .map(|(price, level)| (*price, level.total_quantity()))
    }

    /// Get the best ask price.
    pub fn best_ask_price(&self) -> Option<Price> {
        self.levels.keys().next().copied()
    }

    /// Get depth snapshot (top N price levels, best first).
    pub fn depth_snapshot(&self, depth: usize) -> Vec<(Price, Quantity)> {
        self.levels
            .iter()
            .take(depth)
            .map(|(price, level)| (*price, level.total_quantity()))
            .collect()
    }

    /// All levels as (price, quantity), best first.
    pub fn levels(&self) -> Vec<(Price, Quantity)> {
        self.depth_snapshot(self.levels.len())
    }

    /// Snapshot of every resting ask in priority order.
    pub fn orders(&self) -> Vec<RestingOrder> {
        self.levels
            .values()
            .flat_map(|level| level.iter().copied())
            .collect()
    }

    /// Check if the ask book is empty.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the total number of price levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Total number of resting asks.
    pub fn order_count(&self) -> usize {
        self.levels.values().map(|level| level.order_count()).sum()
    }

    /// Total quantity resting on the ask side.
    pub fn total_quantity(&self) -> Quantity {
        self.levels.values().map(|level| level.total_quantity()).sum()
    }

    /// Remove all resting asks.
    pub fn clear(&mut self) {
        self.levels.clear();
    }
}

impl OpposingBook for AskBook {
    fn book_side(&self) -> BookSide {
        BookSide::Ask
    }

    fn peek_best(&self) -> Option<&RestingOrder> {
        self.levels.values().next().and_then(|level| level.front())
    }

    fn consume_best(&mut self, traded: Quantity) {
        if let Some((&price, level)) = self.levels.iter_mut().next() {
            level.consume_front(traded);
            if level.is_empty() {
                self.levels.remove(&price);
            }
        }
    }
}
