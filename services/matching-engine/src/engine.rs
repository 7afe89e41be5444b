//! Matching engine core
//!
//! Main coordinator for the order book and matching logic. One engine
//! owns one instrument's book plus the id allocator that numbers its
//! orders, so independent engines never share state.

use serde::{Deserialize, Serialize};
use types::errors::OrderError;
use types::ids::{IdAllocator, OrderId, TakerId};
use types::numeric::{Price, Quantity, TickRange};
use types::order::{Owner, RestingOrder, Side};
use types::trade::{filled_quantity, FifoEntry, Trade};

use crate::book::{AskBook, BidBook};
use crate::matching::executor::fill_against;

/// Single-instrument matching engine.
///
/// The book is mutated by at most one in-flight call at a time; a
/// `submit_*` call always runs to completion before the next one starts.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    bids: BidBook,
    asks: AskBook,
    ids: IdAllocator,
    ticks: TickRange,
}

/// Terminal classification of one submitted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Fully matched on arrival.
    Filled,
    /// No fills; the whole quantity rests on the book.
    Rested { order_id: OrderId },
    /// Some fills; the remainder rests on the book.
    PartiallyFilledRested {
        order_id: OrderId,
        remaining: Quantity,
    },
    /// Market order: some fills, the rest dropped with the opposite book
    /// exhausted.
    PartiallyFilledDropped { unfilled: Quantity },
    /// Market order against an empty opposite book: nothing filled,
    /// nothing rested.
    Dropped { unfilled: Quantity },
}

impl Outcome {
    /// True when the submission left an order on the book.
    pub fn rested_order_id(&self) -> Option<OrderId> {
        match self {
            Outcome::Rested { order_id } | Outcome::PartiallyFilledRested { order_id, .. } => {
                Some(*order_id)
            }
            _ => None,
        }
    }
}

/// Everything one matching call produced, in match order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Execution {
    pub trades: Vec<Trade>,
    pub fifo_entries: Vec<FifoEntry>,
    pub outcome: Outcome,
}

impl Execution {
    /// Total quantity this submission traded.
    pub fn filled_quantity(&self) -> Quantity {
        filled_quantity(&self.trades)
    }
}

impl MatchingEngine {
    /// Create an engine accepting prices in `ticks`.
    pub fn new(ticks: TickRange) -> Self {
        Self {
            bids: BidBook::new(),
            asks: AskBook::new(),
            ids: IdAllocator::new(),
            ticks,
        }
    }

    /// Submit a limit order.
    ///
    /// Crosses against the opposite side while the price overlaps the
    /// opposite best (inclusive), then rests any unfilled remainder on
    /// the order's own side under a freshly allocated id.
    pub fn submit_limit(
        &mut self,
        side: Side,
        price: Price,
        quantity: Quantity,
        owner: Owner,
        taker_id: TakerId,
    ) -> Result<Execution, OrderError> {
        if quantity.is_zero() {
            return Err(OrderError::InvalidQuantity);
        }
        if !self.ticks.contains(price) {
            return Err(OrderError::InvalidPrice {
                price,
                min: self.ticks.min(),
                max: self.ticks.max(),
            });
        }

        let mut trades = Vec::new();
        let mut fifo_entries = Vec::new();
        let remaining = match side {
            Side::Buy => fill_against(
                &mut self.asks,
                side,
                Some(price),
                quantity,
                owner,
                taker_id,
                &mut trades,
                &mut fifo_entries,
            ),
            Side::Sell => fill_against(
                &mut self.bids,
                side,
                Some(price),
                quantity,
                owner,
                taker_id,
                &mut trades,
                &mut fifo_entries,
            ),
        };

        let outcome = if remaining.is_zero() {
            Outcome::Filled
        } else {
            let order_id = self.ids.next_order_id();
            let order = RestingOrder {
                id: order_id,
                side: side.into(),
                price,
                quantity: remaining,
                owner,
            };
            match side {
                Side::Buy => self.bids.insert(order),
                Side::Sell => self.asks.insert(order),
            }
            if trades.is_empty() {
                Outcome::Rested { order_id }
            } else {
                Outcome::PartiallyFilledRested {
                    order_id,
                    remaining,
                }
            }
        };

        Ok(Execution {
            trades,
            fifo_entries,
            outcome,
        })
    }

    /// Submit a market order.
    ///
    /// Consumes the opposite side with no price bound. Whatever is left
    /// when the opposite book runs dry is dropped; a market order never
    /// rests.
    pub fn submit_market(
        &mut self,
        side: Side,
        quantity: Quantity,
        owner: Owner,
        taker_id: TakerId,
    ) -> Result<Execution, OrderError> {
        if quantity.is_zero() {
            return Err(OrderError::InvalidQuantity);
        }

        let mut trades = Vec::new();
        let mut fifo_entries = Vec::new();
        let remaining = match side {
            Side::Buy => fill_against(
                &mut self.asks,
                side,
                None,
                quantity,
                owner,
                taker_id,
                &mut trades,
                &mut fifo_entries,
            ),
            Side::Sell => fill_against(
                &mut self.bids,
                side,
                None,
                quantity,
                owner,
                taker_id,
                &mut trades,
                &mut fifo_entries,
            ),
        };

        let outcome = if remaining.is_zero() {
            Outcome::Filled
        } else if trades.is_empty() {
            Outcome::Dropped {
                unfilled: remaining,
            }
        } else {
            Outcome::PartiallyFilledDropped {
                unfilled: remaining,
            }
        };

        Ok(Execution {
            trades,
            fifo_entries,
            outcome,
        })
    }

    /// Allocate a taker id for the next submission.
    pub fn next_taker_id(&mut self) -> TakerId {
        self.ids.next_taker_id()
    }

    /// Best bid as (price, level quantity), or None if the side is empty.
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        self.bids.best_bid()
    }

    /// Best ask as (price, level quantity), or None if the side is empty.
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        self.asks.best_ask()
    }

    /// Bid levels as (price, quantity), best first.
    pub fn bid_levels(&self) -> Vec<(Price, Quantity)> {
        self.bids.levels()
    }

    /// Ask levels as (price, quantity), best first.
    pub fn ask_levels(&self) -> Vec<(Price, Quantity)> {
        self.asks.levels()
    }

    /// Snapshot of all resting bids in priority order.
    pub fn bid_orders(&self) -> Vec<RestingOrder> {
        self.bids.orders()
    }

    /// Snapshot of all resting asks in priority order.
    pub fn ask_orders(&self) -> Vec<RestingOrder> {
        self.asks.orders()
    }

    /// Total number of resting orders on both sides.
    pub fn order_count(&self) -> usize {
        self.bids.order_count() + self.asks.order_count()
    }

    /// The price range this engine accepts.
    pub fn tick_range(&self) -> TickRange {
        self.ticks
    }

    /// Clear the book and restart both id counters. This is the only
    /// lifecycle control besides submission.
    pub fn reset(&mut self) {
        self.bids.clear();
        self.asks.clear();
        self.ids.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::order::{BookSide, CounterpartyRole};

    fn engine() -> MatchingEngine {
        MatchingEngine::new(TickRange::default())
    }

    fn taker(n: u64) -> TakerId {
        TakerId::new(n)
    }

    #[test]
    fn test_simple_rest() {
        let mut engine = engine();
        let exec = engine
            .submit_limit(
                Side::Buy,
                Price::new(1000),
                Quantity::new(10),
                Owner::Player,
                taker(1),
            )
            .unwrap();

        assert!(exec.trades.is_empty());
        assert_eq!(exec.outcome, Outcome::Rested { order_id: OrderId::new(1) });
        assert_eq!(engine.best_bid(), Some((Price::new(1000), Quantity::new(10))));
        let bids = engine.bid_orders();
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].owner, Owner::Player);
        assert_eq!(bids[0].side, BookSide::Bid);
    }

    #[test]
    fn test_partial_cross_then_rest() {
        let mut engine = engine();
        engine
            .submit_limit(Side::Sell, Price::new(999), Quantity::new(5), Owner::Bot, taker(1))
            .unwrap();

        let exec = engine
            .submit_limit(
                Side::Buy,
                Price::new(1000),
                Quantity::new(10),
                Owner::Player,
                taker(2),
            )
            .unwrap();

        assert_eq!(exec.trades.len(), 1);
        assert_eq!(exec.trades[0].price, Price::new(999));
        assert_eq!(exec.trades[0].quantity, Quantity::new(5));
        assert_eq!(exec.trades[0].resting_order_id, OrderId::new(1));
        assert_eq!(
            exec.outcome,
            Outcome::PartiallyFilledRested {
                order_id: OrderId::new(2),
                remaining: Quantity::new(5),
            }
        );
        assert!(engine.best_ask().is_none());
        assert_eq!(engine.best_bid(), Some((Price::new(1000), Quantity::new(5))));
    }

    #[test]
    fn test_exact_cross_no_remainder() {
        let mut engine = engine();
        engine
            .submit_limit(Side::Buy, Price::new(1000), Quantity::new(7), Owner::Player, taker(1))
            .unwrap();

        let exec = engine
            .submit_limit(Side::Sell, Price::new(1000), Quantity::new(7), Owner::Bot, taker(2))
            .unwrap();

        assert_eq!(exec.trades.len(), 1);
        assert_eq!(exec.trades[0].price, Price::new(1000));
        assert_eq!(exec.trades[0].quantity, Quantity::new(7));
        assert_eq!(exec.trades[0].resting_order_id, OrderId::new(1));
        assert_eq!(exec.trades[0].counterparty, CounterpartyRole::Buyer);
        assert_eq!(exec.outcome, Outcome::Filled);
        assert!(engine.best_bid().is_none());
        assert_eq!(engine.order_count(), 0);
    }

    #[test]
    fn test_market_never_rests() {
        let mut engine = engine();
        let exec = engine
            .submit_market(Side::Sell, Quantity::new(10), Owner::Player, taker(1))
            .unwrap();

        assert!(exec.trades.is_empty());
        assert_eq!(exec.outcome, Outcome::Dropped { unfilled: Quantity::new(10) });
        assert_eq!(engine.order_count(), 0);
    }

    #[test]
    fn test_market_partial_fill_drops_remainder() {
        let mut engine = engine();
        engine
            .submit_limit(Side::Buy, Price::new(1000), Quantity::new(4), Owner::Bot, taker(1))
            .unwrap();

        let exec = engine
            .submit_market(Side::Sell, Quantity::new(10), Owner::Player, taker(2))
            .unwrap();

        assert_eq!(exec.filled_quantity(), Quantity::new(4));
        assert_eq!(
            exec.outcome,
            Outcome::PartiallyFilledDropped { unfilled: Quantity::new(6) }
        );
        assert_eq!(engine.order_count(), 0);
    }

    #[test]
    fn test_market_sweeps_multiple_levels() {
        let mut engine = engine();
        engine
            .submit_limit(Side::Sell, Price::new(1001), Quantity::new(2), Owner::Bot, taker(1))
            .unwrap();
        engine
            .submit_limit(Side::Sell, Price::new(1004), Quantity::new(3), Owner::Bot, taker(2))
            .unwrap();

        let exec = engine
            .submit_market(Side::Buy, Quantity::new(5), Owner::Player, taker(3))
            .unwrap();

        assert_eq!(exec.outcome, Outcome::Filled);
        assert_eq!(exec.trades.len(), 2);
        // Market orders trade at whatever the book offers
        assert_eq!(exec.trades[0].price, Price::new(1001));
        assert_eq!(exec.trades[1].price, Price::new(1004));
    }

    #[test]
    fn test_limit_buy_never_trades_above_its_price() {
        let mut engine = engine();
        engine
            .submit_limit(Side::Sell, Price::new(1002), Quantity::new(5), Owner::Bot, taker(1))
            .unwrap();

        let exec = engine
            .submit_limit(Side::Buy, Price::new(1001), Quantity::new(5), Owner::Player, taker(2))
            .unwrap();

        assert!(exec.trades.is_empty());
        assert_eq!(exec.outcome, Outcome::Rested { order_id: OrderId::new(2) });
        assert_eq!(engine.order_count(), 2);
    }

    #[test]
    fn test_fifo_tie_break_across_submissions() {
        let mut engine = engine();
        engine
            .submit_limit(Side::Sell, Price::new(1001), Quantity::new(3), Owner::Bot, taker(1))
            .unwrap();
        engine
            .submit_limit(Side::Sell, Price::new(1001), Quantity::new(4), Owner::Bot, taker(2))
            .unwrap();

        let exec = engine
            .submit_market(Side::Buy, Quantity::new(5), Owner::Player, taker(3))
            .unwrap();

        assert_eq!(exec.trades.len(), 2);
        assert_eq!(exec.trades[0].resting_order_id, OrderId::new(1));
        assert_eq!(exec.trades[0].quantity, Quantity::new(3));
        assert_eq!(exec.trades[1].resting_order_id, OrderId::new(2));
        assert_eq!(exec.trades[1].quantity, Quantity::new(2));

        let remaining = engine.ask_orders();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, OrderId::new(2));
        assert_eq!(remaining[0].quantity, Quantity::new(2));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut engine = engine();
        let err = engine
            .submit_limit(Side::Buy, Price::new(1000), Quantity::zero(), Owner::Player, taker(1))
            .unwrap_err();
        assert_eq!(err, OrderError::InvalidQuantity);

        let err = engine
            .submit_market(Side::Buy, Quantity::zero(), Owner::Player, taker(2))
            .unwrap_err();
        assert_eq!(err, OrderError::InvalidQuantity);
        assert_eq!(engine.order_count(), 0);
    }

    #[test]
    fn test_out_of_range_price_rejected() {
        let mut engine = engine();
        let err = engine
            .submit_limit(Side::Buy, Price::new(989), Quantity::new(5), Owner::Player, taker(1))
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::InvalidPrice {
                price: Price::new(989),
                min: Price::new(990),
                max: Price::new(1010),
            }
        );
        // Rejection leaves the book and the allocator untouched
        assert_eq!(engine.order_count(), 0);
        let exec = engine
            .submit_limit(Side::Buy, Price::new(1000), Quantity::new(5), Owner::Player, taker(2))
            .unwrap();
        assert_eq!(exec.outcome, Outcome::Rested { order_id: OrderId::new(1) });
    }

    #[test]
    fn test_reset_clears_book_and_counters() {
        let mut engine = engine();
        engine
            .submit_limit(Side::Buy, Price::new(1000), Quantity::new(5), Owner::Player, taker(1))
            .unwrap();
        engine.next_taker_id();

        engine.reset();

        assert_eq!(engine.order_count(), 0);
        assert_eq!(engine.next_taker_id(), TakerId::new(1));
        let exec = engine
            .submit_limit(Side::Sell, Price::new(1001), Quantity::new(2), Owner::Bot, taker(2))
            .unwrap();
        assert_eq!(exec.outcome, Outcome::Rested { order_id: OrderId::new(1) });
    }

    #[test]
    fn test_trades_report_in_match_order() {
        let mut engine = engine();
        engine
            .submit_limit(Side::Buy, Price::new(1000), Quantity::new(2), Owner::Bot, taker(1))
            .unwrap();
        engine
            .submit_limit(Side::Buy, Price::new(999), Quantity::new(2), Owner::Bot, taker(2))
            .unwrap();
        engine
            .submit_limit(Side::Buy, Price::new(998), Quantity::new(2), Owner::Bot, taker(3))
            .unwrap();

        let exec = engine
            .submit_limit(Side::Sell, Price::new(998), Quantity::new(6), Owner::Player, taker(4))
            .unwrap();

        let prices: Vec<i64> = exec.trades.iter().map(|t| t.price.value()).collect();
        assert_eq!(prices, vec![1000, 999, 998]);
        assert_eq!(exec.outcome, Outcome::Filled);
    }

    #[test]
    fn test_fifo_entries_parallel_trades() {
        let mut engine = engine();
        engine
            .submit_limit(Side::Sell, Price::new(1001), Quantity::new(3), Owner::Player, taker(1))
            .unwrap();

        let exec = engine
            .submit_limit(Side::Buy, Price::new(1001), Quantity::new(2), Owner::Bot, taker(2))
            .unwrap();

        assert_eq!(exec.trades.len(), exec.fifo_entries.len());
        let entry = &exec.fifo_entries[0];
        assert_eq!(entry.resting_order_id, exec.trades[0].resting_order_id);
        assert_eq!(entry.resting_side, BookSide::Ask);
        assert_eq!(entry.filled, Quantity::new(2));
        assert_eq!(entry.taker, Owner::Bot);
        assert_eq!(entry.taker_id, taker(2));
    }
}
