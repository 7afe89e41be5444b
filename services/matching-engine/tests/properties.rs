//! Property tests over randomized submission sequences
//!
//! Drives the engine with arbitrary limit/market traffic and checks the
//! book and reporting invariants that must hold after any sequence.

use matching_engine::{MatchingEngine, Outcome};
use proptest::prelude::*;
use std::collections::HashSet;
use types::errors::OrderError;
use types::numeric::{Price, Quantity, TickRange};
use types::order::{Owner, Side};

#[derive(Debug, Clone)]
enum Op {
    Limit { side: Side, price: i64, quantity: u64 },
    Market { side: Side, quantity: u64 },
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Buy), Just(Side::Sell)]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (side_strategy(), 985i64..1015, 0u64..15).prop_map(|(side, price, quantity)| {
            Op::Limit { side, price, quantity }
        }),
        1 => (side_strategy(), 0u64..15).prop_map(|(side, quantity)| {
            Op::Market { side, quantity }
        }),
    ]
}

fn assert_book_invariants(engine: &MatchingEngine) {
    // Bids strictly decreasing in price, asks strictly increasing
    let bid_levels = engine.bid_levels();
    for pair in bid_levels.windows(2) {
        assert!(pair[0].0 > pair[1].0, "bid levels out of order");
    }
    let ask_levels = engine.ask_levels();
    for pair in ask_levels.windows(2) {
        assert!(pair[0].0 < pair[1].0, "ask levels out of order");
    }

    // Within a level, ids ascend (FIFO); across the book, ids are unique
    // and quantities strictly positive
    let mut seen = HashSet::new();
    for orders in [engine.bid_orders(), engine.ask_orders()] {
        for pair in orders.windows(2) {
            if pair[0].price == pair[1].price {
                assert!(pair[0].id < pair[1].id, "FIFO tie-break violated");
            }
        }
        for order in orders {
            assert!(!order.quantity.is_zero(), "zero-quantity order retained");
            assert!(seen.insert(order.id), "duplicate order id in book");
        }
    }

    // The book never stays crossed
    if let (Some((bid, _)), Some((ask, _))) = (engine.best_bid(), engine.best_ask()) {
        assert!(bid < ask, "book left crossed: bid {bid} >= ask {ask}");
    }
}

proptest! {
    #[test]
    fn prop_engine_invariants_hold(ops in proptest::collection::vec(op_strategy(), 1..60)) {
        let ticks = TickRange::default();
        let mut engine = MatchingEngine::new(ticks);

        for op in ops {
            match op {
                Op::Limit { side, price, quantity } => {
                    let taker_id = engine.next_taker_id();
                    let price = Price::new(price);
                    let quantity = Quantity::new(quantity);
                    let result = engine.submit_limit(side, price, quantity, Owner::Bot, taker_id);

                    if quantity.is_zero() {
                        prop_assert_eq!(result.unwrap_err(), OrderError::InvalidQuantity);
                    } else if !ticks.contains(price) {
                        prop_assert_eq!(
                            result.unwrap_err(),
                            OrderError::InvalidPrice { price, min: ticks.min(), max: ticks.max() }
                        );
                    } else {
                        let exec = result.unwrap();
                        // Quantity conservation
                        let rested = match exec.outcome {
                            Outcome::Filled => Quantity::zero(),
                            Outcome::Rested { .. } => quantity,
                            Outcome::PartiallyFilledRested { remaining, .. } => remaining,
                            _ => {
                                prop_assert!(false, "market outcome from a limit order");
                                unreachable!()
                            }
                        };
                        prop_assert_eq!(exec.filled_quantity() + rested, quantity);

                        // Price-crossing correctness
                        for trade in &exec.trades {
                            match side {
                                Side::Buy => prop_assert!(trade.price <= price),
                                Side::Sell => prop_assert!(trade.price >= price),
                            }
                        }
                    }
                }
                Op::Market { side, quantity } => {
                    let taker_id = engine.next_taker_id();
                    let quantity = Quantity::new(quantity);
                    let before = engine.order_count();
                    let result = engine.submit_market(side, quantity, Owner::Bot, taker_id);

                    if quantity.is_zero() {
                        prop_assert_eq!(result.unwrap_err(), OrderError::InvalidQuantity);
                    } else {
                        let exec = result.unwrap();
                        // Market orders never rest
                        prop_assert!(exec.outcome.rested_order_id().is_none());
                        prop_assert!(engine.order_count() <= before);
                        let unfilled = match exec.outcome {
                            Outcome::Filled => Quantity::zero(),
                            Outcome::Dropped { unfilled }
                            | Outcome::PartiallyFilledDropped { unfilled } => unfilled,
                            _ => {
                                prop_assert!(false, "resting outcome from a market order");
                                unreachable!()
                            }
                        };
                        prop_assert_eq!(exec.filled_quantity() + unfilled, quantity);
                    }
                }
            }

            assert_book_invariants(&engine);
        }
    }

    #[test]
    fn prop_resting_quantity_matches_submitted(
        prices in proptest::collection::vec(990i64..=1010, 1..30)
    ) {
        // Bids only: nothing can cross, so every submission rests in full
        let mut engine = MatchingEngine::new(TickRange::default());
        let mut submitted = Quantity::zero();
        for (i, price) in prices.iter().enumerate() {
            let taker_id = engine.next_taker_id();
            let quantity = Quantity::new((i % 7 + 1) as u64);
            submitted += quantity;
            engine
                .submit_limit(Side::Buy, Price::new(*price), quantity, Owner::Bot, taker_id)
                .unwrap();
        }

        let resting: Quantity = engine.bid_orders().iter().map(|o| o.quantity).sum();
        prop_assert_eq!(resting, submitted);
        prop_assert_eq!(engine.order_count(), prices.len());
    }
}
