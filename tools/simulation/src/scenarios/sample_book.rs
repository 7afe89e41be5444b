//! Canonical sample book
//!
//! Seeds a fresh session with a multi-level book mixing player and bot
//! ownership, then optionally runs a pair of showcase market orders
//! against it. Bids are submitted before asks and nothing crosses, so
//! order ids come out 1..=18 in layout order.

use types::errors::OrderError;
use types::numeric::{Price, Quantity};
use types::order::{Owner, Side};

use crate::session::TradingSession;

const SAMPLE_BIDS: [(i64, u64, Owner); 9] = [
    (1000, 8, Owner::Player),
    (1000, 4, Owner::Bot),
    (999, 6, Owner::Bot),
    (999, 5, Owner::Player),
    (998, 10, Owner::Bot),
    (998, 7, Owner::Bot),
    (997, 12, Owner::Bot),
    (996, 14, Owner::Bot),
    (995, 11, Owner::Bot),
];

const SAMPLE_ASKS: [(i64, u64, Owner); 9] = [
    (1001, 7, Owner::Bot),
    (1001, 3, Owner::Player),
    (1002, 5, Owner::Bot),
    (1002, 9, Owner::Bot),
    (1003, 9, Owner::Bot),
    (1003, 5, Owner::Bot),
    (1004, 10, Owner::Bot),
    (1005, 12, Owner::Bot),
    (1006, 10, Owner::Bot),
];

/// Seed the canonical sample book into a fresh session.
pub fn seed_sample_book(session: &mut TradingSession) -> Result<(), OrderError> {
    for (price, quantity, owner) in SAMPLE_BIDS {
        session.submit_limit(owner, Side::Buy, Price::new(price), Quantity::new(quantity))?;
    }
    for (price, quantity, owner) in SAMPLE_ASKS {
        session.submit_limit(owner, Side::Sell, Price::new(price), Quantity::new(quantity))?;
    }
    Ok(())
}

/// Run the showcase pair of bot market orders: a buy for 5, then a sell
/// for 6.
pub fn showcase_trades(session: &mut TradingSession) -> Result<(), OrderError> {
    session.submit_market(Owner::Bot, Side::Buy, Quantity::new(5))?;
    session.submit_market(Owner::Bot, Side::Sell, Quantity::new(6))?;
    Ok(())
}
