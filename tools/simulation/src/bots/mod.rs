//! Bot submitters
//!
//! Bots drive the session through the same public `submit_*` interface
//! as the player, under the same one-at-a-time discipline.

pub mod random_trader;

pub use random_trader::{RandomTrader, RandomTraderConfig};
