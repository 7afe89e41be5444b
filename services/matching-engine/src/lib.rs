//! Matching Engine
//!
//! Single-instrument order matching with price-time priority: incoming
//! limit and market orders cross against resting liquidity, best price
//! first and oldest order first within a price.
//!
//! **Key Invariants:**
//! - Bids descend in price, asks ascend; ties resolve by ascending id
//! - Quantity is conserved across every matching call
//! - A limit order never trades through its own price
//! - Market orders never rest; unfilled remainders are dropped

pub mod book;
pub mod engine;
pub mod matching;

pub use engine::{Execution, MatchingEngine, Outcome};
