//! Trade and FIFO-consumption reporting records
//!
//! Both records are immutable facts: the engine appends them during one
//! matching call and never touches them again.

use crate::ids::{OrderId, TakerId};
use crate::numeric::{Price, Quantity};
use crate::order::{BookSide, CounterpartyRole, Owner};
use serde::{Deserialize, Serialize};

/// One fill between an incoming order and a resting order.
///
/// The price is always the resting order's price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub price: Price,
    pub quantity: Quantity,
    /// Owner of the aggressing (incoming) order.
    pub taker: Owner,
    /// Role of the resting order that was consumed.
    pub counterparty: CounterpartyRole,
    pub resting_order_id: OrderId,
    pub taker_id: TakerId,
}

/// One unit of consumption of a specific resting order, recorded for
/// external trade-log display alongside the trade list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FifoEntry {
    pub resting_order_id: OrderId,
    pub resting_side: BookSide,
    pub price: Price,
    pub filled: Quantity,
    pub taker: Owner,
    pub taker_id: TakerId,
}

/// Total quantity across a slice of trades.
pub fn filled_quantity(trades: &[Trade]) -> Quantity {
    trades.iter().map(|t| t.quantity).sum()
}
