//! Event taxonomy for the trading session
//!
//! Every submission produces an `OrderSubmitted` event, zero or more
//! `TradeExecuted` events in match order, and a terminal `OrderResolved`
//! event. Events carry a session-scoped sequence number; the engine
//! itself is clock-free.

use matching_engine::Outcome;
use serde::{Deserialize, Serialize};
use types::ids::{OrderId, TakerId};
use types::numeric::{Price, Quantity};
use types::order::{BookSide, CounterpartyRole, OrderType, Owner, Side};

/// Terminal status of one submission, as reported in `OrderResolved`.
///
/// `Rejected` is distinct from `Rested`: a rejected submission never
/// touched the book, while a rested one is live liquidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmitStatus {
    Filled,
    PartiallyFilledRested,
    Rested,
    PartiallyFilledDropped,
    Dropped,
    Rejected,
}

impl From<&Outcome> for SubmitStatus {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Filled => SubmitStatus::Filled,
            Outcome::Rested { .. } => SubmitStatus::Rested,
            Outcome::PartiallyFilledRested { .. } => SubmitStatus::PartiallyFilledRested,
            Outcome::PartiallyFilledDropped { .. } => SubmitStatus::PartiallyFilledDropped,
            Outcome::Dropped { .. } => SubmitStatus::Dropped,
        }
    }
}

/// Events recorded by the trading session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    OrderSubmitted {
        seq: u64,
        actor: Owner,
        taker_id: TakerId,
        side: Side,
        order_type: OrderType,
        /// None for market orders.
        price: Option<Price>,
        quantity: Quantity,
    },
    TradeExecuted {
        seq: u64,
        taker: Owner,
        taker_id: TakerId,
        side: Side,
        order_type: OrderType,
        price: Price,
        quantity: Quantity,
        counterparty: CounterpartyRole,
        resting_order_id: OrderId,
        resting_side: BookSide,
    },
    OrderResolved {
        seq: u64,
        actor: Owner,
        taker_id: TakerId,
        side: Side,
        order_type: OrderType,
        price: Option<Price>,
        quantity: Quantity,
        filled: Quantity,
        status: SubmitStatus,
    },
}

impl SessionEvent {
    pub fn seq(&self) -> u64 {
        match self {
            SessionEvent::OrderSubmitted { seq, .. }
            | SessionEvent::TradeExecuted { seq, .. }
            | SessionEvent::OrderResolved { seq, .. } => *seq,
        }
    }

    pub fn is_trade(&self) -> bool {
        matches!(self, SessionEvent::TradeExecuted { .. })
    }
}
