//! Event log replay and determinism validation
//!
//! The engine is deterministic and clock-free, so resubmitting the
//! recorded `OrderSubmitted` events into a fresh session must reproduce
//! the same final state: same events, same final state.

use serde::{Deserialize, Serialize};
use tracing::info;
use types::numeric::Price;
use types::order::OrderType;

use crate::events::SessionEvent;
use crate::session::{SessionConfig, TradingSession};

/// A snapshot of session state for comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub bid_depth: u64,
    pub ask_depth: u64,
    pub order_count: usize,
    pub trade_count: usize,
    pub last_trade_price: Price,
}

/// Capture a snapshot of the session state.
pub fn capture_snapshot(session: &TradingSession) -> SessionSnapshot {
    SessionSnapshot {
        bid_depth: session.bid_levels().iter().map(|(_, q)| q.value()).sum(),
        ask_depth: session.ask_levels().iter().map(|(_, q)| q.value()).sum(),
        order_count: session.order_count(),
        trade_count: session.trade_count(),
        last_trade_price: session.last_trade_price(),
    }
}

/// Replay recorded submissions into a fresh session and return the
/// resulting snapshot.
pub fn replay_and_snapshot(config: SessionConfig, events: &[SessionEvent]) -> SessionSnapshot {
    info!(event_count = events.len(), "starting event replay");
    let mut session = TradingSession::new(config);

    for event in events {
        if let SessionEvent::OrderSubmitted {
            actor,
            side,
            order_type,
            price,
            quantity,
            ..
        } = event
        {
            // A submission that was rejected when recorded is rejected
            // again here, so the error is discarded either way.
            match (order_type, price) {
                (OrderType::Limit, Some(price)) => {
                    session.submit_limit(*actor, *side, *price, *quantity).ok();
                }
                _ => {
                    session.submit_market(*actor, *side, *quantity).ok();
                }
            }
        }
    }

    capture_snapshot(&session)
}

/// Result of replay validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayValidation {
    pub matches: bool,
    pub original: SessionSnapshot,
    pub replayed: SessionSnapshot,
}

/// Validate replay determinism: run the events through a fresh session
/// and compare snapshots.
pub fn validate_replay(
    config: SessionConfig,
    events: &[SessionEvent],
    expected: &SessionSnapshot,
) -> ReplayValidation {
    let replayed = replay_and_snapshot(config, events);
    ReplayValidation {
        matches: replayed == *expected,
        original: expected.clone(),
        replayed,
    }
}
