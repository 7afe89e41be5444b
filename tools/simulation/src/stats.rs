//! Session statistics and brokerage accounting
//!
//! Counts submissions and their terminal outcomes, traded volume, and
//! the flat brokerage charged on player fills.

use crate::events::SubmitStatus;
use serde::{Deserialize, Serialize};
use types::order::Owner;

/// Aggregated counters for one trading session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_orders: u64,
    pub total_trades: u64,
    /// Total traded quantity across all trades.
    pub total_volume: u64,
    pub rejected_orders: u64,

    pub player_orders_submitted: u64,
    pub player_orders_filled: u64,
    pub player_orders_partially_filled: u64,
    pub player_orders_unfilled: u64,

    /// Brokerage charged on the player's most recent submission.
    pub last_brokerage: u64,
    pub total_brokerage: u64,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an incoming submission, before validation.
    pub fn record_submission(&mut self, actor: Owner) {
        self.total_orders += 1;
        if actor.is_player() {
            self.player_orders_submitted += 1;
            self.last_brokerage = 0;
        }
    }

    /// Record a submission rejected by validation.
    pub fn record_rejection(&mut self) {
        self.rejected_orders += 1;
    }

    /// Record the trades of one accepted submission.
    pub fn record_trades(&mut self, count: usize, volume: u64) {
        self.total_trades += count as u64;
        self.total_volume += volume;
    }

    /// Record the terminal status of one accepted submission; charges
    /// brokerage when a player submission achieved any fill.
    pub fn record_outcome(&mut self, actor: Owner, status: SubmitStatus, brokerage_fee: u64) {
        if !actor.is_player() {
            return;
        }
        match status {
            SubmitStatus::Filled => self.player_orders_filled += 1,
            SubmitStatus::PartiallyFilledRested | SubmitStatus::PartiallyFilledDropped => {
                self.player_orders_partially_filled += 1
            }
            SubmitStatus::Rested | SubmitStatus::Dropped => self.player_orders_unfilled += 1,
            SubmitStatus::Rejected => return,
        }
        let filled_any = matches!(
            status,
            SubmitStatus::Filled
                | SubmitStatus::PartiallyFilledRested
                | SubmitStatus::PartiallyFilledDropped
        );
        if filled_any {
            self.last_brokerage = brokerage_fee;
            self.total_brokerage += brokerage_fee;
        }
    }

    /// Reset every counter to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
