//! Scripted demo playback
//!
//! Runs a short random walk of submissions around the last traded
//! price: mostly limit orders near the touch, occasionally a market
//! order. Seeded, so a demo replays identically.

use matching_engine::Execution;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use types::errors::OrderError;
use types::numeric::Quantity;
use types::order::{Owner, Side};

use crate::session::TradingSession;

/// Configuration for the demo runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Number of submissions to play.
    pub steps: u32,
    /// Probability a step is a limit order (the rest are market orders).
    pub limit_ratio: f64,
    /// Limit prices land within this many ticks of the last traded
    /// price, clamped to the tick range.
    pub max_price_offset: i64,
    pub min_quantity: u64,
    pub max_quantity: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            steps: 15,
            limit_ratio: 0.6,
            max_price_offset: 2,
            min_quantity: 3,
            max_quantity: 10,
        }
    }
}

/// Steps a session through a seeded random demo.
pub struct DemoRunner {
    pub config: DemoConfig,
    rng: ChaCha8Rng,
}

impl DemoRunner {
    /// Create a new runner with a deterministic seed.
    pub fn new(config: DemoConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Play a single random submission.
    pub fn step(&mut self, session: &mut TradingSession) -> Result<Execution, OrderError> {
        let is_limit = self.rng.gen_bool(self.config.limit_ratio);
        let side = if self.rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
        let quantity = Quantity::new(
            self.rng
                .gen_range(self.config.min_quantity..=self.config.max_quantity),
        );

        if is_limit {
            let offset = self
                .rng
                .gen_range(-self.config.max_price_offset..=self.config.max_price_offset);
            let price = session
                .tick_range()
                .clamp(session.last_trade_price().offset(offset));
            session.submit_limit(Owner::Bot, side, price, quantity)
        } else {
            session.submit_market(Owner::Bot, side, quantity)
        }
    }

    /// Play the configured number of steps and return how many ran.
    pub fn run(&mut self, session: &mut TradingSession) -> Result<u32, OrderError> {
        for _ in 0..self.config.steps {
            self.step(session)?;
        }
        Ok(self.config.steps)
    }
}
