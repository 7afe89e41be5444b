//! Random bot trader
//!
//! Submits bursts of paired buy/sell limit orders with prices drawn
//! uniformly across the tick range. The RNG is seeded, so a given seed
//! always produces the same traffic.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use types::errors::OrderError;
use types::numeric::{Price, Quantity, TickRange};
use types::order::{Owner, Side};

use crate::session::TradingSession;

/// Configuration for the random bot trader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomTraderConfig {
    /// Minimum order quantity
    pub min_quantity: u64,
    /// Maximum order quantity
    pub max_quantity: u64,
    /// Buy/sell pairs submitted per burst
    pub pairs_per_burst: usize,
}

impl Default for RandomTraderConfig {
    fn default() -> Self {
        Self {
            min_quantity: 3,
            max_quantity: 12,
            pairs_per_burst: 3,
        }
    }
}

/// Random bot with deterministic seeded RNG.
pub struct RandomTrader {
    pub config: RandomTraderConfig,
    pub orders_submitted: usize,
    rng: ChaCha8Rng,
}

impl RandomTrader {
    /// Create a new bot with a deterministic seed.
    pub fn new(config: RandomTraderConfig, seed: u64) -> Self {
        Self {
            config,
            orders_submitted: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn random_price(&mut self, ticks: &TickRange) -> Price {
        Price::new(self.rng.gen_range(ticks.min().value()..=ticks.max().value()))
    }

    fn random_quantity(&mut self) -> Quantity {
        Quantity::new(
            self.rng
                .gen_range(self.config.min_quantity..=self.config.max_quantity),
        )
    }

    /// Submit one burst of paired buy/sell limit orders.
    ///
    /// Returns the number of orders submitted. Generated orders are
    /// always within the tick range, so the session never rejects them.
    pub fn burst(&mut self, session: &mut TradingSession) -> Result<usize, OrderError> {
        let ticks = session.tick_range();
        let mut submitted = 0;
        for _ in 0..self.config.pairs_per_burst {
            let buy_price = self.random_price(&ticks);
            let sell_price = self.random_price(&ticks);
            let buy_quantity = self.random_quantity();
            let sell_quantity = self.random_quantity();

            session.submit_limit(Owner::Bot, Side::Buy, buy_price, buy_quantity)?;
            session.submit_limit(Owner::Bot, Side::Sell, sell_price, sell_quantity)?;
            submitted += 2;
        }
        self.orders_submitted += submitted;
        Ok(submitted)
    }
}
