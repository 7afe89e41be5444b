//! Trading session
//!
//! Owns one matching engine plus everything the surrounding application
//! observes about it: the event log, the session statistics, and the
//! last traded price. Every submission, whether from the player, a bot,
//! or a scripted scenario, funnels through
//! [`TradingSession::submit_limit`] and
//! [`TradingSession::submit_market`], one at a time.

use matching_engine::{Execution, MatchingEngine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use types::errors::OrderError;
use types::ids::TakerId;
use types::numeric::{Price, Quantity, TickRange};
use types::order::{OrderType, Owner, RestingOrder, Side};

use crate::events::{SessionEvent, SubmitStatus};
use crate::stats::SessionStats;

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Inclusive tradable price range.
    pub tick_range: TickRange,
    /// Flat fee charged to the player per submission that achieves any
    /// fill.
    pub brokerage_fee: u64,
    /// Reference price reported as the last traded price before any
    /// trade happens.
    pub reference_price: Price,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_range: TickRange::default(),
            brokerage_fee: 10,
            reference_price: Price::new(1000),
        }
    }
}

/// What kind of order a submission carries.
#[derive(Debug, Clone, Copy)]
enum Submission {
    Limit(Price),
    Market,
}

impl Submission {
    fn order_type(&self) -> OrderType {
        match self {
            Submission::Limit(_) => OrderType::Limit,
            Submission::Market => OrderType::Market,
        }
    }

    fn price(&self) -> Option<Price> {
        match self {
            Submission::Limit(price) => Some(*price),
            Submission::Market => None,
        }
    }
}

/// One simulated trading session over a single instrument.
#[derive(Debug, Clone)]
pub struct TradingSession {
    engine: MatchingEngine,
    config: SessionConfig,
    stats: SessionStats,
    events: Vec<SessionEvent>,
    last_trade_price: Price,
    next_seq: u64,
}

impl TradingSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            engine: MatchingEngine::new(config.tick_range),
            config,
            stats: SessionStats::new(),
            events: Vec::new(),
            last_trade_price: config.reference_price,
            next_seq: 1,
        }
    }

    /// Submit a limit order on behalf of `actor`.
    pub fn submit_limit(
        &mut self,
        actor: Owner,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Result<Execution, OrderError> {
        self.submit(actor, side, Submission::Limit(price), quantity)
    }

    /// Submit a market order on behalf of `actor`.
    pub fn submit_market(
        &mut self,
        actor: Owner,
        side: Side,
        quantity: Quantity,
    ) -> Result<Execution, OrderError> {
        self.submit(actor, side, Submission::Market, quantity)
    }

    fn submit(
        &mut self,
        actor: Owner,
        side: Side,
        submission: Submission,
        quantity: Quantity,
    ) -> Result<Execution, OrderError> {
        let order_type = submission.order_type();
        let price = submission.price();
        let taker_id = self.engine.next_taker_id();
        self.push_event(|seq| SessionEvent::OrderSubmitted {
            seq,
            actor,
            taker_id,
            side,
            order_type,
            price,
            quantity,
        });
        self.stats.record_submission(actor);

        let result = match submission {
            Submission::Limit(limit) => {
                self.engine.submit_limit(side, limit, quantity, actor, taker_id)
            }
            Submission::Market => self.engine.submit_market(side, quantity, actor, taker_id),
        };

        match result {
            Ok(execution) => {
                self.record_execution(actor, side, order_type, price, quantity, taker_id, &execution);
                Ok(execution)
            }
            Err(err) => {
                debug!(%actor, %side, %quantity, error = %err, "submission rejected");
                self.stats.record_rejection();
                self.push_event(|seq| SessionEvent::OrderResolved {
                    seq,
                    actor,
                    taker_id,
                    side,
                    order_type,
                    price,
                    quantity,
                    filled: Quantity::zero(),
                    status: SubmitStatus::Rejected,
                });
                Err(err)
            }
        }
    }

    fn record_execution(
        &mut self,
        actor: Owner,
        side: Side,
        order_type: OrderType,
        price: Option<Price>,
        quantity: Quantity,
        taker_id: TakerId,
        execution: &Execution,
    ) {
        for (trade, entry) in execution.trades.iter().zip(&execution.fifo_entries) {
            self.last_trade_price = trade.price;
            let event = |seq| SessionEvent::TradeExecuted {
                seq,
                taker: trade.taker,
                taker_id: trade.taker_id,
                side,
                order_type,
                price: trade.price,
                quantity: trade.quantity,
                counterparty: trade.counterparty,
                resting_order_id: trade.resting_order_id,
                resting_side: entry.resting_side,
            };
            self.push_event(event);
        }

        let filled = execution.filled_quantity();
        let status = SubmitStatus::from(&execution.outcome);
        self.stats.record_trades(execution.trades.len(), filled.value());
        self.stats.record_outcome(actor, status, self.config.brokerage_fee);
        self.push_event(|seq| SessionEvent::OrderResolved {
            seq,
            actor,
            taker_id,
            side,
            order_type,
            price,
            quantity,
            filled,
            status,
        });
        debug!(
            %actor,
            %side,
            %quantity,
            filled = filled.value(),
            trades = execution.trades.len(),
            ?status,
            "submission executed"
        );
    }

    fn push_event(&mut self, build: impl FnOnce(u64) -> SessionEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.events.push(build(seq));
    }

    /// Clear the book, both id counters, the event log, the statistics,
    /// and the last traded price in one operation.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.stats.reset();
        self.events.clear();
        self.last_trade_price = self.config.reference_price;
        self.next_seq = 1;
        info!("session reset");
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn tick_range(&self) -> TickRange {
        self.config.tick_range
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Number of trades recorded so far.
    pub fn trade_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_trade()).count()
    }

    /// Price of the most recent trade, or the configured reference price
    /// before any trade.
    pub fn last_trade_price(&self) -> Price {
        self.last_trade_price
    }

    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        self.engine.best_bid()
    }

    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        self.engine.best_ask()
    }

    pub fn bid_levels(&self) -> Vec<(Price, Quantity)> {
        self.engine.bid_levels()
    }

    pub fn ask_levels(&self) -> Vec<(Price, Quantity)> {
        self.engine.ask_levels()
    }

    /// All resting orders, bids first, each side in priority order.
    pub fn pending_orders(&self) -> Vec<RestingOrder> {
        let mut orders = self.engine.bid_orders();
        orders.extend(self.engine.ask_orders());
        orders
    }

    /// Number of resting orders on both sides.
    pub fn order_count(&self) -> usize {
        self.engine.order_count()
    }

    /// Count and total quantity of the player's resting orders.
    pub fn open_player_orders(&self) -> (usize, Quantity) {
        let open: Vec<_> = self
            .pending_orders()
            .into_iter()
            .filter(|o| o.owner.is_player())
            .collect();
        let quantity = open.iter().map(|o| o.quantity).sum();
        (open.len(), quantity)
    }

    /// Occupied price levels as a percentage of the tick range.
    pub fn utilization(&self) -> f64 {
        let occupied = self.engine.bid_levels().len() + self.engine.ask_levels().len();
        occupied as f64 / self.config.tick_range.level_count() as f64 * 100.0
    }

    /// Best-ask minus best-bid in ticks, when both sides are non-empty.
    pub fn spread(&self) -> Option<i64> {
        match (self.engine.best_bid(), self.engine.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some(ask.value() - bid.value()),
            _ => None,
        }
    }
}

impl Default for TradingSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
