//! Price level implementation with FIFO queue
//!
//! A price level contains all resting orders at a specific price point.
//! Orders are maintained in FIFO order to enforce time priority; because
//! ids are allocated monotonically, queue order and ascending-id order
//! coincide.

use std::collections::VecDeque;
use types::numeric::Quantity;
use types::order::RestingOrder;

/// A price level containing resting orders at a specific price.
///
/// Maintains strict FIFO ordering and a cached total of the quantities
/// queued at this price.
#[derive(Debug, Clone, Default)]
pub struct PriceLevel {
    orders: VecDeque<RestingOrder>,
    total_quantity: Quantity,
}

impl PriceLevel {
    /// Create a new empty price level.
    pub fn new() -> Self {
        Self {
            orders: VecDeque::new(),
            total_quantity: Quantity::zero(),
        }
    }

    /// Insert an order at the back of the queue (time priority).
    pub fn insert(&mut self, order: RestingOrder) {
        self.total_quantity += order.quantity;
        self.orders.push_back(order);
    }

    /// Peek at the front order without removing it.
    pub fn front(&self) -> Option<&RestingOrder> {
        self.orders.front()
    }

    /// Consume `traded` units from the front order.
    ///
    /// The front order's quantity is decremented; if it reaches zero the
    /// order is removed, otherwise it stays at the front with its
    /// original id and price (its time priority is unchanged).
    pub fn consume_front(&mut self, traded: Quantity) {
        if let Some(front) = self.orders.front_mut() {
            debug_assert!(traded <= front.quantity, "consumed more than the front order holds");
            front.quantity = front.quantity.saturating_sub(traded);
            self.total_quantity = self.total_quantity.saturating_sub(traded);
            if front.quantity.is_zero() {
                self.orders.pop_front();
            }
        }
    }

    /// Check if the price level is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the total quantity at this price level.
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Get the number of orders at this level.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Iterate the queued orders in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &RestingOrder> {
        self.orders.iter()
    }
}
