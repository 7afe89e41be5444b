//! Order, side, and ownership types

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of an incoming order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Get the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "Buy"),
            Side::Sell => write!(f, "Sell"),
        }
    }
}

/// The side of the book an order rests on. Buys rest as bids, sells as
/// asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookSide {
    Bid,
    Ask,
}

impl From<Side> for BookSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Buy => BookSide::Bid,
            Side::Sell => BookSide::Ask,
        }
    }
}

impl fmt::Display for BookSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookSide::Bid => write!(f, "Bid"),
            BookSide::Ask => write!(f, "Ask"),
        }
    }
}

/// Kind of submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Limit,
    Market,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Limit => write!(f, "LIMIT"),
            OrderType::Market => write!(f, "MARKET"),
        }
    }
}

/// Who submitted an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Owner {
    Player,
    Bot,
}

impl Owner {
    pub fn is_player(&self) -> bool {
        matches!(self, Owner::Player)
    }

    /// Display label used in trade reports.
    pub fn label(&self) -> &'static str {
        match self {
            Owner::Player => "You",
            Owner::Bot => "Bot",
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Role of the resting counterparty in a trade.
///
/// A player's resting bid trades as `Buyer`, a player's resting ask as
/// `Seller`; bot-owned resting orders are reported as `Bot` regardless of
/// side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CounterpartyRole {
    Buyer,
    Seller,
    Bot,
}

impl CounterpartyRole {
    pub fn of(owner: Owner, side: BookSide) -> Self {
        match (owner, side) {
            (Owner::Player, BookSide::Bid) => CounterpartyRole::Buyer,
            (Owner::Player, BookSide::Ask) => CounterpartyRole::Seller,
            (Owner::Bot, _) => CounterpartyRole::Bot,
        }
    }
}

impl fmt::Display for CounterpartyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterpartyRole::Buyer => write!(f, "Buyer"),
            CounterpartyRole::Seller => write!(f, "Seller"),
            CounterpartyRole::Bot => write!(f, "Bot"),
        }
    }
}

/// An order held in the book awaiting a counterparty.
///
/// `quantity` is strictly positive for as long as the order is in the
/// book; the engine removes an order the moment its quantity reaches
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestingOrder {
    pub id: OrderId,
    pub side: BookSide,
    pub price: Price,
    pub quantity: Quantity,
    pub owner: Owner,
}
