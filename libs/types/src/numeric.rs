//! Integer price and quantity types
//!
//! Prices are whole ticks and quantities whole units, so all book
//! arithmetic is exact integer arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A price expressed in whole ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    pub fn new(ticks: i64) -> Self {
        Self(ticks)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Price shifted by a signed number of ticks.
    pub fn offset(self, ticks: i64) -> Self {
        Self(self.0 + ticks)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative order or trade quantity.
///
/// A resting order never holds a zero quantity; zero only appears
/// transiently as a remainder during matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub fn new(units: u64) -> Self {
        Self(units)
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Subtraction clamped at zero.
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 + rhs.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Quantity) {
        self.0 += rhs.0;
    }
}

impl Sum for Quantity {
    fn sum<I: Iterator<Item = Quantity>>(iter: I) -> Quantity {
        iter.fold(Quantity::zero(), |acc, q| acc + q)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The inclusive range of tick prices the book accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRange {
    min: Price,
    max: Price,
}

impl TickRange {
    /// # Panics
    /// Panics if `min > max`.
    pub fn new(min: Price, max: Price) -> Self {
        assert!(min <= max, "tick range min must not exceed max");
        Self { min, max }
    }

    pub fn min(&self) -> Price {
        self.min
    }

    pub fn max(&self) -> Price {
        self.max
    }

    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }

    /// Nearest in-range price.
    pub fn clamp(&self, price: Price) -> Price {
        if price < self.min {
            self.min
        } else if price > self.max {
            self.max
        } else {
            price
        }
    }

    /// Number of tick levels in the range.
    pub fn level_count(&self) -> u64 {
        (self.max.value() - self.min.value() + 1) as u64
    }
}

impl Default for TickRange {
    fn default() -> Self {
        Self::new(Price::new(990), Price::new(1010))
    }
}
