//! Error taxonomy
//!
//! Validation failures are reported synchronously to the caller and are
//! distinct from an accepted order that rested unfilled.

use crate::numeric::Price;
use thiserror::Error;

/// Rejection reasons for a submitted order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderError {
    #[error("invalid quantity: orders must carry a positive quantity")]
    InvalidQuantity,

    #[error("invalid price {price}: outside tradable range {min}..={max}")]
    InvalidPrice { price: Price, min: Price, max: Price },
}
