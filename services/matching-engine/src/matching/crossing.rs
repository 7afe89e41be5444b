//! Crossing detection logic
//!
//! Determines when an incoming order's price overlaps the opposite best
//! price. Comparisons are inclusive: an order priced exactly at the
//! opposite best trades immediately rather than resting.

use types::numeric::Price;
use types::order::Side;

/// Check if an incoming limit order crosses a resting price.
///
/// A buy crosses when its price is at or above the resting ask; a sell
/// crosses when its price is at or below the resting bid.
pub fn crosses(incoming: Side, limit_price: Price, resting_price: Price) -> bool {
    match incoming {
        Side::Buy => limit_price >= resting_price,
        Side::Sell => limit_price <= resting_price,
    }
}
