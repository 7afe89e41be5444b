//! The fill loop shared by the limit and market paths
//!
//! Walks the opposing book best-entry first, emitting one Trade and one
//! FifoEntry per consumed slice. A limit order stops at its price bound;
//! a market order (`limit_price = None`) runs until the opposing book is
//! exhausted or the incoming quantity is.
//!
//! There is deliberately no self-trade check here: an owner's incoming
//! order may consume that owner's own resting order.

use crate::book::OpposingBook;
use crate::matching::crossing;
use types::ids::TakerId;
use types::numeric::{Price, Quantity};
use types::order::{CounterpartyRole, Owner, Side};
use types::trade::{FifoEntry, Trade};

/// Cross `remaining` units of an incoming order against `book`, appending
/// the resulting trades and FIFO entries, and return the unfilled
/// remainder.
///
/// Trades execute at the resting order's price and are appended oldest
/// match first.
pub(crate) fn fill_against<B: OpposingBook>(
    book: &mut B,
    incoming: Side,
    limit_price: Option<Price>,
    mut remaining: Quantity,
    taker: Owner,
    taker_id: TakerId,
    trades: &mut Vec<Trade>,
    fifo_entries: &mut Vec<FifoEntry>,
) -> Quantity {
    while !remaining.is_zero() {
        let (resting_id, resting_price, resting_owner, available) = match book.peek_best() {
            Some(best) => (best.id, best.price, best.owner, best.quantity),
            None => break,
        };

        if let Some(limit) = limit_price {
            if !crossing::crosses(incoming, limit, resting_price) {
                break;
            }
        }

        let traded = remaining.min(available);
        trades.push(Trade {
            price: resting_price,
            quantity: traded,
            taker,
            counterparty: CounterpartyRole::of(resting_owner, book.book_side()),
            resting_order_id: resting_id,
            taker_id,
        });
        fifo_entries.push(FifoEntry {
            resting_order_id: resting_id,
            resting_side: book.book_side(),
            price: resting_price,
            filled: traded,
            taker,
            taker_id,
        });

        book.consume_best(traded);
        remaining = remaining.saturating_sub(traded);
    }

    remaining
}
