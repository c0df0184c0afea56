//! Continuous price-time crossing.
//!
//! [`cross_incoming`] walks the opposite side of one book, head first,
//! filling the incoming (taker) order against resting (maker) orders until
//! either the taker is exhausted or the best maker no longer crosses:
//!
//! ```text
//! incoming buy  @ P  trades with asks priced <= P
//! incoming sell @ P  trades with bids priced >= P
//! ```
//!
//! Every fill executes at the **maker's** price. A maker that reaches zero
//! remaining is popped and marked `filled`; otherwise it stays at the head
//! marked `partial`. The caller must hold the book's exclusive lock for the
//! whole call.

use chrono::Utc;
use pairmatch_types::{Order, OrderSide, Trade};
use rust_decimal::Decimal;

use crate::OrderBook;

/// Everything one crossing pass produced.
#[derive(Debug, Default)]
pub struct CrossingOutcome {
    /// Fills in execution order.
    pub trades: Vec<Trade>,
    /// Post-fill state of every maker touched, parallel to `trades`.
    pub makers: Vec<Order>,
}

/// Cross `incoming` against `book`, mutating `incoming.filled` and the
/// touched makers in place, and appending each trade to the book's log.
///
/// `incoming.status` is left for the caller to derive once matching ends.
pub fn cross_incoming(book: &mut OrderBook, incoming: &mut Order) -> CrossingOutcome {
    let mut outcome = CrossingOutcome::default();

    while incoming.remaining() > Decimal::ZERO {
        let Some(resting) = book.opposite_best_mut(incoming.side) else {
            break;
        };
        if !incoming.crosses(resting.price) {
            break;
        }

        let match_qty = incoming.remaining().min(resting.remaining());
        incoming.fill(match_qty);
        resting.fill(match_qty);
        resting.refresh_status();

        let (buy_order_id, sell_order_id) = match incoming.side {
            OrderSide::Buy => (incoming.id, resting.id),
            OrderSide::Sell => (resting.id, incoming.id),
        };
        let maker = resting.clone();

        if maker.is_filled() {
            let popped = book.pop_opposite_best(incoming.side);
            debug_assert_eq!(popped.map(|o| o.id), Some(maker.id));
        }

        let trade = Trade {
            id: book.next_trade_id(),
            buy_order_id,
            sell_order_id,
            pair: book.pair.clone(),
            price: maker.price,
            quantity: match_qty,
            created_at: Utc::now(),
        };

        tracing::debug!(
            pair = %trade.pair,
            trade_id = %trade.id,
            buy_order = %trade.buy_order_id,
            sell_order = %trade.sell_order_id,
            price = %trade.price,
            qty = %trade.quantity,
            maker_status = %maker.status,
            "Trade matched"
        );

        book.record_trade(trade.clone());
        outcome.trades.push(trade);
        outcome.makers.push(maker);
    }

    outcome
}
