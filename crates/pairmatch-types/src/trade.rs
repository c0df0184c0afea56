//! Trade records produced by the crossing algorithm.
//!
//! A [`Trade`] is the immutable record of one fill between the resting
//! (maker) order and the incoming (taker) order, executed at the maker's
//! price.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{OrderId, TradeId, TradingPair};

/// A single fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Book-local identifier; `(pair, id)` is globally unique.
    pub id: TradeId,
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub pair: TradingPair,
    /// Execution price: always the resting order's price.
    pub price: Decimal,
    /// Executed quantity in base asset, always positive.
    pub quantity: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Trade {
    /// Whether `order_id` is either leg of this trade.
    #[must_use]
    pub fn involves(&self, order_id: OrderId) -> bool {
        self.buy_order_id == order_id || self.sell_order_id == order_id
    }
}

impl std::fmt::Display for Trade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Trade[{}#{}] buy={} sell={} {} @ {}",
            self.pair, self.id, self.buy_order_id, self.sell_order_id, self.quantity, self.price,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_trade() -> Trade {
        Trade {
            id: TradeId(1),
            buy_order_id: OrderId(2),
            sell_order_id: OrderId(1),
            pair: TradingPair::new("BTC", "USDT"),
            price: Decimal::new(50000, 0),
            quantity: Decimal::new(15, 1),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn trade_involves_both_legs() {
        let t = make_trade();
        assert!(t.involves(OrderId(1)));
        assert!(t.involves(OrderId(2)));
        assert!(!t.involves(OrderId(3)));
    }

    #[test]
    fn trade_display() {
        let s = format!("{}", make_trade());
        assert!(s.contains("BTC/USDT#1"));
        assert!(s.contains("50000"));
    }

    #[test]
    fn trade_json_field_names() {
        let json = serde_json::to_value(make_trade()).unwrap();
        assert_eq!(json["buy_order_id"], 2);
        assert_eq!(json["sell_order_id"], 1);
        assert_eq!(json["pair"], "BTC/USDT");
    }
}
