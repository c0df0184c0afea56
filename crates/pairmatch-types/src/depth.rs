//! Aggregated market-depth view of an order book.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::TradingPair;

/// Outstanding quantity at one price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthLevel {
    pub price: Decimal,
    /// Sum of `remaining` across all resting orders at exactly `price`.
    pub quantity: Decimal,
}

/// Top-of-book levels for both sides, best price first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDepth {
    pub pair: TradingPair,
    /// Descending by price.
    pub bids: Vec<DepthLevel>,
    /// Ascending by price.
    pub asks: Vec<DepthLevel>,
}

impl BookDepth {
    #[must_use]
    pub fn best_bid(&self) -> Option<&DepthLevel> {
        self.bids.first()
    }

    #[must_use]
    pub fn best_ask(&self) -> Option<&DepthLevel> {
        self.asks.first()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
