//! Order types for the PairMatch matching core.
//!
//! Only simple limit orders exist. An order is created once at submission
//! and afterwards only its `filled` quantity and derived `status` change.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{OrderId, PairmatchError, Result, TradingPair, UserId};

/// Which side of the book this order is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

impl FromStr for OrderSide {
    type Err = PairmatchError;

    /// Only the exact lowercase wire forms are accepted.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            other => Err(PairmatchError::InvalidSide(other.to_string())),
        }
    }
}

/// Lifecycle status of an order, derived purely from `filled` vs `quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Nothing filled yet.
    Open,
    /// Some, but not all, of the quantity has traded.
    Partial,
    /// Fully traded; the order no longer rests in any book.
    Filled,
}

impl OrderStatus {
    /// Derive the status for a given fill level.
    #[must_use]
    pub fn from_fill(filled: Decimal, quantity: Decimal) -> Self {
        if filled >= quantity {
            Self::Filled
        } else if filled > Decimal::ZERO {
            Self::Partial
        } else {
            Self::Open
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Partial => write!(f, "partial"),
            Self::Filled => write!(f, "filled"),
        }
    }
}

/// A limit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub pair: TradingPair,
    pub side: OrderSide,
    pub price: Decimal,
    /// Original size; never changes.
    pub quantity: Decimal,
    /// Cumulative matched quantity, `0 <= filled <= quantity`.
    pub filled: Decimal,
    pub status: OrderStatus,
    /// Submission time; used for time priority and never altered.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// A freshly submitted, unfilled order.
    #[must_use]
    pub fn new(
        id: OrderId,
        user_id: UserId,
        pair: TradingPair,
        side: OrderSide,
        price: Decimal,
        quantity: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            pair,
            side,
            price,
            quantity,
            filled: Decimal::ZERO,
            status: OrderStatus::Open,
            created_at,
        }
    }

    /// Unfilled quantity.
    #[must_use]
    pub fn remaining(&self) -> Decimal {
        self.quantity - self.filled
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.remaining().is_zero()
    }

    /// Whether a resting order priced at `resting_price` on the opposite
    /// side can trade with this order.
    #[must_use]
    pub fn crosses(&self, resting_price: Decimal) -> bool {
        match self.side {
            OrderSide::Buy => resting_price <= self.price,
            OrderSide::Sell => resting_price >= self.price,
        }
    }

    /// Record a fill of `qty`. Does not touch `status`; call
    /// [`Order::refresh_status`] once the fill is final.
    pub fn fill(&mut self, qty: Decimal) {
        debug_assert!(qty > Decimal::ZERO, "fill quantity must be positive");
        debug_assert!(qty <= self.remaining(), "fill exceeds remaining quantity");
        self.filled += qty;
    }

    /// Re-derive `status` from `filled`.
    pub fn refresh_status(&mut self) {
        self.status = OrderStatus::from_fill(self.filled, self.quantity);
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Order {
    /// A BTC/USDT limit order with a process-unique ID and `created_at = now`.
    pub fn dummy_limit(side: OrderSide, price: Decimal, qty: Decimal) -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};

        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        let id = OrderId(NEXT_ID.fetch_add(1, Ordering::Relaxed));
        Self::new(
            id,
            UserId(1),
            TradingPair::new("BTC", "USDT"),
            side,
            price,
            qty,
            Utc::now(),
        )
    }
}
