//! Identifiers used throughout PairMatch.
//!
//! Order IDs are drawn from a single engine-wide counter and are globally
//! unique. Trade IDs come from a per-book counter and are only unique within
//! one [`TradingPair`]; `(pair, trade_id)` identifies a trade globally.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{PairmatchError, Result};

// ---------------------------------------------------------------------------
// OrderId
// ---------------------------------------------------------------------------

/// Globally unique, monotonically assigned order identifier (starts at 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl OrderId {
    /// The first ID handed out by a fresh engine.
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// TradeId
// ---------------------------------------------------------------------------

/// Trade identifier, unique within a single order book (starts at 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeId(pub u64);

impl TradeId {
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// UserId
// ---------------------------------------------------------------------------

/// Identifier for a trading account. Positivity is checked at ingress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// TradingPair
// ---------------------------------------------------------------------------

/// A trading pair (e.g., BTC/USDT).
///
/// Serialized as its canonical `"BASE/QUOTE"` symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TradingPair {
    pub base: String,
    pub quote: String,
}

impl TradingPair {
    /// Build a pair from its two legs. Surrounding whitespace is dropped.
    #[must_use]
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into().trim().to_string(),
            quote: quote.into().trim().to_string(),
        }
    }

    /// Build a pair, rejecting blank legs or legs containing `/`.
    pub fn try_new(base: &str, quote: &str) -> Result<Self> {
        let pair = Self::new(base, quote);
        if pair.base.is_empty() || pair.quote.is_empty() {
            return Err(PairmatchError::InvalidPair {
                reason: "base and quote are required".to_string(),
            });
        }
        if pair.base.contains('/') || pair.quote.contains('/') {
            return Err(PairmatchError::InvalidPair {
                reason: format!("symbol legs must not contain '/': {}", pair.symbol()),
            });
        }
        Ok(pair)
    }

    /// Canonical `"BASE/QUOTE"` form.
    #[must_use]
    pub fn symbol(&self) -> String {
        format!("{}/{}", self.base, self.quote)
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl FromStr for TradingPair {
    type Err = PairmatchError;

    fn from_str(s: &str) -> Result<Self> {
        let (base, quote) = s.split_once('/').ok_or_else(|| PairmatchError::InvalidPair {
            reason: format!("expected BASE/QUOTE, got {s:?}"),
        })?;
        Self::try_new(base, quote)
    }
}

impl TryFrom<String> for TradingPair {
    type Error = PairmatchError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TradingPair> for String {
    fn from(pair: TradingPair) -> Self {
        pair.symbol()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
