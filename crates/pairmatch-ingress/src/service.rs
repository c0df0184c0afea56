//! The caller-facing service: four operations over one shared engine.
//!
//! ```text
//! CreatePair(base, quote)          -> "BASE/QUOTE"
//! PlaceOrder(request)              -> Placement | Validation | PairNotFound
//! GetOrderBookDepth(pair, depth)   -> BookDepth | None
//! GetOrdersByUser(user_id)         -> [Order]
//! ```
//!
//! The service owns no market state. It holds an `Arc` to the engine it was
//! given, so several services (or adapters) can front the same books.

use std::sync::Arc;

use pairmatch_matchcore::{MatchingEngine, Placement};
use pairmatch_types::{BookDepth, EngineConfig, Order, Result, TradingPair, UserId};

use crate::validation::{PlaceOrderRequest, validate_order_request};

/// Validating facade over a [`MatchingEngine`].
#[derive(Debug, Clone)]
pub struct ExchangeService {
    engine: Arc<MatchingEngine>,
    config: EngineConfig,
}

impl ExchangeService {
    /// Front an existing engine.
    #[must_use]
    pub fn new(engine: Arc<MatchingEngine>, config: EngineConfig) -> Self {
        Self { engine, config }
    }

    /// Build a fresh engine from `config` (creating its markets) and front it.
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        let engine = MatchingEngine::from_config(&config)?;
        Ok(Self::new(Arc::new(engine), config))
    }

    /// The engine behind this service.
    #[must_use]
    pub fn engine(&self) -> &Arc<MatchingEngine> {
        &self.engine
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Create a pair and return its symbol. Creating an existing pair is a
    /// no-op that returns the same symbol.
    ///
    /// # Errors
    /// [`PairmatchError::InvalidPair`] for blank legs.
    pub fn create_pair(&self, base: &str, quote: &str) -> Result<String> {
        let pair = TradingPair::try_new(base, quote).inspect_err(|e| {
            tracing::warn!(base, quote, error = %e, "Pair creation rejected");
        })?;
        let symbol = pair.symbol();
        self.engine.create_pair(pair);
        Ok(symbol)
    }

    /// Validate `request` and, if it passes, submit it to the engine.
    ///
    /// Rejected requests never reach a book and consume no order ID.
    ///
    /// # Errors
    /// [`PairmatchError::Validation`] with every field issue,
    /// [`PairmatchError::InvalidPair`] for a malformed symbol, or
    /// [`PairmatchError::PairNotFound`] for a pair that was never created.
    pub fn place_order(&self, request: &PlaceOrderRequest) -> Result<Placement> {
        let order = validate_order_request(request)?;
        self.engine
            .place_order(order.user_id, &order.pair, order.side, order.price, order.quantity)
    }

    /// Aggregated depth for a `"BASE/QUOTE"` symbol.
    ///
    /// A missing or non-positive `depth` means the configured default.
    /// Unknown or malformed symbols yield `None`.
    #[must_use]
    pub fn get_order_book_depth(&self, pair: &str, depth: Option<i64>) -> Option<BookDepth> {
        let pair = pair.parse::<TradingPair>().ok()?;
        self.engine.depth(&pair, self.config.effective_depth(depth))
    }

    /// Every order a user ever placed, ascending by ID. Unknown or
    /// non-positive user IDs yield an empty list.
    #[must_use]
    pub fn get_orders_by_user(&self, user_id: i64) -> Vec<Order> {
        match u64::try_from(user_id) {
            Ok(id) if id > 0 => self.engine.orders_by_user(UserId(id)),
            _ => Vec::new(),
        }
    }
}

impl Default for ExchangeService {
    fn default() -> Self {
        let config = EngineConfig::default();
        let engine = MatchingEngine::with_queue_capacity(config.queue_capacity);
        Self::new(Arc::new(engine), config)
    }
}
