//! The matching engine: pair registry, order registry, global trade log.
//!
//! ## Locking
//!
//! ```text
//! books     RwLock<pair -> Arc<Mutex<OrderBook>>>   released before a book lock is taken
//! book      Mutex<OrderBook>                        held for one whole placement
//! registry  Mutex<OrderRegistry>                    taken only while holding a book, or alone
//! trades    RwLock<Vec<Trade>>                      taken only while holding a book, or alone
//! ```
//!
//! A placement locks its book exclusively from ID allocation through
//! crossing, resting and registry refresh, so two orders on the same pair
//! never observe the same maker. Different pairs never share a lock on the
//! hot path. The registry and trade log are never held while acquiring a
//! book lock.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::Utc;
use pairmatch_types::*;
use parking_lot::{Mutex, RwLock};
use rust_decimal::Decimal;

use crate::{OrderBook, matcher::cross_incoming};

/// Shared handle to one pair's book.
pub type SharedBook = Arc<Mutex<OrderBook>>;

/// Result of a successful [`MatchingEngine::place_order`].
#[derive(Debug, Clone)]
pub struct Placement {
    /// The order's state after matching (and resting, if anything remains).
    pub order: Order,
    /// Trades produced by this placement, in execution order.
    pub trades: Vec<Trade>,
}

#[derive(Debug)]
struct OrderRegistry {
    next_order_id: OrderId,
    orders: BTreeMap<OrderId, Order>,
}

impl OrderRegistry {
    fn allocate_id(&mut self) -> OrderId {
        let id = self.next_order_id;
        self.next_order_id = id.next();
        id
    }
}

/// Owns every order book plus the cross-pair order and trade records.
#[derive(Debug)]
pub struct MatchingEngine {
    books: RwLock<HashMap<TradingPair, SharedBook>>,
    registry: Mutex<OrderRegistry>,
    trades: RwLock<Vec<Trade>>,
    queue_capacity: usize,
}

impl MatchingEngine {
    /// An engine with no pairs.
    #[must_use]
    pub fn new() -> Self {
        Self::with_queue_capacity(0)
    }

    /// An engine whose books reserve `capacity` queue slots per side.
    #[must_use]
    pub fn with_queue_capacity(capacity: usize) -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
            registry: Mutex::new(OrderRegistry {
                next_order_id: OrderId::FIRST,
                orders: BTreeMap::new(),
            }),
            trades: RwLock::new(Vec::new()),
            queue_capacity: capacity,
        }
    }

    /// Build an engine from configuration, creating every configured market.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let engine = Self::with_queue_capacity(config.queue_capacity);
        for market in &config.markets {
            engine.create_pair(market.pair()?);
        }
        tracing::info!(
            engine = constants::ENGINE_NAME,
            version = constants::VERSION,
            markets = config.markets.len(),
            "Matching engine started"
        );
        Ok(engine)
    }

    /// Slots each new book reserves per side.
    #[must_use]
    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    // =================================================================
    // Pairs
    // =================================================================

    /// Create an empty book for `pair`. Idempotent: returns `false` and
    /// leaves the existing book untouched if the pair already exists.
    pub fn create_pair(&self, pair: TradingPair) -> bool {
        let mut books = self.books.write();
        if books.contains_key(&pair) {
            return false;
        }
        let book = OrderBook::with_capacity(pair.clone(), self.queue_capacity);
        tracing::info!(pair = %pair, "Trading pair created");
        books.insert(pair, Arc::new(Mutex::new(book)));
        true
    }

    /// The book for `pair`, or `None` if the pair was never created.
    #[must_use]
    pub fn get_order_book(&self, pair: &TradingPair) -> Option<SharedBook> {
        self.books.read().get(pair).cloned()
    }

    /// Every registered pair, sorted by symbol.
    #[must_use]
    pub fn pairs(&self) -> Vec<TradingPair> {
        let mut pairs: Vec<TradingPair> = self.books.read().keys().cloned().collect();
        pairs.sort();
        pairs
    }

    // =================================================================
    // Placement
    // =================================================================

    /// Submit a limit order and cross it against its pair's book.
    ///
    /// Field validation (positive price/quantity, known side, positive user)
    /// is the caller's job. The only failure is [`PairmatchError::PairNotFound`],
    /// detected before an order ID is allocated: a failed call consumes no ID
    /// and changes no state.
    pub fn place_order(
        &self,
        user_id: UserId,
        pair: &TradingPair,
        side: OrderSide,
        price: Decimal,
        quantity: Decimal,
    ) -> Result<Placement> {
        let Some(shared) = self.get_order_book(pair) else {
            tracing::warn!(pair = %pair, user = %user_id, "Order rejected: unknown pair");
            return Err(PairmatchError::PairNotFound(pair.clone()));
        };

        let mut book = shared.lock();

        let id = self.registry.lock().allocate_id();
        let mut order = Order::new(id, user_id, pair.clone(), side, price, quantity, Utc::now());

        let outcome = cross_incoming(&mut book, &mut order);
        order.refresh_status();

        if order.remaining() > Decimal::ZERO {
            book.rest(order.clone());
        }

        {
            let mut registry = self.registry.lock();
            for maker in &outcome.makers {
                registry.orders.insert(maker.id, maker.clone());
            }
            registry.orders.insert(order.id, order.clone());
        }
        if !outcome.trades.is_empty() {
            self.trades.write().extend(outcome.trades.iter().cloned());
        }
        drop(book);

        tracing::debug!(
            order_id = %order.id,
            pair = %order.pair,
            side = %order.side,
            price = %order.price,
            qty = %order.quantity,
            filled = %order.filled,
            status = %order.status,
            trades = outcome.trades.len(),
            "Order placed"
        );

        Ok(Placement {
            order,
            trades: outcome.trades,
        })
    }

    // =================================================================
    // Queries
    // =================================================================

    /// Snapshot of the global trade log, in execution order.
    #[must_use]
    pub fn trades(&self) -> Vec<Trade> {
        self.trades.read().clone()
    }

    /// Trades executed in one book, or `None` for an unknown pair.
    #[must_use]
    pub fn trades_for_pair(&self, pair: &TradingPair) -> Option<Vec<Trade>> {
        let book = self.get_order_book(pair)?;
        let trades = book.lock().trades().to_vec();
        Some(trades)
    }

    /// Every order `user_id` ever placed, across all pairs, by ascending ID.
    #[must_use]
    pub fn orders_by_user(&self, user_id: UserId) -> Vec<Order> {
        self.registry
            .lock()
            .orders
            .values()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Latest known state of one order.
    #[must_use]
    pub fn order(&self, order_id: OrderId) -> Option<Order> {
        self.registry.lock().orders.get(&order_id).cloned()
    }

    /// Number of orders ever accepted.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.registry.lock().orders.len()
    }

    /// Aggregated depth for `pair`, or `None` for an unknown pair.
    #[must_use]
    pub fn depth(&self, pair: &TradingPair, levels: usize) -> Option<BookDepth> {
        let book = self.get_order_book(pair)?;
        let depth = book.lock().depth(levels);
        Some(depth)
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}
