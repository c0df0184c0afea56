//! The order book for a single trading pair.
//!
//! Holds two [`PriorityQueue`](crate::priority_queue::PriorityQueue)s:
//! - **Bids** (buys): highest price first, FIFO within a price
//! - **Asks** (sells): lowest price first, FIFO within a price
//!
//! plus a book-local trade-ID counter and the book's own trade log.
//! All mutation happens under the engine's per-book lock.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use pairmatch_types::*;
use rust_decimal::Decimal;

use crate::priority_queue::{AskQueue, BidQueue};

/// The order book for a single trading pair.
#[derive(Debug)]
pub struct OrderBook {
    /// The pair this book serves (e.g., BTC/USDT).
    pub pair: TradingPair,
    bids: BidQueue,
    asks: AskQueue,
    /// Next book-local trade ID to hand out.
    next_trade_id: TradeId,
    /// Every trade executed in this book, in execution order.
    trades: Vec<Trade>,
}

impl OrderBook {
    /// Create a new empty order book for the given pair.
    #[must_use]
    pub fn new(pair: TradingPair) -> Self {
        Self::with_capacity(pair, 0)
    }

    /// Create an empty book, reserving `capacity` slots per side.
    #[must_use]
    pub fn with_capacity(pair: TradingPair, capacity: usize) -> Self {
        Self {
            pair,
            bids: BidQueue::with_capacity(capacity),
            asks: AskQueue::with_capacity(capacity),
            next_trade_id: TradeId::FIRST,
            trades: Vec::new(),
        }
    }

    // =================================================================
    // Insertion
    // =================================================================

    /// Rest a buy order.
    pub fn add_bid(&mut self, order: Order) {
        debug_assert_eq!(order.side, OrderSide::Buy);
        self.bids.push(order);
    }

    /// Rest a sell order.
    pub fn add_ask(&mut self, order: Order) {
        debug_assert_eq!(order.side, OrderSide::Sell);
        self.asks.push(order);
    }

    /// Rest an order on its own side.
    pub fn rest(&mut self, order: Order) {
        match order.side {
            OrderSide::Buy => self.add_bid(order),
            OrderSide::Sell => self.add_ask(order),
        }
    }

    // =================================================================
    // Head access
    // =================================================================

    /// Highest-priority resting buy, or `None` if no bids.
    #[must_use]
    pub fn best_bid(&self) -> Option<&Order> {
        self.bids.peek_best()
    }

    /// Highest-priority resting sell, or `None` if no asks.
    #[must_use]
    pub fn best_ask(&self) -> Option<&Order> {
        self.asks.peek_best()
    }

    /// Remove and return the best bid.
    pub fn pop_best_bid(&mut self) -> Option<Order> {
        self.bids.pop_best()
    }

    /// Remove and return the best ask.
    pub fn pop_best_ask(&mut self) -> Option<Order> {
        self.asks.pop_best()
    }

    /// Head of the side an incoming `side` order trades against.
    pub(crate) fn opposite_best_mut(&mut self, side: OrderSide) -> Option<&mut Order> {
        match side {
            OrderSide::Buy => self.asks.peek_best_mut(),
            OrderSide::Sell => self.bids.peek_best_mut(),
        }
    }

    /// Pop the head of the side an incoming `side` order trades against.
    pub(crate) fn pop_opposite_best(&mut self, side: OrderSide) -> Option<Order> {
        match side {
            OrderSide::Buy => self.pop_best_ask(),
            OrderSide::Sell => self.pop_best_bid(),
        }
    }

    // =================================================================
    // Trades
    // =================================================================

    /// Return the next book-local trade ID and advance the counter.
    pub fn next_trade_id(&mut self) -> TradeId {
        let id = self.next_trade_id;
        self.next_trade_id = id.next();
        id
    }

    pub(crate) fn record_trade(&mut self, trade: Trade) {
        self.trades.push(trade);
    }

    /// Every trade executed in this book, oldest first.
    #[must_use]
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    // =================================================================
    // Queries
    // =================================================================

    /// Aggregate remaining quantity per price and return up to `levels`
    /// levels per side, bids descending and asks ascending by price.
    ///
    /// A level whose total exceeds [`Decimal::MAX`] reports `Decimal::MAX`.
    #[must_use]
    pub fn depth(&self, levels: usize) -> BookDepth {
        let mut bids: BTreeMap<Reverse<Decimal>, Decimal> = BTreeMap::new();
        for order in self.bids.iter() {
            let remaining = order.remaining();
            if remaining > Decimal::ZERO {
                accumulate(bids.entry(Reverse(order.price)).or_default(), remaining);
            }
        }

        let mut asks: BTreeMap<Decimal, Decimal> = BTreeMap::new();
        for order in self.asks.iter() {
            let remaining = order.remaining();
            if remaining > Decimal::ZERO {
                accumulate(asks.entry(order.price).or_default(), remaining);
            }
        }

        BookDepth {
            pair: self.pair.clone(),
            bids: bids
                .into_iter()
                .take(levels)
                .map(|(Reverse(price), quantity)| DepthLevel { price, quantity })
                .collect(),
            asks: asks
                .into_iter()
                .take(levels)
                .map(|(price, quantity)| DepthLevel { price, quantity })
                .collect(),
        }
    }

    /// Spread = best_ask - best_bid. `None` if either side is empty.
    #[must_use]
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.price - bid.price),
            _ => None,
        }
    }

    /// Number of resting buy orders.
    #[must_use]
    pub fn bid_count(&self) -> usize {
        self.bids.len()
    }

    /// Number of resting sell orders.
    #[must_use]
    pub fn ask_count(&self) -> usize {
        self.asks.len()
    }

    /// Total number of resting orders.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    /// Returns `true` if the book has no orders on either side.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Iterate every resting order (bids then asks, heap order).
    pub fn resting_orders(&self) -> impl Iterator<Item = &Order> {
        self.bids.iter().chain(self.asks.iter())
    }
}

fn accumulate(total: &mut Decimal, qty: Decimal) {
    *total = total.checked_add(qty).unwrap_or(Decimal::MAX);
}
