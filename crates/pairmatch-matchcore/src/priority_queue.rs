//! Binary heap parameterized by a price-time priority rule.
//!
//! Each order book owns two instances:
//! - **Bids** ([`BidQueue`]): highest price first, then earliest `created_at`
//! - **Asks** ([`AskQueue`]): lowest price first, then earliest `created_at`
//!
//! Ties on `created_at` fall back to the lower (earlier-assigned) order ID.
//!
//! The priority key `(price, created_at, id)` never changes once an order is
//! queued, so the head may be filled in place through
//! [`PriorityQueue::peek_best_mut`] without re-heapifying. Nothing here ever
//! orders by remaining quantity.

use std::cmp::Ordering;
use std::marker::PhantomData;

use pairmatch_types::Order;

/// A strict ordering rule: which of two items must be served first.
pub trait Priority<T> {
    /// `true` if `a` has strictly higher priority than `b`.
    fn precedes(a: &T, b: &T) -> bool;
}

/// Buy side: higher price first, FIFO within a price.
#[derive(Debug, Clone, Copy, Default)]
pub struct BidPriority;

/// Sell side: lower price first, FIFO within a price.
#[derive(Debug, Clone, Copy, Default)]
pub struct AskPriority;

fn earlier(a: &Order, b: &Order) -> bool {
    match a.created_at.cmp(&b.created_at) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => a.id < b.id,
    }
}

impl Priority<Order> for BidPriority {
    fn precedes(a: &Order, b: &Order) -> bool {
        match a.price.cmp(&b.price) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => earlier(a, b),
        }
    }
}

impl Priority<Order> for AskPriority {
    fn precedes(a: &Order, b: &Order) -> bool {
        match a.price.cmp(&b.price) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => earlier(a, b),
        }
    }
}

/// Resting buy orders.
pub type BidQueue = PriorityQueue<Order, BidPriority>;
/// Resting sell orders.
pub type AskQueue = PriorityQueue<Order, AskPriority>;

/// An array-backed binary heap whose head is the highest-priority item
/// according to `P`.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P> {
    items: Vec<T>,
    _priority: PhantomData<P>,
}

impl<T, P: Priority<T>> PriorityQueue<T, P> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            _priority: PhantomData,
        }
    }

    /// Insert an item. O(log n).
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// The highest-priority item, without removing it. O(1).
    #[must_use]
    pub fn peek_best(&self) -> Option<&T> {
        self.items.first()
    }

    /// Mutable access to the head.
    ///
    /// Callers must not change any field `P` orders by; the heap is not
    /// restored afterwards.
    pub fn peek_best_mut(&mut self) -> Option<&mut T> {
        self.items.first_mut()
    }

    /// Remove and return the highest-priority item. O(log n).
    pub fn pop_best(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let best = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Some(best)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All queued items in unspecified (heap) order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Consume the queue, yielding items best first.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.items.len());
        while let Some(item) = self.pop_best() {
            out.push(item);
        }
        out
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !P::precedes(&self.items[idx], &self.items[parent]) {
                break;
            }
            self.items.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut best = idx;
            if left < len && P::precedes(&self.items[left], &self.items[best]) {
                best = left;
            }
            if right < len && P::precedes(&self.items[right], &self.items[best]) {
                best = right;
            }
            if best == idx {
                break;
            }
            self.items.swap(idx, best);
            idx = best;
        }
    }
}

impl<T, P: Priority<T>> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
