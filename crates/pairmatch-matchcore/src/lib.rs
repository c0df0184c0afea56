//! # pairmatch-matchcore
//!
//! **Continuous limit order matching for PairMatch.**
//!
//! Every trading pair has its own [`OrderBook`] holding two price-time
//! priority queues. An incoming order is crossed against the opposite side
//! until it is exhausted or no longer crosses; any remainder rests.
//!
//! - **Price-time priority**: best price first, earliest arrival within a price
//! - **Maker pricing**: every fill executes at the resting order's price
//! - **Atomic placements**: one exclusive book lock per placement
//! - **Pair sharding**: different pairs match in parallel

pub mod engine;
pub mod matcher;
pub mod orderbook;
pub mod priority_queue;

pub use engine::{MatchingEngine, Placement, SharedBook};
pub use matcher::{CrossingOutcome, cross_incoming};
pub use orderbook::OrderBook;
pub use priority_queue::{AskPriority, AskQueue, BidPriority, BidQueue, Priority, PriorityQueue};
