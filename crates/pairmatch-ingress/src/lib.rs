//! # pairmatch-ingress
//!
//! **Caller-side service layer**: request validation, pair symbol handling,
//! depth defaults, and the four-operation contract over a shared
//! [`MatchingEngine`](pairmatch_matchcore::MatchingEngine).
//!
//! ## Order Flow
//!
//! ```text
//! PlaceOrderRequest → validate_order_request() → ValidatedOrder
//!     → MatchingEngine.place_order() → Placement { order, trades }
//! ```
//!
//! Nothing reaches a book unless every field check passes.

pub mod service;
pub mod validation;

pub use service::ExchangeService;
pub use validation::{PlaceOrderRequest, ValidatedOrder, validate_order_request};
