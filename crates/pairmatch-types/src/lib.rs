//! # pairmatch-types
//!
//! Shared types, errors, and configuration for the **PairMatch** matching core.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`OrderId`], [`TradeId`], [`UserId`], [`TradingPair`]
//! - **Order model**: [`Order`], [`OrderSide`], [`OrderStatus`]
//! - **Trade model**: [`Trade`]
//! - **Depth view**: [`BookDepth`], [`DepthLevel`]
//! - **Configuration**: [`EngineConfig`], [`MarketConfig`]
//! - **Errors**: [`PairmatchError`] with `PM_ERR_` prefix codes, [`ValidationIssue`]
//! - **Constants**: defaults and limits

pub mod config;
pub mod constants;
pub mod depth;
pub mod error;
pub mod ids;
pub mod order;
pub mod trade;

// Re-export all primary types at crate root for ergonomic imports:
//   use pairmatch_types::{Order, OrderSide, Trade, ...};

pub use config::*;
pub use depth::*;
pub use error::*;
pub use ids::*;
pub use order::*;
pub use trade::*;

// Constants are accessed via `pairmatch_types::constants::FOO`
// (not re-exported to avoid name collisions).
