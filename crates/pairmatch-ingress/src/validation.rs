//! Request validation: the hard gate in front of the matching engine.
//!
//! Every `PlaceOrder` request passes through [`validate_order_request`]
//! before it can touch a book. Field checks never short-circuit: the caller
//! gets every violation in one [`PairmatchError::Validation`], in a fixed
//! order (user, price, quantity, side).

use pairmatch_types::{OrderSide, PairmatchError, Result, TradingPair, UserId, ValidationIssue};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A raw placement request as it arrives from a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    pub user_id: i64,
    /// Pair symbol, `"BASE/QUOTE"`.
    pub pair: String,
    /// Exactly `"buy"` or `"sell"`.
    pub side: String,
    pub price: Decimal,
    pub quantity: Decimal,
}

impl PlaceOrderRequest {
    pub fn new(
        user_id: i64,
        pair: impl Into<String>,
        side: impl Into<String>,
        price: Decimal,
        quantity: Decimal,
    ) -> Self {
        Self {
            user_id,
            pair: pair.into(),
            side: side.into(),
            price,
            quantity,
        }
    }
}

/// A request that passed every field check, with typed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOrder {
    pub user_id: UserId,
    pub pair: TradingPair,
    pub side: OrderSide,
    pub price: Decimal,
    pub quantity: Decimal,
}

/// Check every field of `request`.
///
/// # Errors
/// [`PairmatchError::Validation`] listing all field violations, or
/// [`PairmatchError::InvalidPair`] if the fields are fine but the pair
/// symbol is malformed.
pub fn validate_order_request(request: &PlaceOrderRequest) -> Result<ValidatedOrder> {
    let mut issues = Vec::new();

    let user_id = u64::try_from(request.user_id).ok().filter(|id| *id > 0);
    if user_id.is_none() {
        issues.push(ValidationIssue::InvalidUserId);
    }
    if request.price <= Decimal::ZERO {
        issues.push(ValidationIssue::InvalidPrice);
    }
    if request.quantity <= Decimal::ZERO {
        issues.push(ValidationIssue::InvalidQuantity);
    }
    let side = request.side.parse::<OrderSide>().ok();
    if side.is_none() {
        issues.push(ValidationIssue::InvalidSide);
    }

    let (Some(user_id), Some(side), true) = (user_id, side, issues.is_empty()) else {
        tracing::warn!(
            user_id = request.user_id,
            pair = %request.pair,
            issues = %issues.iter().map(ValidationIssue::code).collect::<Vec<_>>().join(","),
            "Order request rejected"
        );
        return Err(PairmatchError::Validation(issues));
    };

    let pair = request.pair.parse::<TradingPair>().inspect_err(|e| {
        tracing::warn!(user_id = request.user_id, pair = %request.pair, error = %e, "Order request rejected");
    })?;

    Ok(ValidatedOrder {
        user_id: UserId(user_id),
        pair,
        side,
        price: request.price,
        quantity: request.quantity,
    })
}
