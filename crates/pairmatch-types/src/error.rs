//! Error types for the PairMatch matching core.
//!
//! All errors use the `PM_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Trading pair errors
//! - 2xx: Request validation errors
//! - 9xx: General errors

use std::fmt;

use thiserror::Error;

use crate::TradingPair;

/// A single field-level problem with a caller's request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    InvalidUserId,
    InvalidPrice,
    InvalidQuantity,
    InvalidSide,
}

impl ValidationIssue {
    /// Stable machine-readable code for adapters.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUserId => "INVALID_USER_ID",
            Self::InvalidPrice => "INVALID_PRICE",
            Self::InvalidQuantity => "INVALID_QUANTITY",
            Self::InvalidSide => "INVALID_SIDE",
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidUserId => "User ID must be greater than 0",
            Self::InvalidPrice => "Price must be greater than 0",
            Self::InvalidQuantity => "Quantity must be greater than 0",
            Self::InvalidSide => "Side must be 'buy' or 'sell'",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

/// Central error enum for all PairMatch operations.
#[derive(Debug, Error)]
pub enum PairmatchError {
    // =================================================================
    // Trading Pair Errors (1xx)
    // =================================================================
    /// The operation referenced a pair that was never created.
    #[error("PM_ERR_100: Trading pair not found: {0}")]
    PairNotFound(TradingPair),

    /// A pair symbol could not be built or parsed.
    #[error("PM_ERR_101: Invalid trading pair: {reason}")]
    InvalidPair { reason: String },

    // =================================================================
    // Validation Errors (2xx)
    // =================================================================
    /// One or more request fields failed validation. Nothing was mutated.
    #[error("PM_ERR_200: Validation failed: {}", format_issues(.0))]
    Validation(Vec<ValidationIssue>),

    /// Side string was neither `buy` nor `sell`.
    #[error("PM_ERR_201: Invalid side: {0:?}")]
    InvalidSide(String),

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Configuration error (bad JSON, zero depth, blank market, ...).
    #[error("PM_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

impl PairmatchError {
    /// Stable machine-readable code for adapters (status mapping, JSON bodies).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::PairNotFound(_) => "PAIR_NOT_FOUND",
            Self::InvalidPair { .. } => "INVALID_PAIR",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::InvalidSide(_) => "INVALID_SIDE",
            Self::Configuration(_) => "CONFIGURATION",
        }
    }

    /// `true` for errors caused by caller input rather than engine state.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidSide(_) | Self::InvalidPair { .. }
        )
    }
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ValidationIssue::code)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, PairmatchError>;
