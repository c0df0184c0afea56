//! Configuration types for the matching core and its ingress layer.

use serde::{Deserialize, Serialize};

use crate::{PairmatchError, Result, TradingPair, constants};

/// Top-level engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Depth levels per side when the caller does not ask for a specific number.
    pub default_depth: usize,
    /// Requested depth is clamped to this many levels per side.
    pub max_depth: usize,
    /// Initial capacity of each side's priority queue.
    pub queue_capacity: usize,
    /// Markets created at startup.
    pub markets: Vec<MarketConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_depth: constants::DEFAULT_DEPTH,
            max_depth: constants::MAX_DEPTH,
            queue_capacity: constants::DEFAULT_QUEUE_CAPACITY,
            markets: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| PairmatchError::Configuration(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configurations the engine cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.default_depth == 0 || self.max_depth == 0 {
            return Err(PairmatchError::Configuration(
                "depth limits must be positive".to_string(),
            ));
        }
        if self.default_depth > self.max_depth {
            return Err(PairmatchError::Configuration(format!(
                "default_depth {} exceeds max_depth {}",
                self.default_depth, self.max_depth
            )));
        }
        for market in &self.markets {
            market.pair()?;
        }
        Ok(())
    }

    /// Resolve a caller-supplied depth: non-positive or missing means default,
    /// anything larger than `max_depth` is clamped.
    #[must_use]
    pub fn effective_depth(&self, requested: Option<i64>) -> usize {
        match requested.and_then(|d| usize::try_from(d).ok()) {
            Some(d) if d > 0 => d.min(self.max_depth),
            _ => self.default_depth,
        }
    }
}

/// A market to create at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Base asset (e.g., "BTC").
    pub base: String,
    /// Quote asset (e.g., "USDT").
    pub quote: String,
}

impl MarketConfig {
    #[must_use]
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }

    /// The validated trading pair for this market.
    pub fn pair(&self) -> Result<TradingPair> {
        TradingPair::try_new(&self.base, &self.quote)
            .map_err(|e| PairmatchError::Configuration(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.default_depth, 10);
        assert!(cfg.markets.is_empty());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn from_json_fills_defaults() {
        let cfg = EngineConfig::from_json(r#"{"markets":[{"base":"BTC","quote":"USDT"}]}"#)
            .unwrap();
        assert_eq!(cfg.default_depth, constants::DEFAULT_DEPTH);
        assert_eq!(cfg.markets.len(), 1);
        assert_eq!(cfg.markets[0].pair().unwrap().symbol(), "BTC/USDT");
    }

    #[test]
    fn from_json_rejects_garbage() {
        let err = EngineConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, PairmatchError::Configuration(_)));
    }

    #[test]
    fn validate_rejects_zero_depth_and_blank_market() {
        let cfg = EngineConfig {
            default_depth: 0,
            ..EngineConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = EngineConfig {
            markets: vec![MarketConfig::new("BTC", " ")],
            ..EngineConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(PairmatchError::Configuration(_))));
    }

    #[test]
    fn effective_depth_rules() {
        let cfg = EngineConfig {
            max_depth: 50,
            ..EngineConfig::default()
        };
        assert_eq!(cfg.effective_depth(None), 10);
        assert_eq!(cfg.effective_depth(Some(0)), 10);
        assert_eq!(cfg.effective_depth(Some(-3)), 10);
        assert_eq!(cfg.effective_depth(Some(5)), 5);
        assert_eq!(cfg.effective_depth(Some(1000)), 50);
    }
}
