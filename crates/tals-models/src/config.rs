use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level configuration for TALS.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TalsConfig {
    pub pricing: PricingConfig,
}

/// Configuration for the pricing layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Quote table for the fixed oracle: symbol -> unit price.
    pub quotes: BTreeMap<String, Decimal>,
    /// Upper bound on a single backend price lookup, in seconds.
    pub lookup_timeout_seconds: u64,
    /// Maximum number of entries in the in-memory quote cache.
    pub cache_max_capacity: u64,
    /// How long a cached quote stays valid, in seconds.
    pub cache_ttl_seconds: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let mut quotes = BTreeMap::new();
        quotes.insert("AAPL".to_string(), Decimal::new(1700, 1));
        quotes.insert("TSLA".to_string(), Decimal::new(2500, 1));
        quotes.insert("GOOGL".to_string(), Decimal::new(27000, 1));
        Self {
            quotes,
            lookup_timeout_seconds: 5,
            cache_max_capacity: 1_024,
            cache_ttl_seconds: 2,
        }
    }
}
