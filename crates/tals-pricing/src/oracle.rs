use std::collections::BTreeMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tals_models::Symbol;

use crate::error::PriceError;

/// Price lookup contract. Mockable for testing; a live market-data backend
/// implements this without the ledger knowing the difference.
#[async_trait]
pub trait PriceOracle: Send + Sync {
    /// Current unit price for `symbol`. Fails with `UnknownSymbol` for any
    /// symbol this oracle does not recognize.
    async fn unit_price(&self, symbol: &Symbol) -> Result<Decimal, PriceError>;
}

/// An oracle serving a static quote table.
pub struct FixedPriceOracle {
    quotes: BTreeMap<Symbol, Decimal>,
}

impl FixedPriceOracle {
    pub fn new(quotes: BTreeMap<Symbol, Decimal>) -> Self {
        Self { quotes }
    }

    /// Build from a config-style table keyed by raw strings.
    pub fn from_config(quotes: &BTreeMap<String, Decimal>) -> Self {
        Self {
            quotes: quotes
                .iter()
                .map(|(symbol, price)| (Symbol::new(symbol.clone()), *price))
                .collect(),
        }
    }
}

impl Default for FixedPriceOracle {
    /// The reference table: AAPL, TSLA and GOOGL at fixed prices.
    fn default() -> Self {
        Self::from_config(&tals_models::PricingConfig::default().quotes)
    }
}

#[async_trait]
impl PriceOracle for FixedPriceOracle {
    async fn unit_price(&self, symbol: &Symbol) -> Result<Decimal, PriceError> {
        self.quotes
            .get(symbol)
            .copied()
            .ok_or_else(|| PriceError::UnknownSymbol(symbol.to_string()))
    }
}
