use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tals_models::Symbol;
use tracing::debug;

use crate::error::PriceError;
use crate::memory::QuoteCache;
use crate::oracle::PriceOracle;

/// Read-through oracle decorator: quote cache in front, bounded lookups behind.
///
/// A real backend is network-bound, so each lookup is capped at
/// `lookup_timeout`; an overrun surfaces as `PriceError::Timeout` and the
/// caller decides whether to retry. Only successful quotes are cached -
/// an unknown symbol added to the backend later is never masked by a stale
/// negative entry.
pub struct CachedOracle {
    backend: Arc<dyn PriceOracle>,
    memory: QuoteCache,
    lookup_timeout: Duration,
}

impl CachedOracle {
    pub fn new(
        backend: Arc<dyn PriceOracle>,
        max_capacity: u64,
        ttl: Duration,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            backend,
            memory: QuoteCache::new(max_capacity, ttl),
            lookup_timeout,
        }
    }

    /// Number of quotes currently held in the cache.
    pub fn cached_quote_count(&self) -> u64 {
        self.memory.entry_count()
    }
}

#[async_trait]
impl PriceOracle for CachedOracle {
    async fn unit_price(&self, symbol: &Symbol) -> Result<Decimal, PriceError> {
        if let Some(price) = self.memory.get(symbol).await {
            debug!(symbol = %symbol, price = %price, "Quote served from cache");
            return Ok(price);
        }

        let price = tokio::time::timeout(self.lookup_timeout, self.backend.unit_price(symbol))
            .await
            .map_err(|_| PriceError::Timeout(self.lookup_timeout.as_secs()))??;

        self.memory.insert(symbol.clone(), price).await;
        debug!(symbol = %symbol, price = %price, "Quote fetched from backend");
        Ok(price)
    }
}
