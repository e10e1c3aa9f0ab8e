use std::time::Duration;

use moka::future::Cache;
use rust_decimal::Decimal;
use tals_models::Symbol;

/// In-memory quote cache backed by moka.
///
/// Holds recently fetched unit prices so a valuation pass does not hit the
/// backend once per held symbol. Entries are automatically evicted after TTL.
pub struct QuoteCache {
    inner: Cache<Symbol, Decimal>,
}

impl QuoteCache {
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub async fn get(&self, symbol: &Symbol) -> Option<Decimal> {
        self.inner.get(symbol).await
    }

    pub async fn insert(&self, symbol: Symbol, price: Decimal) {
        self.inner.insert(symbol, price).await;
    }

    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}
