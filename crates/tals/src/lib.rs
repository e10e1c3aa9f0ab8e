//! TALS - Trading Account Ledger Simulator
//!
//! A single-account trading ledger: cash balance, share holdings, an
//! append-only transaction log and oracle-priced valuation.
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use rust_decimal::Decimal;
//! use tals::ledger::Account;
//! use tals::models::Symbol;
//! use tals::pricing::FixedPriceOracle;
//!
//! # async fn demo() -> Result<(), tals::ledger::LedgerError> {
//! let oracle = Arc::new(FixedPriceOracle::default());
//! let mut account = Account::open("acc1", Decimal::from(5000), oracle)?;
//! account.buy_shares(&Symbol::new("AAPL"), 10).await?;
//! println!("portfolio: {}", account.portfolio_value().await?);
//! # Ok(())
//! # }
//! ```

pub use tals_ledger as ledger;
pub use tals_models as models;
pub use tals_pricing as pricing;

use std::sync::Arc;
use std::time::Duration;

use tals_ledger::{Account, LedgerError};
use tals_models::report::{AccountReport, REPORT_SCHEMA_VERSION};
use tals_models::{Operation, SessionScript, TalsConfig};
use tals_pricing::{CachedOracle, FixedPriceOracle, PriceOracle};
use tracing::info;

/// Build the configured price oracle: the fixed quote table behind the
/// caching/timeout decorator.
pub fn build_oracle(config: &TalsConfig) -> Arc<dyn PriceOracle> {
    let backend = Arc::new(FixedPriceOracle::from_config(&config.pricing.quotes));
    Arc::new(CachedOracle::new(
        backend,
        config.pricing.cache_max_capacity,
        Duration::from_secs(config.pricing.cache_ttl_seconds),
        Duration::from_secs(config.pricing.lookup_timeout_seconds),
    ))
}

/// Run a session script against a fresh account and report the final state.
///
/// Operations apply in order; the first rejected operation aborts the run
/// with its typed error.
pub async fn run_script(
    script: &SessionScript,
    oracle: Arc<dyn PriceOracle>,
) -> Result<AccountReport, LedgerError> {
    let account_id = script
        .account_id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let mut account = Account::open(account_id, script.initial_deposit, oracle)?;

    for operation in &script.operations {
        match operation {
            Operation::Deposit { amount } => account.deposit(*amount)?,
            Operation::Withdraw { amount } => account.withdraw(*amount)?,
            Operation::Buy { symbol, quantity } => account.buy_shares(symbol, *quantity).await?,
            Operation::Sell { symbol, quantity } => account.sell_shares(symbol, *quantity).await?,
        }
    }

    let report = AccountReport {
        schema_version: REPORT_SCHEMA_VERSION,
        account_id: account.account_id().to_string(),
        generated_at: chrono::Utc::now(),
        balance: account.balance(),
        holdings: account.holdings_snapshot(),
        portfolio_value: account.portfolio_value().await?,
        profit_loss: account.profit_loss().await?,
        transactions: account.transaction_history(),
    };

    info!(
        account = %report.account_id,
        operations = script.operations.len(),
        balance = %report.balance,
        "Session complete"
    );
    Ok(report)
}
