use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;
use crate::transaction::Transaction;

pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Final account state after a session script has run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountReport {
    pub schema_version: u32,
    pub account_id: String,
    pub generated_at: DateTime<Utc>,
    pub balance: Decimal,
    pub holdings: BTreeMap<Symbol, u64>,
    /// Cash balance plus holdings marked at current oracle prices.
    pub portfolio_value: Decimal,
    /// Portfolio value relative to the account's opening deposit.
    pub profit_loss: Decimal,
    pub transactions: Vec<Transaction>,
}
