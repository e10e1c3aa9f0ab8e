use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

pub const SCRIPT_SCHEMA_VERSION: u32 = 1;

/// A batch of account operations applied to a freshly created account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionScript {
    pub schema_version: u32,
    /// Account identifier. A fresh UUID is generated when absent.
    pub account_id: Option<String>,
    /// Opening deposit. Zero is allowed and is still recorded.
    pub initial_deposit: Decimal,
    pub operations: Vec<Operation>,
}

/// A single account operation.
///
/// Quantities are signed so that non-positive requests reach the ledger and
/// are rejected there with a typed error instead of failing to parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Deposit { amount: Decimal },
    Withdraw { amount: Decimal },
    Buy { symbol: Symbol, quantity: i64 },
    Sell { symbol: Symbol, quantity: i64 },
}
