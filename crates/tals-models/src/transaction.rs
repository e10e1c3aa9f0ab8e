use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    Buy,
    Sell,
}

/// One balance- or holdings-affecting event, immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub timestamp: DateTime<Utc>,
    pub kind: TransactionKind,
    /// Present only for buy/sell.
    pub symbol: Option<Symbol>,
    /// Present only for buy/sell.
    pub quantity: Option<u64>,
    /// Per-share execution price for buy/sell; cash amount moved for
    /// deposit/withdraw.
    pub price: Decimal,
}

impl Transaction {
    /// A deposit or withdrawal of `amount` cash.
    pub fn cash(kind: TransactionKind, amount: Decimal, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            kind,
            symbol: None,
            quantity: None,
            price: amount,
        }
    }

    /// A buy or sell of `quantity` shares at `unit_price` each.
    pub fn trade(
        kind: TransactionKind,
        symbol: Symbol,
        quantity: u64,
        unit_price: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            kind,
            symbol: Some(symbol),
            quantity: Some(quantity),
            price: unit_price,
        }
    }
}
