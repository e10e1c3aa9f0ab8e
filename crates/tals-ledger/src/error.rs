use rust_decimal::Decimal;
use tals_models::Symbol;
use tals_pricing::PriceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    #[error("Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: Decimal, available: Decimal },

    #[error("Insufficient shares: requested {requested} {symbol}, holding {held}")]
    InsufficientShares {
        symbol: Symbol,
        requested: u64,
        held: u64,
    },

    #[error("Price lookup failed: {0}")]
    Price(#[from] PriceError),
}
