use thiserror::Error;

#[derive(Error, Debug)]
pub enum PriceError {
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Price lookup timed out after {0} seconds")]
    Timeout(u64),
}
