pub mod cached;
pub mod error;
pub mod memory;
pub mod oracle;

pub use cached::CachedOracle;
pub use error::PriceError;
pub use oracle::{FixedPriceOracle, PriceOracle};
