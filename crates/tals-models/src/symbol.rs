use std::fmt;

use serde::{Deserialize, Serialize};

/// A ticker symbol. Keys holdings maps and the quote cache.
///
/// Symbols are compared exactly as given; no case normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_string() {
        let symbol = Symbol::new("AAPL");
        assert_eq!(serde_json::to_string(&symbol).unwrap(), "\"AAPL\"");

        let parsed: Symbol = serde_json::from_str("\"AAPL\"").unwrap();
        assert_eq!(parsed, symbol);
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Symbol::new("AAPL") < Symbol::new("TSLA"));
    }

    #[test]
    fn no_case_normalization() {
        assert_ne!(Symbol::new("aapl"), Symbol::new("AAPL"));
    }
}
