use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::TradingError;

/// Identity check consulted once at instrument construction time.
/// Implemented by the host against its listing database; trading
/// operations never call it again.
pub trait InstrumentValidator {
    fn is_valid(&self, exchange: &str, symbol: &str) -> bool;
}

/// Tradable identity: an exchange code plus a symbol.
/// Equality and hashing are structural, so two instruments with the
/// same exchange and symbol are the same lookup key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Instrument {
    pub exchange: String,
    pub symbol: String,
}

impl Instrument {
    pub fn new(exchange: impl Into<String>, symbol: impl Into<String>) -> Self {
        Instrument {
            exchange: exchange.into(),
            symbol: symbol.into(),
        }
    }

    /// Construct an instrument after confirming tradability with the
    /// injected validator. A failed check is fatal at construction time.
    pub fn checked(
        exchange: impl Into<String>,
        symbol: impl Into<String>,
        validator: &dyn InstrumentValidator,
    ) -> Result<Self, TradingError> {
        let exchange = exchange.into();
        let symbol = symbol.into();

        if !validator.is_valid(&exchange, &symbol) {
            return Err(TradingError::InvalidInstrument(format!(
                "{}:{}",
                exchange, symbol
            )));
        }

        Ok(Instrument { exchange, symbol })
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.exchange, self.symbol)
    }
}

/// Validator backed by an explicit set of known listings.
#[derive(Debug, Clone, Default)]
pub struct ListedInstruments {
    listings: HashSet<(String, String)>,
}

impl ListedInstruments {
    pub fn new() -> Self {
        ListedInstruments {
            listings: HashSet::new(),
        }
    }

    pub fn add_listing(&mut self, exchange: impl Into<String>, symbol: impl Into<String>) {
        self.listings.insert((exchange.into(), symbol.into()));
    }
}

impl InstrumentValidator for ListedInstruments {
    fn is_valid(&self, exchange: &str, symbol: &str) -> bool {
        self.listings
            .contains(&(exchange.to_string(), symbol.to_string()))
    }
}

/// Permissive validator for tests and demo runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl InstrumentValidator for AcceptAll {
    fn is_valid(&self, _exchange: &str, _symbol: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_equality_and_hashing() {
        let a = Instrument::new("KRX", "005930");
        let b = Instrument::new("KRX", "005930");
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn checked_construction_consults_validator() {
        let mut listings = ListedInstruments::new();
        listings.add_listing("NYSE", "IBM");

        assert!(Instrument::checked("NYSE", "IBM", &listings).is_ok());

        let err = Instrument::checked("NYSE", "NOPE", &listings).unwrap_err();
        assert!(matches!(err, TradingError::InvalidInstrument(_)));
    }
}
