use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use chrono::NaiveDate;

use crate::market_data::provider::{MarketDataProvider, MarketField};
use crate::models::instrument::Instrument;
use crate::utils::math::round_to_cents;

/// Holdings mapping plus a liquid capital balance for one portfolio.
///
/// Invariants:
/// - `holdings` never contains a key whose quantity is <= 0; a position
///   that reaches exactly zero is removed.
/// - `capital` is rounded to 2 decimal places after every mutation.
///
/// The ledger is created once and mutated exclusively by the order
/// executor (buy/sell/dividend); the mutators are crate-private.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    holdings: HashMap<Instrument, f64>,
    capital: f64,
}

impl Ledger {
    pub fn new(holdings: HashMap<Instrument, f64>, capital: f64) -> Self {
        // Non-positive seed entries would violate the holdings invariant
        let holdings = holdings.into_iter().filter(|(_, q)| *q > 0.0).collect();

        Ledger {
            holdings,
            capital: round_to_cents(capital),
        }
    }

    pub fn with_capital(capital: f64) -> Self {
        Ledger::new(HashMap::new(), capital)
    }

    pub fn capital(&self) -> f64 {
        self.capital
    }

    /// Quantity held for the instrument, 0.0 when absent.
    pub fn quantity(&self, instrument: &Instrument) -> f64 {
        *self.holdings.get(instrument).unwrap_or(&0.0)
    }

    pub fn holds(&self, instrument: &Instrument) -> bool {
        self.holdings.contains_key(instrument)
    }

    pub fn holdings(&self) -> std::collections::hash_map::Iter<'_, Instrument, f64> {
        self.holdings.iter()
    }

    pub fn position_count(&self) -> usize {
        self.holdings.len()
    }

    /// Mark-to-market value of all held positions at the given date.
    /// Positions without a price for the date are valued at zero.
    pub fn position_value(&self, provider: &dyn MarketDataProvider, date: NaiveDate) -> f64 {
        let mut value = 0.0;
        for (instrument, quantity) in &self.holdings {
            if let Some(price) = provider.query(date, instrument, MarketField::Price) {
                value += quantity * price;
            }
        }
        value
    }

    pub(crate) fn credit_capital(&mut self, amount: f64) {
        self.capital = round_to_cents(self.capital + amount);
    }

    pub(crate) fn debit_capital(&mut self, amount: f64) {
        self.credit_capital(-amount);
    }

    pub(crate) fn add_shares(&mut self, instrument: &Instrument, quantity: f64) {
        if quantity <= 0.0 {
            return;
        }
        *self.holdings.entry(instrument.clone()).or_insert(0.0) += quantity;
    }

    pub(crate) fn remove_shares(&mut self, instrument: &Instrument, quantity: f64) {
        if let Some(held) = self.holdings.get_mut(instrument) {
            *held -= quantity;
            if *held <= 0.0 {
                self.holdings.remove(instrument);
            }
        }
    }
}
