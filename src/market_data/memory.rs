use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::models::instrument::Instrument;

use super::provider::{MarketDataProvider, MarketField};

/// In-memory market data, filled programmatically. Used by tests and as
/// a generated data source for demo runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryDataProvider {
    prices: HashMap<(Instrument, NaiveDate), f64>,
    dividends: HashMap<(Instrument, NaiveDate), f64>,
}

impl MemoryDataProvider {
    pub fn new() -> Self {
        MemoryDataProvider::default()
    }

    pub fn set_price(&mut self, instrument: &Instrument, date: NaiveDate, price: f64) {
        self.prices.insert((instrument.clone(), date), price);
    }

    pub fn set_dividend(&mut self, instrument: &Instrument, date: NaiveDate, amount: f64) {
        self.dividends.insert((instrument.clone(), date), amount);
    }

    /// Fill a daily random-walk price series for the instrument,
    /// starting at `start_price` and drifting at most 2% per day.
    pub fn fill_random_walk(
        &mut self,
        instrument: &Instrument,
        start_date: NaiveDate,
        days: u32,
        start_price: f64,
    ) {
        let mut rng = rand::thread_rng();
        let mut last_price = start_price;

        for i in 0..days {
            let date = start_date + Duration::days(i as i64);
            let change = rng.gen_range(-200.0..200.0) / 10000.0;
            last_price = (last_price * (1.0 + change)).max(0.01);
            self.set_price(instrument, date, last_price);
        }
    }
}

impl MarketDataProvider for MemoryDataProvider {
    fn query(&self, date: NaiveDate, instrument: &Instrument, field: MarketField) -> Option<f64> {
        let key = (instrument.clone(), date);
        match field {
            MarketField::Price => self.prices.get(&key).copied(),
            MarketField::DividendAmount => self.dividends.get(&key).copied(),
        }
    }
}
