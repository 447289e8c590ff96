use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::TradingError;
use crate::models::instrument::Instrument;

use super::provider::{MarketDataProvider, MarketField};

#[derive(Debug, Clone, Copy)]
struct DailyRecord {
    price: f64,
    dividend: Option<f64>,
}

/// Historical per-date price and dividend data loaded from a CSV file.
///
/// Expected columns: `date,exchange,symbol,price,dividend` with an empty
/// dividend field meaning "no dividend record for this date".
pub struct CsvDataProvider {
    records: HashMap<Instrument, BTreeMap<NaiveDate, DailyRecord>>,
}

impl CsvDataProvider {
    pub fn from_path(path: PathBuf, delimiter: char) -> Result<Self, TradingError> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(delimiter as u8)
            .from_path(&path)
            .map_err(|e| TradingError::ParseError(format!("{}: {}", path.display(), e)))?;

        let mut records: HashMap<Instrument, BTreeMap<NaiveDate, DailyRecord>> = HashMap::new();
        for rec in rdr.deserialize() {
            let row: CsvRow = rec.map_err(|e| TradingError::ParseError(e.to_string()))?;
            let instrument = Instrument::new(row.exchange, row.symbol);
            records.entry(instrument).or_default().insert(
                row.date,
                DailyRecord {
                    price: row.price,
                    dividend: row.dividend,
                },
            );
        }

        Ok(Self { records })
    }

    pub fn instruments(&self) -> Vec<Instrument> {
        self.records.keys().cloned().collect()
    }
}

impl MarketDataProvider for CsvDataProvider {
    fn query(&self, date: NaiveDate, instrument: &Instrument, field: MarketField) -> Option<f64> {
        let record = self.records.get(instrument)?.get(&date)?;
        match field {
            MarketField::Price => Some(record.price),
            MarketField::DividendAmount => record.dividend,
        }
    }
}

#[derive(serde::Deserialize)]
struct CsvRow {
    date: NaiveDate,
    exchange: String,
    symbol: String,
    price: f64,
    dividend: Option<f64>,
}
