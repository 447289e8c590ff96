use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::instrument::Instrument;

/// Field of a market-data record that can be queried for a date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MarketField {
    Price,
    DividendAmount,
}

/// 시장 데이터 제공자 인터페이스
///
/// Point-in-time lookups keyed by a calendar date. `None` is the single
/// absence marker: callers cannot (and need not) distinguish "instrument
/// unknown" from "no data for this date".
pub trait MarketDataProvider {
    fn query(&self, date: NaiveDate, instrument: &Instrument, field: MarketField) -> Option<f64>;
}
