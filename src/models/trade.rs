use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::instrument::Instrument;
use crate::models::order::OrderSide;

/// Record of one executed fill, kept by the executor as an audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub instrument: Instrument,
    pub side: OrderSide,
    pub quantity: f64,
    pub price: f64,
    pub fee: f64,
    pub date: NaiveDate,
}

impl Trade {
    pub fn new(
        instrument: Instrument,
        side: OrderSide,
        quantity: f64,
        price: f64,
        fee: f64,
        date: NaiveDate,
    ) -> Self {
        Trade {
            id: Uuid::new_v4().to_string(),
            instrument,
            side,
            quantity,
            price,
            fee,
            date,
        }
    }

    pub fn value(&self) -> f64 {
        self.price * self.quantity
    }
}
