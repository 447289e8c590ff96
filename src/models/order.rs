use serde::{Deserialize, Serialize};

use crate::models::instrument::Instrument;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderSide {
    Buy,
    Sell,
}

/// A batched multi-instrument order request.
///
/// Legs settle in insertion order, which matters for buys: capital is a
/// shared, depletable resource across legs, so earlier legs are filled
/// preferentially. A repeated instrument settles once per inserted leg.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderBatch {
    legs: Vec<(Instrument, f64)>,
}

impl OrderBatch {
    pub fn new() -> Self {
        OrderBatch { legs: Vec::new() }
    }

    pub fn leg(mut self, instrument: Instrument, quantity: f64) -> Self {
        self.legs.push((instrument, quantity));
        self
    }

    pub fn add_leg(&mut self, instrument: Instrument, quantity: f64) -> &mut Self {
        self.legs.push((instrument, quantity));
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (Instrument, f64)> {
        self.legs.iter()
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}
