use serde::{Deserialize, Serialize};

/// Outcome of a single order leg: the quantity actually transacted and
/// the unit price it transacted at.
///
/// `price == None` means the price lookup came back absent for the
/// requested date, so no transaction occurred. A leg that priced but
/// clamped to zero keeps the known price with `quantity == 0.0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Fill {
    pub quantity: f64,
    pub price: Option<f64>,
}

impl Fill {
    pub fn executed(quantity: f64, price: f64) -> Self {
        Fill {
            quantity,
            price: Some(price),
        }
    }

    /// Sentinel for "no transaction occurred": no price was available.
    pub fn none() -> Self {
        Fill {
            quantity: 0.0,
            price: None,
        }
    }

    pub fn is_filled(&self) -> bool {
        self.quantity > 0.0
    }

    pub fn notional(&self) -> f64 {
        self.price.map(|p| p * self.quantity).unwrap_or(0.0)
    }
}
