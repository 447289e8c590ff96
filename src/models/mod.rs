pub mod fill;
pub mod instrument;
pub mod ledger;
pub mod order;
pub mod trade;

pub use fill::Fill;
pub use instrument::{AcceptAll, Instrument, InstrumentValidator, ListedInstruments};
pub use ledger::Ledger;
pub use order::{OrderBatch, OrderSide};
pub use trade::Trade;
