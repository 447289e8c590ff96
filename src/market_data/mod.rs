pub mod csv_provider;
pub mod memory;
pub mod provider;

pub use csv_provider::CsvDataProvider;
pub use memory::MemoryDataProvider;
pub use provider::{MarketDataProvider, MarketField};
