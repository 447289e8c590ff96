pub mod executor;

pub use executor::{BatchFeePolicy, OrderExecutor};
