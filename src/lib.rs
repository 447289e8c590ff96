//! 포트폴리오 원장 시뮬레이션 라이브러리
//!
//! 과거 시세/배당 조회를 기반으로 매수·매도 주문 실행과 배당 반영을 시뮬레이션합니다.

pub mod config;
pub mod error;
pub mod execution;
pub mod market_data;
pub mod models;
pub mod utils;

// 핵심 타입 재노출
pub use crate::error::TradingError;
pub use crate::execution::{BatchFeePolicy, OrderExecutor};
pub use crate::market_data::{CsvDataProvider, MarketDataProvider, MarketField, MemoryDataProvider};
pub use crate::models::fill::Fill;
pub use crate::models::instrument::{AcceptAll, Instrument, InstrumentValidator, ListedInstruments};
pub use crate::models::ledger::Ledger;
pub use crate::models::order::{OrderBatch, OrderSide};
pub use crate::models::trade::Trade;

/// 버전 정보
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 결과 타입 별칭
pub type Result<T> = std::result::Result<T, TradingError>;
