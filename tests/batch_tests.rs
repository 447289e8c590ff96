/**
* filename : batch_tests
* author : HAMA
* date: 2025. 8. 25.
* description:
**/

use std::collections::HashMap;
use chrono::NaiveDate;
use xFolio::execution::{BatchFeePolicy, OrderExecutor};
use xFolio::market_data::MemoryDataProvider;
use xFolio::models::fill::Fill;
use xFolio::models::instrument::Instrument;
use xFolio::models::ledger::Ledger;
use xFolio::models::order::OrderBatch;

fn trade_date() -> NaiveDate {
  NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

fn two_stocks() -> (Instrument, Instrument) {
  (Instrument::new("KRX", "005930"), Instrument::new("KRX", "000660"))
}

#[test]
fn earlier_legs_are_filled_preferentially() {
  // 두 레그의 합산 비용이 자본을 초과: 앞선 레그가 우선 체결
  let (first, second) = two_stocks();
  let mut provider = MemoryDataProvider::new();
  provider.set_price(&first, trade_date(), 25.0);
  provider.set_price(&second, trade_date(), 25.0);

  let mut ledger = Ledger::with_capital(1000.0);
  let mut executor = OrderExecutor::new(provider);

  let orders = OrderBatch::new()
    .leg(first.clone(), 30.0)
    .leg(second.clone(), 20.0);
  let fills = executor.buy_batch(&mut ledger, &orders, trade_date(), 0.0);

  assert_eq!(fills[&first].quantity, 30.0); // 750 지출
  assert_eq!(fills[&second].quantity, 10.0); // 남은 250으로 10주만
  assert_eq!(ledger.capital(), 0.0);
}

#[test]
fn batch_fee_is_charged_exactly_once() {
  let (first, second) = two_stocks();
  let mut provider = MemoryDataProvider::new();
  provider.set_price(&first, trade_date(), 25.0);
  provider.set_price(&second, trade_date(), 25.0);

  let mut ledger = Ledger::with_capital(1000.0);
  let mut executor = OrderExecutor::new(provider);

  let orders = OrderBatch::new()
    .leg(first.clone(), 30.0)
    .leg(second.clone(), 20.0);
  let fills = executor.buy_batch(&mut ledger, &orders, trade_date(), 10.0);

  // 첫 레그 30주(750), 둘째 레그는 floor((250-10)/25)=9주(225), 마지막에 수수료 10
  assert_eq!(fills[&first].quantity, 30.0);
  assert_eq!(fills[&second].quantity, 9.0);
  assert_eq!(ledger.capital(), 15.0);

  // 레그 단위 체결 기록에는 수수료가 붙지 않는다
  assert!(executor.trades().iter().all(|t| t.fee == 0.0));
}

#[test]
fn unpriced_leg_gets_sentinel_and_batch_continues() {
  let (priced, unpriced) = two_stocks();
  let mut provider = MemoryDataProvider::new();
  provider.set_price(&priced, trade_date(), 10.0);

  let mut ledger = Ledger::with_capital(1000.0);
  let mut executor = OrderExecutor::new(provider);

  let orders = OrderBatch::new()
    .leg(unpriced.clone(), 5.0)
    .leg(priced.clone(), 5.0);
  let fills = executor.buy_batch(&mut ledger, &orders, trade_date(), 0.0);

  assert_eq!(fills.len(), 2);
  assert_eq!(fills[&unpriced], Fill::none());
  assert_eq!(fills[&priced].quantity, 5.0);
}

#[test]
fn always_policy_charges_fee_even_with_zero_executed_legs() {
  let (stock, _) = two_stocks();
  let mut provider = MemoryDataProvider::new();
  provider.set_price(&stock, trade_date(), 25.0);

  let mut ledger = Ledger::with_capital(5.0);
  let mut executor = OrderExecutor::with_batch_fee_policy(provider, BatchFeePolicy::Always);

  let orders = OrderBatch::new().leg(stock.clone(), 10.0);
  let fills = executor.buy_batch(&mut ledger, &orders, trade_date(), 10.0);

  assert!(!fills[&stock].is_filled());
  assert_eq!(ledger.capital(), -5.0); // 기준 동작: 체결이 없어도 수수료 차감
}

#[test]
fn only_when_filled_policy_skips_fee_on_empty_batch() {
  let (stock, _) = two_stocks();
  let mut provider = MemoryDataProvider::new();
  provider.set_price(&stock, trade_date(), 25.0);

  let mut ledger = Ledger::with_capital(5.0);
  let mut executor =
    OrderExecutor::with_batch_fee_policy(provider, BatchFeePolicy::OnlyWhenFilled);

  let orders = OrderBatch::new().leg(stock.clone(), 10.0);
  let fills = executor.buy_batch(&mut ledger, &orders, trade_date(), 10.0);

  assert!(!fills[&stock].is_filled());
  assert_eq!(ledger.capital(), 5.0);
}

#[test]
fn sell_batch_settles_all_legs_and_charges_one_fee() {
  let (first, second) = two_stocks();
  let mut provider = MemoryDataProvider::new();
  provider.set_price(&first, trade_date(), 20.0);
  provider.set_price(&second, trade_date(), 20.0);

  let mut holdings = HashMap::new();
  holdings.insert(first.clone(), 10.0);
  holdings.insert(second.clone(), 5.0);
  let mut ledger = Ledger::new(holdings, 0.0);
  let mut executor = OrderExecutor::new(provider);

  let orders = OrderBatch::new()
    .leg(first.clone(), 10.0)
    .leg(second.clone(), 5.0);
  let fills = executor.sell_batch(&mut ledger, &orders, trade_date(), 10.0);

  assert_eq!(fills[&first].quantity, 10.0);
  assert_eq!(fills[&second].quantity, 5.0);
  assert_eq!(ledger.capital(), 290.0); // 200 + 100 - 10
  assert_eq!(ledger.position_count(), 0);
}
