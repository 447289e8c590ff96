use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::market_data::provider::{MarketDataProvider, MarketField};
use crate::models::fill::Fill;
use crate::models::instrument::Instrument;
use crate::models::ledger::Ledger;
use crate::models::order::{OrderBatch, OrderSide};
use crate::models::trade::Trade;
use crate::utils::logging;
use crate::utils::math::affordable_quantity;

/// 일괄 주문의 수수료 부과 정책
///
/// `Always` charges the batch fee even when zero legs executed;
/// `OnlyWhenFilled` charges only if at least one leg transacted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BatchFeePolicy {
    Always,
    OnlyWhenFilled,
}

impl Default for BatchFeePolicy {
    fn default() -> Self {
        BatchFeePolicy::Always
    }
}

/// 주문 실행기 - 원장에 대한 매수/매도/배당 처리 코어 컴포넌트
///
/// Consumes a caller-owned `Ledger`, queries the market data provider
/// per instrument/date pair, applies clamping and rounding policy, and
/// mutates the ledger in place. Every executed fill is recorded as a
/// `Trade` in the executor's history.
pub struct OrderExecutor<P: MarketDataProvider> {
    provider: P,
    batch_fee_policy: BatchFeePolicy,
    trades: Vec<Trade>,
}

impl<P: MarketDataProvider> OrderExecutor<P> {
    pub fn new(provider: P) -> Self {
        OrderExecutor {
            provider,
            batch_fee_policy: BatchFeePolicy::default(),
            trades: Vec::new(),
        }
    }

    pub fn with_batch_fee_policy(provider: P, policy: BatchFeePolicy) -> Self {
        OrderExecutor {
            provider,
            batch_fee_policy: policy,
            trades: Vec::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Executed-trade history, in execution order.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// 단일 종목 매수
    ///
    /// Looks up the price for the date; when unavailable the ledger is
    /// untouched and the sentinel fill is returned. An unaffordable
    /// request is clamped down to `floor((capital - fee) / price)`
    /// rather than rejected.
    pub fn buy(
        &mut self,
        ledger: &mut Ledger,
        instrument: &Instrument,
        quantity: f64,
        date: NaiveDate,
        fee: f64,
    ) -> Fill {
        self.execute_buy(ledger, instrument, quantity, date, fee, true)
    }

    /// 단일 종목 매도
    ///
    /// No short selling: an instrument absent from holdings is a logged
    /// no-op. A request above the held quantity is clamped to it, and a
    /// full sell-off removes the holdings entry.
    pub fn sell(
        &mut self,
        ledger: &mut Ledger,
        instrument: &Instrument,
        quantity: f64,
        date: NaiveDate,
        fee: f64,
    ) -> Fill {
        self.execute_sell(ledger, instrument, quantity, date, fee, true)
    }

    /// 일괄 매수 - 삽입 순서대로 각 레그를 정산
    ///
    /// Legs settle with the fee withheld from each affordability check
    /// but charged only once for the whole batch, per the configured
    /// `BatchFeePolicy`. The result map has one entry per requested
    /// instrument, including no-transaction entries for legs that
    /// failed to price or clamped to zero.
    pub fn buy_batch(
        &mut self,
        ledger: &mut Ledger,
        orders: &OrderBatch,
        date: NaiveDate,
        fee: f64,
    ) -> HashMap<Instrument, Fill> {
        let mut results = HashMap::new();

        for (instrument, quantity) in orders.iter() {
            let fill = self.execute_buy(ledger, instrument, *quantity, date, fee, false);
            results.insert(instrument.clone(), fill);
        }

        self.charge_batch_fee(ledger, fee, &results);
        results
    }

    /// 일괄 매도 - 삽입 순서대로 각 레그를 정산
    pub fn sell_batch(
        &mut self,
        ledger: &mut Ledger,
        orders: &OrderBatch,
        date: NaiveDate,
        fee: f64,
    ) -> HashMap<Instrument, Fill> {
        let mut results = HashMap::new();

        for (instrument, quantity) in orders.iter() {
            let fill = self.execute_sell(ledger, instrument, *quantity, date, fee, false);
            results.insert(instrument.clone(), fill);
        }

        self.charge_batch_fee(ledger, fee, &results);
        results
    }

    /// 배당금 반영
    ///
    /// Credits `dividend * shares_held` for every held instrument that
    /// has a non-zero dividend amount for the date. Absent or zero
    /// amounts are skipped without a diagnostic. Iteration order over
    /// holdings does not affect the result.
    pub fn accrue_dividends(&self, ledger: &mut Ledger, date: NaiveDate) {
        let held: Vec<(Instrument, f64)> = ledger
            .holdings()
            .map(|(i, q)| (i.clone(), *q))
            .collect();

        for (instrument, quantity) in held {
            match self
                .provider
                .query(date, &instrument, MarketField::DividendAmount)
            {
                Some(amount) if amount != 0.0 => {
                    ledger.credit_capital(amount * quantity);
                    log::debug!(
                        "배당 반영: {} - 주당 {} x {}주",
                        instrument,
                        amount,
                        quantity
                    );
                }
                _ => {}
            }
        }
    }

    fn execute_buy(
        &mut self,
        ledger: &mut Ledger,
        instrument: &Instrument,
        requested: f64,
        date: NaiveDate,
        fee: f64,
        apply_fee: bool,
    ) -> Fill {
        let Some(price) = self.provider.query(date, instrument, MarketField::Price) else {
            logging::log_price_unavailable(instrument, date);
            return Fill::none();
        };

        let mut quantity = requested;
        if ledger.capital() < quantity * price + fee {
            quantity = affordable_quantity(ledger.capital(), price, fee);
        }

        if quantity <= 0.0 {
            // Priced but nothing affordable: no mutation at all
            return Fill {
                quantity: 0.0,
                price: Some(price),
            };
        }

        let mut cost = quantity * price;
        if apply_fee {
            cost += fee;
        }

        ledger.debit_capital(cost);
        ledger.add_shares(instrument, quantity);
        self.record_trade(
            instrument,
            OrderSide::Buy,
            quantity,
            price,
            if apply_fee { fee } else { 0.0 },
            date,
        );

        Fill::executed(quantity, price)
    }

    fn execute_sell(
        &mut self,
        ledger: &mut Ledger,
        instrument: &Instrument,
        requested: f64,
        date: NaiveDate,
        fee: f64,
        apply_fee: bool,
    ) -> Fill {
        if !ledger.holds(instrument) {
            logging::log_short_sell_attempt(instrument);
            return Fill::none();
        }

        let held = ledger.quantity(instrument);
        let quantity = if requested > held { held } else { requested };

        // The holdings check passed, but a missing price still aborts
        let Some(price) = self.provider.query(date, instrument, MarketField::Price) else {
            logging::log_price_unavailable(instrument, date);
            return Fill::none();
        };

        if quantity <= 0.0 {
            return Fill {
                quantity: 0.0,
                price: Some(price),
            };
        }

        ledger.remove_shares(instrument, quantity);

        let mut proceeds = quantity * price;
        if apply_fee {
            proceeds -= fee;
        }

        ledger.credit_capital(proceeds);
        self.record_trade(
            instrument,
            OrderSide::Sell,
            quantity,
            price,
            if apply_fee { fee } else { 0.0 },
            date,
        );

        Fill::executed(quantity, price)
    }

    fn charge_batch_fee(
        &self,
        ledger: &mut Ledger,
        fee: f64,
        results: &HashMap<Instrument, Fill>,
    ) {
        let charge = match self.batch_fee_policy {
            BatchFeePolicy::Always => true,
            BatchFeePolicy::OnlyWhenFilled => results.values().any(|f| f.is_filled()),
        };

        if charge {
            ledger.debit_capital(fee);
        }
    }

    fn record_trade(
        &mut self,
        instrument: &Instrument,
        side: OrderSide,
        quantity: f64,
        price: f64,
        fee: f64,
        date: NaiveDate,
    ) {
        let trade = Trade::new(instrument.clone(), side, quantity, price, fee, date);
        logging::log_trade(&trade);
        self.trades.push(trade);
    }
}
