/**
* filename : main
* author : HAMA
* date: 2025. 8. 25.
* description: 
**/

use chrono::Duration;

use xFolio::config::Config;
use xFolio::market_data::{CsvDataProvider, MarketDataProvider, MemoryDataProvider};
use xFolio::models::instrument::{AcceptAll, Instrument};
use xFolio::models::ledger::Ledger;
use xFolio::models::order::OrderBatch;
use xFolio::execution::OrderExecutor;
use xFolio::utils::{logging, parse_date};

fn main() -> Result<(), anyhow::Error> {
    // 로깅 초기화
    logging::init()?;
    log::info!("포트폴리오 시뮬레이션 시작...");

    // 설정 로드
    let config = Config::load()?;
    log::info!("설정 로드 완료");

    let start_date = parse_date("2025-01-02")?;

    // 데이터 파일이 설정되어 있으면 CSV, 아니면 생성된 데이터 사용
    match &config.market_data.data_file {
        Some(path) => {
            let provider =
                match CsvDataProvider::from_path(path.clone(), config.market_data.delimiter) {
                    Ok(provider) => provider,
                    Err(e) => {
                        logging::log_error("시장 데이터 로드", &e);
                        return Err(e.into());
                    }
                };
            let instruments = provider.instruments();
            run_simulation(provider, instruments, &config)?;
        }
        None => {
            let samsung = Instrument::checked("KRX", "005930", &AcceptAll)?;
            let hynix = Instrument::checked("KRX", "000660", &AcceptAll)?;

            let mut provider = MemoryDataProvider::new();
            provider.fill_random_walk(&samsung, start_date, 30, 70.0);
            provider.fill_random_walk(&hynix, start_date, 30, 180.0);
            provider.set_dividend(&samsung, start_date + Duration::days(10), 0.35);

            run_simulation(provider, vec![samsung, hynix], &config)?;
        }
    }

    Ok(())
}

fn run_simulation<P: MarketDataProvider>(
    provider: P,
    instruments: Vec<Instrument>,
    config: &Config,
) -> Result<(), anyhow::Error> {
    let fee = config.trading.default_fee;
    let mut ledger = Ledger::with_capital(config.trading.initial_capital);
    let mut executor =
        OrderExecutor::with_batch_fee_policy(provider, config.trading.batch_fee_policy());

    let start_date = parse_date("2025-01-02")?;

    // 일괄 매수: 삽입 순서대로 자본이 허용하는 만큼 체결
    let mut orders = OrderBatch::new();
    for instrument in &instruments {
        orders.add_leg(instrument.clone(), 20.0);
    }
    let fills = executor.buy_batch(&mut ledger, &orders, start_date, fee);
    for (instrument, fill) in &fills {
        log::info!("매수 결과: {} -> 수량 {} 가격 {:?}", instrument, fill.quantity, fill.price);
    }

    // 보유 기간 동안 배당 반영
    for day in 1..=15 {
        executor.accrue_dividends(&mut ledger, start_date + Duration::days(day));
    }

    // 보유 종목 전량 매도
    let sell_date = start_date + Duration::days(20);
    log::info!(
        "매도 전 평가액: {}",
        ledger.position_value(executor.provider(), sell_date)
    );
    for instrument in &instruments {
        let held = ledger.quantity(instrument);
        if held > 0.0 {
            executor.sell(&mut ledger, instrument, held, sell_date, fee);
        }
    }

    log::info!(
        "시뮬레이션 종료: 자본 {} / 보유 종목 {}개",
        ledger.capital(),
        ledger.position_count()
    );

    let report = serde_json::to_string_pretty(executor.trades())?;
    println!("{}", report);

    Ok(())
}
