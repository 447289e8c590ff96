//! 수학 관련 유틸리티
//!
//! 금액 반올림, 주문 수량 계산 함수 제공

/// 금액을 소수점 둘째 자리로 반올림 (센트 단위)
pub fn round_to_cents(amount: f64) -> f64 {
  (amount * 100.0).round() / 100.0
}

/// 매수 가능 수량 계산: floor((capital - fee) / price)
pub fn affordable_quantity(capital: f64, price: f64, fee: f64) -> f64 {
  ((capital - fee) / price).floor()
}

#[cfg(test)]
mod tests {
  use super::*;
  
  #[test]
  fn test_round_to_cents() {
    assert_eq!(round_to_cents(10.004), 10.0);
    assert_eq!(round_to_cents(10.006), 10.01);
    assert_eq!(round_to_cents(-3.333), -3.33);
    assert_eq!(round_to_cents(0.1 + 0.2), 0.3);
  }
  
  #[test]
  fn test_affordable_quantity() {
    // (1000 - 10) / 25 = 39.6 -> 39
    assert_eq!(affordable_quantity(1000.0, 25.0, 10.0), 39.0);
    assert_eq!(affordable_quantity(1000.0, 25.0, 0.0), 40.0);
    // 수수료가 잔고보다 크면 음수가 나온다 (호출 측에서 0 이하를 걸러냄)
    assert!(affordable_quantity(5.0, 25.0, 10.0) < 0.0);
  }
}
