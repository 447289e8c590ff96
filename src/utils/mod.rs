//! 날짜 관련 유틸리티
//!
//! 날짜 파싱, 포맷팅 함수 제공

pub mod logging;
pub mod math;

use chrono::NaiveDate;

use crate::error::TradingError;

/// "YYYY-MM-DD" 형식의 문자열을 NaiveDate로 변환
pub fn parse_date(s: &str) -> Result<NaiveDate, TradingError> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| TradingError::ParseError(format!("invalid date '{}': {}", s, e)))
}

/// NaiveDate를 "YYYY-MM-DD" 문자열로 변환
pub fn format_date(date: NaiveDate) -> String {
  date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
  use super::*;
  
  #[test]
  fn test_parse_date() {
    let date = parse_date("2024-03-15").unwrap();
    assert_eq!(format_date(date), "2024-03-15");
    
    assert!(parse_date("15/03/2024").is_err());
    assert!(parse_date("not a date").is_err());
  }
}
