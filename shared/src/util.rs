use rust_decimal::Decimal;

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Format a price given in minor currency units (e.g. kopecks, cents).
///
/// Uses exact decimal arithmetic so `4800` always renders as `"48.00"`.
pub fn format_price(minor_units: i64) -> String {
    Decimal::new(minor_units, 2).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(4800), "48.00");
        assert_eq!(format_price(7250), "72.50");
        assert_eq!(format_price(5), "0.05");
        assert_eq!(format_price(0), "0.00");
    }

    #[test]
    fn test_now_millis_is_recent() {
        // 2024-01-01 00:00:00 UTC
        assert!(now_millis() > 1_704_067_200_000);
    }
}
