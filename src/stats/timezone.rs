//! 时区解析
//!
//! 每个请求都携带调用方本地时区相对 UTC 的偏移量；
//! 日统计的"今天"判断同样以本地日期为准。

use chrono::Local;

/// 本地时区相对 UTC 的偏移小时数（东区为正）
///
/// 半小时 / 45 分钟时区会返回小数（如东 5.5 区返回 5.5）。
pub fn resolve_offset_hours() -> f64 {
    let seconds_east = Local::now().offset().local_minus_utc();
    f64::from(seconds_east) / 3600.0
}

/// 本地时区下的今天，YYYY-MM-DD
pub fn local_today_string() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_offset_is_finite_and_in_range() {
        let offset = resolve_offset_hours();
        assert!(offset.is_finite());
        // UTC-12 到 UTC+14 覆盖所有现行时区
        assert!((-12.0..=14.0).contains(&offset));
    }

    #[test]
    fn test_local_today_is_iso_date() {
        let today = local_today_string();
        assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
