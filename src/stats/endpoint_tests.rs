//! Unit tests for request-URL construction

use proptest::prelude::*;

use crate::models::{PeriodType, StatsMode};

use super::endpoint::{build_url, UrlParams};
use super::timezone::local_today_string;

const BASE: &str = "http://127.0.0.1:3000/api";

fn params(mode: StatsMode) -> UrlParams<'static> {
    UrlParams {
        offset: 0,
        mode,
        date: None,
    }
}

#[test]
fn test_daily_single_today() {
    let url = build_url(BASE, PeriodType::Daily, "phone-1", &params(StatsMode::Single), 8.0);
    assert_eq!(url, "http://127.0.0.1:3000/api/stats/phone-1?timezoneOffset=+8");
}

#[test]
fn test_daily_single_explicit_today_omits_date() {
    let today = local_today_string();
    let url = build_url(
        BASE,
        PeriodType::Daily,
        "phone-1",
        &UrlParams {
            offset: 0,
            mode: StatsMode::Single,
            date: Some(&today),
        },
        8.0,
    );
    assert!(!url.contains("date="));
}

#[test]
fn test_daily_single_dated() {
    let url = build_url(
        BASE,
        PeriodType::Daily,
        "phone-1",
        &UrlParams {
            offset: 0,
            mode: StatsMode::Single,
            date: Some("2000-01-01"),
        },
        8.0,
    );
    assert_eq!(
        url,
        "http://127.0.0.1:3000/api/stats/phone-1?date=2000-01-01&timezoneOffset=+8"
    );
}

#[test]
fn test_daily_eyetime_today_has_trailing_slash() {
    let url = build_url(BASE, PeriodType::Daily, "ignored", &params(StatsMode::Eyetime), 8.0);
    assert_eq!(url, "http://127.0.0.1:3000/api/eyetime/daily/?timezoneOffset=+8");
}

#[test]
fn test_daily_eyetime_dated() {
    let url = build_url(
        BASE,
        PeriodType::Daily,
        "ignored",
        &UrlParams {
            offset: 0,
            mode: StatsMode::Eyetime,
            date: Some("2000-01-01"),
        },
        -5.0,
    );
    assert_eq!(
        url,
        "http://127.0.0.1:3000/api/eyetime/daily?date=2000-01-01&timezoneOffset=-5"
    );
}

#[test]
fn test_weekly_single_carries_week_offset() {
    let url = build_url(
        BASE,
        PeriodType::Weekly,
        "phone-1",
        &UrlParams {
            offset: -2,
            mode: StatsMode::Single,
            date: None,
        },
        8.0,
    );
    assert_eq!(
        url,
        "http://127.0.0.1:3000/api/weekly/phone-1?weekOffset=-2&timezoneOffset=+8"
    );
}

#[test]
fn test_monthly_eyetime_carries_month_offset() {
    let url = build_url(
        BASE,
        PeriodType::Monthly,
        "ignored",
        &UrlParams {
            offset: -1,
            mode: StatsMode::Eyetime,
            date: None,
        },
        0.0,
    );
    assert_eq!(
        url,
        "http://127.0.0.1:3000/api/eyetime/monthly?monthOffset=-1&timezoneOffset=0"
    );
}

#[test]
fn test_base_trailing_slash_trimmed() {
    let url = build_url(
        "http://127.0.0.1:3000/api/",
        PeriodType::Daily,
        "phone-1",
        &params(StatsMode::Single),
        8.0,
    );
    assert!(url.starts_with("http://127.0.0.1:3000/api/stats/"));
    assert!(!url.contains("api//"));
}

#[test]
fn test_device_id_is_percent_encoded() {
    let url = build_url(BASE, PeriodType::Daily, "小米 手机", &params(StatsMode::Single), 8.0);
    assert!(!url.contains(' '));
    assert!(url.contains("/stats/%E5%B0%8F%E7%B1%B3%20%E6%89%8B%E6%9C%BA?"));
}

#[test]
fn test_fractional_offset_keeps_fraction() {
    let url = build_url(BASE, PeriodType::Daily, "phone-1", &params(StatsMode::Single), 5.5);
    assert!(url.ends_with("timezoneOffset=+5.5"));
}

proptest! {
    /// 不变式: URL 恰好携带一个 timezoneOffset 参数，符号前缀与
    /// 偏移量符号一致（正 → +，负 → -，零 → 裸数字）
    #[test]
    fn prop_single_timezone_offset_with_matching_sign(
        hours in -12i32..=14,
        period_idx in 0usize..3,
        eyetime in any::<bool>(),
        offset in -52i64..=0,
    ) {
        let period = [PeriodType::Daily, PeriodType::Weekly, PeriodType::Monthly][period_idx];
        let mode = if eyetime { StatsMode::Eyetime } else { StatsMode::Single };
        let url = build_url(
            BASE,
            period,
            "phone-1",
            &UrlParams { offset, mode, date: None },
            f64::from(hours),
        );

        prop_assert_eq!(url.matches("timezoneOffset=").count(), 1);

        let value = url.split("timezoneOffset=").nth(1).unwrap();
        if hours > 0 {
            prop_assert!(value.starts_with('+'));
        } else if hours < 0 {
            prop_assert!(value.starts_with('-'));
        } else {
            prop_assert!(value.starts_with('0'));
        }
    }

    /// 不变式: 未指定日期的日统计 URL 绝不携带 date 参数
    #[test]
    fn prop_daily_without_date_never_has_date_param(
        eyetime in any::<bool>(),
        hours in -12i32..=14,
    ) {
        let mode = if eyetime { StatsMode::Eyetime } else { StatsMode::Single };
        let url = build_url(
            BASE,
            PeriodType::Daily,
            "phone-1",
            &UrlParams { offset: 0, mode, date: None },
            f64::from(hours),
        );
        prop_assert!(!url.contains("date="));
    }
}
