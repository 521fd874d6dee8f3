//! Response normalization
//!
//! Converts a raw JSON payload for a given period type and mode into
//! the canonical [`StatsResult`]. Weekly and monthly share one generic
//! transform parameterized by a [`PeriodConfig`]; mode-awareness
//! decides whether per-application fields are read from the payload at
//! all (the eyetime API carries none).

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::error::ApiError;
use crate::models::payload::{DailyStatsPayload, PeriodStatsPayload};
use crate::models::{DateRange, PeriodType, StatsMode, StatsResult, TimeDimension};

use super::timezone::local_today_string;

/// Configuration for the shared weekly/monthly transform
struct PeriodConfig {
    kind: PeriodType,
    time_dimension: TimeDimension,
    /// Which labeled range field the payload carries for this period
    range: fn(&PeriodStatsPayload) -> Option<DateRange>,
}

const WEEKLY: PeriodConfig = PeriodConfig {
    kind: PeriodType::Weekly,
    time_dimension: TimeDimension::Day,
    range: |payload| payload.week_range.clone(),
};

const MONTHLY: PeriodConfig = PeriodConfig {
    kind: PeriodType::Monthly,
    time_dimension: TimeDimension::Week,
    range: |payload| payload.month_range.clone(),
};

/// Normalizes a raw API payload into a [`StatsResult`]
///
/// Shape mismatches surface as [`ApiError::Parse`].
pub fn transform(
    period: PeriodType,
    mode: StatsMode,
    raw: &serde_json::Value,
) -> Result<StatsResult, ApiError> {
    match period {
        PeriodType::Daily => transform_daily(mode, raw),
        PeriodType::Weekly => transform_period(&WEEKLY, mode, raw),
        PeriodType::Monthly => transform_period(&MONTHLY, mode, raw),
    }
}

/// 24 小时刻度标签: "0时".."23时"
fn hour_labels() -> Vec<String> {
    (0..24).map(|hour| format!("{}时", hour)).collect()
}

/// 日期键渲染为 "{月}/{日}"（无前导零）
///
/// 无法按 ISO 日期解析的键原样输出，长度与求和不变式不受影响。
fn month_day_label(date_key: &str) -> String {
    match NaiveDate::parse_from_str(date_key, "%Y-%m-%d") {
        Ok(date) => format!("{}/{}", date.month(), date.day()),
        Err(_) => date_key.to_string(),
    }
}

fn transform_daily(mode: StatsMode, raw: &serde_json::Value) -> Result<StatsResult, ApiError> {
    let payload: DailyStatsPayload =
        serde_json::from_value(raw.clone()).map_err(|e| ApiError::Parse(e.to_string()))?;

    let date = payload.date.unwrap_or_else(local_today_string);

    // eyetime 接口无 appStats
    let app_stats = if mode.is_eyetime() {
        None
    } else {
        payload.app_stats
    };

    Ok(StatsResult {
        kind: PeriodType::Daily,
        date_range: Some(DateRange {
            start: date.clone(),
            end: date,
        }),
        total_usage: payload.total_usage.unwrap_or(0.0),
        app_stats,
        time_stats: payload.hourly_stats,
        time_labels: hour_labels(),
        time_dimension: TimeDimension::Hour,
        raw_data: None,
    })
}

fn transform_period(
    config: &PeriodConfig,
    mode: StatsMode,
    raw: &serde_json::Value,
) -> Result<StatsResult, ApiError> {
    let payload: PeriodStatsPayload =
        serde_json::from_value(raw.clone()).map_err(|e| ApiError::Parse(e.to_string()))?;

    // single 模式下将按日明细折叠为每应用一个合计
    let app_stats: Option<BTreeMap<String, f64>> = if mode.is_eyetime() {
        None
    } else {
        payload.app_daily_stats.as_ref().map(|apps| {
            apps.iter()
                .map(|(app, daily)| (app.clone(), daily.values().sum::<f64>()))
                .collect()
        })
    };

    // BTreeMap 迭代即升序；ISO 日期键因此按时间排序
    let mut time_labels = Vec::with_capacity(payload.daily_totals.len());
    let mut time_stats = Vec::with_capacity(payload.daily_totals.len());
    for (date_key, total) in &payload.daily_totals {
        time_labels.push(month_day_label(date_key));
        time_stats.push(total.unwrap_or(0.0));
    }

    let total_usage = match &app_stats {
        Some(apps) => apps.values().sum(),
        None => time_stats.iter().sum(),
    };

    Ok(StatsResult {
        kind: config.kind,
        date_range: (config.range)(&payload),
        total_usage,
        app_stats,
        time_stats,
        time_labels,
        time_dimension: config.time_dimension,
        raw_data: Some(raw.clone()),
    })
}
