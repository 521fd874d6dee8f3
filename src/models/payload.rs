//! Wire-format payload shapes
//!
//! Raw JSON shapes returned by the stats endpoints. The single-device
//! and eyetime families share the same shape per granularity; the
//! eyetime variants simply omit the per-application fields. All wire
//! field names are camelCase.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::DateRange;

/// Daily stats response: `/stats/{deviceId}` and `/eyetime/daily`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStatsPayload {
    /// Reported date (YYYY-MM-DD); absent on the "today" endpoints
    #[serde(default)]
    pub date: Option<String>,

    /// Total usage in minutes
    #[serde(default)]
    pub total_usage: Option<f64>,

    /// Per-application usage; absent on the eyetime variant
    #[serde(default)]
    pub app_stats: Option<BTreeMap<String, f64>>,

    /// Usage per hour, expected length 24
    #[serde(default)]
    pub hourly_stats: Vec<f64>,
}

/// Weekly/monthly stats response: `/{weekly,monthly}/{deviceId}` and
/// `/eyetime/{weekly,monthly}`
///
/// `BTreeMap` keys iterate in ascending lexicographic order, which is
/// chronological for ISO `YYYY-MM-DD` date keys. The transformer relies
/// on that ordering.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStatsPayload {
    /// Labeled range of the requested week
    #[serde(default)]
    pub week_range: Option<DateRange>,

    /// Labeled range of the requested month
    #[serde(default)]
    pub month_range: Option<DateRange>,

    /// Per-application, per-day usage; absent on the eyetime variant
    #[serde(default)]
    pub app_daily_stats: Option<BTreeMap<String, BTreeMap<String, f64>>>,

    /// Date → daily total; a null value counts as 0
    #[serde(default)]
    pub daily_totals: BTreeMap<String, Option<f64>>,
}
