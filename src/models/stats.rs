//! Statistics view-model definitions
//!
//! Contains the unified `StatsResult` produced by the response
//! transformer, plus the request-side enums and the orchestrator's
//! shared state. `StatsResult` serializes with camelCase field names
//! so downstream dashboard consumers receive the exact wire shape the
//! web frontend consumed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Time granularity of a stats request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    /// One calendar day, 24 hourly buckets
    Daily,
    /// One calendar week, one bucket per day
    Weekly,
    /// One calendar month, one bucket per week
    Monthly,
}

impl PeriodType {
    /// Parses a caller-supplied stats type string
    ///
    /// Returns None for anything other than the three supported values;
    /// the orchestrator turns that into an unknown-type error.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(PeriodType::Daily),
            "weekly" => Some(PeriodType::Weekly),
            "monthly" => Some(PeriodType::Monthly),
            _ => None,
        }
    }

    /// URL path segment / wire value for this period type
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Daily => "daily",
            PeriodType::Weekly => "weekly",
            PeriodType::Monthly => "monthly",
        }
    }
}

/// Which backend API family serves the request
///
/// The eyetime aggregate API carries no per-application fields, so the
/// transformer must know the mode before reading the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsMode {
    /// Per-device API, reports per-application breakdowns
    Single,
    /// Aggregate eyetime API, device-less, time buckets only
    Eyetime,
}

impl StatsMode {
    /// Parses a caller-supplied mode string
    ///
    /// 适配 eyetime 接口: 除 "single" 外的任何值都按聚合模式处理
    pub fn from_param(value: &str) -> Self {
        if value == "single" {
            StatsMode::Single
        } else {
            StatsMode::Eyetime
        }
    }

    /// True when per-application fields must not be read from the payload
    pub fn is_eyetime(&self) -> bool {
        matches!(self, StatsMode::Eyetime)
    }
}

/// What the time axis of a `StatsResult` indexes over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeDimension {
    /// 24 hourly buckets (daily)
    Hour,
    /// One bucket per calendar day (weekly)
    Day,
    /// One bucket per calendar week (monthly)
    Week,
}

/// Labeled date range of a stats period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Start date (YYYY-MM-DD)
    pub start: String,
    /// End date (YYYY-MM-DD), equals `start` for daily results
    pub end: String,
}

impl DateRange {
    /// Display text for the range
    ///
    /// A single-day range renders as the bare date, otherwise
    /// `start 至 end`.
    pub fn display(&self) -> String {
        if self.start == self.end {
            self.start.clone()
        } else {
            format!("{} 至 {}", self.start, self.end)
        }
    }
}

/// Unified statistics view-model
///
/// Produced by the response transformer regardless of which API family
/// or granularity served the request; immutable once produced and
/// replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResult {
    /// Period granularity of this result
    #[serde(rename = "type")]
    pub kind: PeriodType,

    /// Labeled date range; absent when the API omitted it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,

    /// Total usage in minutes, same unit as per-bucket values
    pub total_usage: f64,

    /// Per-application usage totals; None when the data source cannot
    /// provide a breakdown (eyetime mode, or the payload carried none)
    pub app_stats: Option<BTreeMap<String, f64>>,

    /// Usage per bucket, one entry per hour/day/week
    pub time_stats: Vec<f64>,

    /// Display label per bucket, same length and order as `time_stats`
    pub time_labels: Vec<String>,

    /// What `time_stats` / `time_labels` index over
    pub time_dimension: TimeDimension,

    /// Untransformed API payload (weekly/monthly only), retained for
    /// consumers that need fields not promoted into the canonical shape
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<serde_json::Value>,
}

/// Transient orchestrator state shared with state readers
#[derive(Debug, Clone, Default)]
pub struct StatsState {
    /// Latest successful result; cleared on fetch failure
    pub stats: Option<StatsResult>,
    /// True only while a request is in flight
    pub loading: bool,
    /// User-facing failure message; cleared at the start of every fetch
    pub error: Option<String>,
}

/// Options for a stats fetch
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Requested granularity ("daily" / "weekly" / "monthly")
    pub stats_type: String,
    /// Week/month displacement from the current period (0 = current,
    /// negative = past); ignored for daily
    pub offset: i64,
    /// Explicit date (YYYY-MM-DD) for daily requests; None means today
    pub date: Option<String>,
    /// API family selector ("single" or anything else for eyetime)
    pub mode: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            stats_type: "daily".to_string(),
            offset: 0,
            date: None,
            mode: "single".to_string(),
        }
    }
}
