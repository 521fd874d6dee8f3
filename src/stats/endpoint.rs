//! 请求 URL 构建
//!
//! 根据周期类型、设备与模式在两个 API 族之间选择:
//! single 模式走 `/stats/{deviceId}`、`/weekly/{deviceId}`、
//! `/monthly/{deviceId}`，eyetime 模式走无设备的 `/eyetime/*`。
//! 日统计还区分"今天"与"指定日期"两个变体。
//! 纯字符串构建，不发起网络请求。

use crate::models::{PeriodType, StatsMode};

use super::timezone::local_today_string;

/// Request parameters for [`build_url`]
#[derive(Debug, Clone)]
pub struct UrlParams<'a> {
    /// Week/month displacement (0 = current period, negative = past)
    pub offset: i64,
    /// API family selector
    pub mode: StatsMode,
    /// Explicit date for daily requests; None or today selects the
    /// "current" endpoint without a date parameter
    pub date: Option<&'a str>,
}

/// 格式化 timezoneOffset 查询参数值
///
/// 严格为正时带显式 `+` 号；0 与负数按自然格式输出。
fn format_offset_hours(hours: f64) -> String {
    if hours > 0.0 {
        format!("+{}", hours)
    } else {
        format!("{}", hours)
    }
}

/// 构建统计请求 URL
///
/// # Arguments
/// * `api_base` - API 基础地址（结尾斜杠会被剔除）
/// * `period` - 周期类型
/// * `device_id` - 设备 ID（single 模式下进入路径，做百分号编码）
/// * `params` - 偏移量、模式与可选日期
/// * `tz_offset_hours` - 本地时区偏移小时数
pub fn build_url(
    api_base: &str,
    period: PeriodType,
    device_id: &str,
    params: &UrlParams<'_>,
    tz_offset_hours: f64,
) -> String {
    let base = api_base.trim_end_matches('/');
    let tz_param = format!("timezoneOffset={}", format_offset_hours(tz_offset_hours));
    let device = urlencoding::encode(device_id);

    match period {
        PeriodType::Daily => {
            // 缺省日期或正好是今天 → "当前"端点，不带 date 参数
            let today = local_today_string();
            let dated = params.date.filter(|d| *d != today);

            match (params.mode, dated) {
                (StatsMode::Single, None) => format!("{}/stats/{}?{}", base, device, tz_param),
                (StatsMode::Single, Some(date)) => {
                    format!("{}/stats/{}?date={}&{}", base, device, date, tz_param)
                }
                // eyetime 今日端点带结尾斜杠，与线上部署一致
                (StatsMode::Eyetime, None) => format!("{}/eyetime/daily/?{}", base, tz_param),
                (StatsMode::Eyetime, Some(date)) => {
                    format!("{}/eyetime/daily?date={}&{}", base, date, tz_param)
                }
            }
        }
        PeriodType::Weekly | PeriodType::Monthly => {
            let offset_param = match period {
                PeriodType::Weekly => "weekOffset",
                _ => "monthOffset",
            };

            match params.mode {
                StatsMode::Single => format!(
                    "{}/{}/{}?{}={}&{}",
                    base,
                    period.as_str(),
                    device,
                    offset_param,
                    params.offset,
                    tz_param
                ),
                StatsMode::Eyetime => format!(
                    "{}/eyetime/{}?{}={}&{}",
                    base,
                    period.as_str(),
                    offset_param,
                    params.offset,
                    tz_param
                ),
            }
        }
    }
}
