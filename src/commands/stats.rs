//! `usage-dash stats` 子命令

use anyhow::{bail, Result};

use crate::config::ApiConfig;
use crate::format::format_minutes;
use crate::models::{FetchOptions, StatsResult, TimeDimension};
use crate::stats::StatsClient;

/// 执行一次统计查询并打印报告
///
/// 失败时以状态中的错误消息退出非零。
pub async fn run(
    config: &ApiConfig,
    stats_type: &str,
    device: &str,
    offset: i64,
    date: Option<String>,
    mode: &str,
) -> Result<()> {
    let client = StatsClient::new(config);
    client
        .fetch_stats(
            device,
            FetchOptions {
                stats_type: stats_type.to_string(),
                offset,
                date,
                mode: mode.to_string(),
            },
        )
        .await;

    let state = client.state().await;
    if let Some(message) = state.error {
        bail!(message);
    }
    match state.stats {
        Some(stats) => print_report(device, &stats),
        // 有错误必有消息，无错误必有结果；此分支防御接口演化
        None => bail!("未返回统计数据"),
    }

    Ok(())
}

fn dimension_heading(dimension: TimeDimension) -> &'static str {
    match dimension {
        TimeDimension::Hour => "分时统计",
        TimeDimension::Day => "每日统计",
        TimeDimension::Week => "每周统计",
    }
}

fn print_report(device: &str, stats: &StatsResult) {
    println!("设备: {}", device);
    if let Some(range) = &stats.date_range {
        println!("时间范围: {}", range.display());
    }
    println!("总使用时长: {}", format_minutes(stats.total_usage));

    if let Some(app_stats) = &stats.app_stats {
        println!();
        println!("应用统计:");
        // 按用量降序
        let mut apps: Vec<(&String, &f64)> = app_stats.iter().collect();
        apps.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
        for (app, minutes) in apps {
            println!("  {:<24} {}", app, format_minutes(*minutes));
        }
    }

    println!();
    println!("{}:", dimension_heading(stats.time_dimension));
    for (label, minutes) in stats.time_labels.iter().zip(&stats.time_stats) {
        // 空桶不打印，日统计 24 行里通常大半为零
        if *minutes > 0.0 {
            println!("  {:<8} {}", label, format_minutes(*minutes));
        }
    }
}
