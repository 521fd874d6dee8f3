//! 统计编排器
//!
//! 对外的统计入口: 按周期类型分发请求，维护 loading/error/stats
//! 共享状态。状态置于 `Arc<RwLock<_>>` 之后，`StatsClient` 可以
//! 低成本克隆到多个任务中。
//!
//! 并发请求通过单调递增的请求票据仲裁: 只有仍是最新的请求才提交
//! 结果，被取代的请求整体跳过提交（包括 loading 复位，由更新的
//! 请求接管）。调用方视角下永远是最后发起的请求胜出。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{FetchOptions, PeriodType, StatsMode, StatsResult, StatsState};

use super::endpoint::{build_url, UrlParams};
use super::timezone::resolve_offset_hours;
use super::transform::transform;

/// 失败消息前缀，按周期类型区分
fn fetch_failure_prefix(period: PeriodType) -> &'static str {
    match period {
        PeriodType::Daily => "获取统计信息失败",
        PeriodType::Weekly => "获取周统计信息失败",
        PeriodType::Monthly => "获取月统计信息失败",
    }
}

/// 统计客户端 / 编排器
#[derive(Clone)]
pub struct StatsClient {
    /// HTTP 客户端（内部引用计数，克隆廉价）
    http_client: reqwest::Client,
    /// API 基础地址
    api_base: String,
    /// 共享状态
    state: Arc<RwLock<StatsState>>,
    /// 请求票据计数器，最新票据独占提交权
    ticket: Arc<AtomicU64>,
}

impl StatsClient {
    /// 创建新的统计客户端
    ///
    /// 不设置整体超时: 请求挂起直至传输层完成或失败。
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_base: config.api_base.clone(),
            state: Arc::new(RwLock::new(StatsState::default())),
            ticket: Arc::new(AtomicU64::new(0)),
        }
    }

    /// 获取统计数据
    ///
    /// 唯一可观察效果是共享状态变更，调用方通过访问器读取结果。
    /// 流程: 校验周期类型 → loading=true、清空 error → 构建 URL 并
    /// 请求 → 转换 → 提交（仅当仍为最新请求）。任何失败都会写入
    /// 用户可读的错误消息并清空 stats（统一的失败即清空策略）。
    ///
    /// 未知的周期类型只写入错误消息，不发起请求，stats 保持原值。
    pub async fn fetch_stats(&self, device_id: &str, options: FetchOptions) {
        let period = match PeriodType::from_param(&options.stats_type) {
            Some(period) => period,
            None => {
                let mut state = self.state.write().await;
                state.error =
                    Some(ApiError::UnknownPeriodType(options.stats_type.clone()).to_string());
                return;
            }
        };

        // fetch_add 返回旧值，+1 即本请求的票据；计数器当前值就是
        // 已发出的最新票据
        let ticket = self.ticket.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let mode = StatsMode::from_param(&options.mode);
        let outcome = self.request(period, device_id, &options, mode).await;

        if self.ticket.load(Ordering::SeqCst) != ticket {
            debug!(ticket, "stale stats request superseded, skipping commit");
            return;
        }

        let mut state = self.state.write().await;
        match outcome {
            Ok(result) => {
                state.stats = Some(result);
                state.error = None;
            }
            Err(err) => {
                warn!(%err, period = period.as_str(), "stats fetch failed");
                state.stats = None;
                state.error = Some(format!("{}: {}", fetch_failure_prefix(period), err));
            }
        }
        state.loading = false;
    }

    async fn request(
        &self,
        period: PeriodType,
        device_id: &str,
        options: &FetchOptions,
        mode: StatsMode,
    ) -> Result<StatsResult, ApiError> {
        let tz_offset_hours = resolve_offset_hours();
        let url = build_url(
            &self.api_base,
            period,
            device_id,
            &UrlParams {
                offset: options.offset,
                mode,
                date: options.date.as_deref(),
            },
            tz_offset_hours,
        );
        debug!(%url, "fetching stats");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status));
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        transform(period, mode, &raw)
    }

    /// 当前状态快照
    pub async fn state(&self) -> StatsState {
        self.state.read().await.clone()
    }

    /// 最近一次成功的统计结果
    pub async fn stats(&self) -> Option<StatsResult> {
        self.state.read().await.stats.clone()
    }

    /// 当前错误消息
    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// 是否有请求在途
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }
}
