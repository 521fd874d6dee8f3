//! 页面配置服务
//!
//! 从服务器获取页面组件的显示开关与默认时区偏移。默认值全部启用、
//! 东 8 区；仅当响应标记 success 时逐项覆盖，tzOffset 只有在字段
//! 确为数字时才生效。获取失败由调用方回退到默认配置。

use serde::Deserialize;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// 页面配置（已合并默认值）
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// 设备统计卡片
    pub device_count: bool,
    /// 评论区
    pub comment: bool,
    /// AI 总结
    pub ai_summary: bool,
    /// 默认时区偏移量（小时，东区为正）
    pub tz_offset: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            device_count: true,
            comment: true,
            ai_summary: true,
            tz_offset: 8.0,
        }
    }
}

/// `/pageConfig` 响应中的开关集合
#[derive(Debug, Deserialize)]
struct PageFlags {
    #[serde(rename = "WEB_DEVICE_COUNT")]
    device_count: Option<bool>,
    #[serde(rename = "WEB_COMMENT")]
    comment: Option<bool>,
    #[serde(rename = "WEB_AI_SUMMARY")]
    ai_summary: Option<bool>,
}

/// `/pageConfig` 响应
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageConfigResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    config: Option<PageFlags>,
    /// 保留原始 JSON，仅数字才覆盖默认值
    #[serde(default)]
    tz_offset: Option<serde_json::Value>,
}

/// 页面配置客户端
pub struct PageConfigService {
    http_client: reqwest::Client,
    api_base: String,
}

impl PageConfigService {
    /// 创建新的页面配置客户端
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    /// 获取页面配置
    ///
    /// 非 success 响应返回默认配置；传输 / 状态 / 解析失败作为
    /// [`ApiError`] 传播，由调用方决定回退策略。
    pub async fn fetch(&self) -> Result<PageConfig, ApiError> {
        let url = format!("{}/pageConfig", self.api_base);
        debug!(%url, "fetching page config");

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

        let data: PageConfigResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        let mut page_config = PageConfig::default();
        if data.success {
            if let Some(flags) = data.config {
                if let Some(v) = flags.device_count {
                    page_config.device_count = v;
                }
                if let Some(v) = flags.comment {
                    page_config.comment = v;
                }
                if let Some(v) = flags.ai_summary {
                    page_config.ai_summary = v;
                }
            }
            if let Some(tz) = data.tz_offset.as_ref().and_then(|v| v.as_f64()) {
                page_config.tz_offset = tz;
            }
        }

        Ok(page_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn service_for(body: serde_json::Value) -> (MockServer, PageConfigService) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pageConfig"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
        let config = ApiConfig {
            api_base: server.uri(),
        };
        let service = PageConfigService::new(&config);
        (server, service)
    }

    #[tokio::test]
    async fn test_success_overlays_flags() {
        let (_server, service) = service_for(serde_json::json!({
            "success": true,
            "config": {"WEB_COMMENT": false},
            "tzOffset": 2
        }))
        .await;

        let page_config = service.fetch().await.unwrap();
        assert!(page_config.device_count);
        assert!(!page_config.comment);
        assert!(page_config.ai_summary);
        assert_eq!(page_config.tz_offset, 2.0);
    }

    #[tokio::test]
    async fn test_non_success_keeps_defaults() {
        let (_server, service) = service_for(serde_json::json!({
            "success": false,
            "config": {"WEB_COMMENT": false}
        }))
        .await;

        let page_config = service.fetch().await.unwrap();
        assert_eq!(page_config, PageConfig::default());
    }

    #[tokio::test]
    async fn test_non_numeric_tz_offset_ignored() {
        let (_server, service) = service_for(serde_json::json!({
            "success": true,
            "tzOffset": "east-8"
        }))
        .await;

        let page_config = service.fetch().await.unwrap();
        assert_eq!(page_config.tz_offset, 8.0);
    }

    #[tokio::test]
    async fn test_http_error_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pageConfig"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let config = ApiConfig {
            api_base: server.uri(),
        };
        let err = PageConfigService::new(&config).fetch().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }
}
