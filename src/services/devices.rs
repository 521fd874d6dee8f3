//! 设备目录服务
//!
//! 拉取设备列表与客户端 IP。按配置可在列表头部插入虚拟的
//! "summary" 总览设备，代表全部设备合并视图。

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// 总览虚拟设备的 ID
pub const OVERVIEW_DEVICE_ID: &str = "summary";

/// 总览设备的占位"当前应用"文案
const OVERVIEW_CURRENT_APP: &str = "不告诉你";

/// 单个设备的目录信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    /// 设备 ID
    pub device: String,
    /// 当前前台应用（设备离线或总览设备时可能缺失）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_app: Option<String>,
}

/// 是否存在真实设备（任何非 summary 条目）
pub fn has_real_devices(devices: &[DeviceInfo]) -> bool {
    devices.iter().any(|d| d.device != OVERVIEW_DEVICE_ID)
}

/// 按 ID 查找设备
pub fn find_device<'a>(devices: &'a [DeviceInfo], device_id: &str) -> Option<&'a DeviceInfo> {
    devices.iter().find(|d| d.device == device_id)
}

/// 设备目录客户端
pub struct DeviceDirectory {
    http_client: reqwest::Client,
    api_base: String,
}

impl DeviceDirectory {
    /// 创建新的设备目录客户端
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    /// 获取设备列表
    ///
    /// # Arguments
    /// * `show_summary` - 为 true 时在列表头部插入总览虚拟设备
    pub async fn fetch_devices(&self, show_summary: bool) -> Result<Vec<DeviceInfo>, ApiError> {
        let url = format!("{}/devices", self.api_base);
        debug!(%url, "fetching device list");

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

        let mut devices: Vec<DeviceInfo> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        if show_summary {
            devices.insert(
                0,
                DeviceInfo {
                    device: OVERVIEW_DEVICE_ID.to_string(),
                    current_app: Some(OVERVIEW_CURRENT_APP.to_string()),
                },
            );
        }

        Ok(devices)
    }

    /// 获取客户端 IP 地址
    ///
    /// 响应缺少 `ip` 字段时返回 `未知`。
    pub async fn fetch_client_ip(&self) -> Result<String, ApiError> {
        let url = format!("{}/ip", self.api_base);

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

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(data
            .get("ip")
            .and_then(|v| v.as_str())
            .unwrap_or("未知")
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> ApiConfig {
        ApiConfig {
            api_base: server.uri(),
        }
    }

    #[tokio::test]
    async fn test_fetch_devices_without_summary() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"device": "phone-1", "currentApp": "微信"},
                {"device": "pc-1"}
            ])))
            .mount(&server)
            .await;

        let directory = DeviceDirectory::new(&config_for(&server));
        let devices = directory.fetch_devices(false).await.unwrap();

        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].device, "phone-1");
        assert_eq!(devices[0].current_app.as_deref(), Some("微信"));
        assert_eq!(devices[1].current_app, None);
        assert!(has_real_devices(&devices));
    }

    #[tokio::test]
    async fn test_fetch_devices_prepends_overview() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{"device": "phone-1"}])),
            )
            .mount(&server)
            .await;

        let directory = DeviceDirectory::new(&config_for(&server));
        let devices = directory.fetch_devices(true).await.unwrap();

        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].device, OVERVIEW_DEVICE_ID);
        assert_eq!(devices[0].current_app.as_deref(), Some("不告诉你"));
        assert!(find_device(&devices, "phone-1").is_some());
    }

    #[tokio::test]
    async fn test_fetch_devices_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let directory = DeviceDirectory::new(&config_for(&server));
        let err = directory.fetch_devices(false).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_fetch_client_ip_missing_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ip"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let directory = DeviceDirectory::new(&config_for(&server));
        let ip = directory.fetch_client_ip().await.unwrap();
        assert_eq!(ip, "未知");
    }

    #[test]
    fn test_has_real_devices_overview_only() {
        let devices = vec![DeviceInfo {
            device: OVERVIEW_DEVICE_ID.to_string(),
            current_app: None,
        }];
        assert!(!has_real_devices(&devices));
    }
}
