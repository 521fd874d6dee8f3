//! API 配置模块
//!
//! 管理后端 API 基础地址，支持从配置文件读取和保存，
//! 以及命令行 / 环境变量覆盖。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 开发环境 API 基础地址
pub const DEV_API_BASE: &str = "http://127.0.0.1:3000/api";

/// 生产环境 API 基础地址
pub const PROD_API_BASE: &str = "https://api-usage.1812z.top";

/// 配置文件名
const CONFIG_FILENAME: &str = "settings.yaml";

/// 配置目录下的应用子目录
const CONFIG_DIR_NAME: &str = "usage-dash";

/// API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API 基础地址（不含结尾斜杠）
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    DEV_API_BASE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
        }
    }
}

impl ApiConfig {
    /// 从配置目录加载配置
    ///
    /// # Arguments
    /// * `config_dir` - 配置目录路径
    ///
    /// # Returns
    /// 配置对象，如果文件不存在或无法解析则返回默认配置
    pub fn load(config_dir: &Path) -> Self {
        let config_path = config_dir.join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&config_path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// 保存配置到配置目录
    ///
    /// # Arguments
    /// * `config_dir` - 配置目录路径
    pub fn save(&self, config_dir: &Path) -> Result<(), String> {
        let config_path = config_dir.join(CONFIG_FILENAME);

        // 确保目录存在
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(&config_path, content)
            .map_err(|e| format!("Failed to write config file: {}", e))
    }

    /// 解析最终生效的配置
    ///
    /// 优先级: `--api-base` 参数 > `USAGE_DASH_API_BASE` 环境变量 >
    /// `USAGE_DASH_ENV=production`（选择生产地址）> 用户配置目录下的
    /// `settings.yaml` > 默认开发地址。
    pub fn resolve(flag_override: Option<String>) -> Self {
        if let Some(api_base) = flag_override {
            return Self { api_base };
        }

        if let Ok(api_base) = std::env::var("USAGE_DASH_API_BASE") {
            if !api_base.is_empty() {
                return Self { api_base };
            }
        }

        if std::env::var("USAGE_DASH_ENV").as_deref() == Ok("production") {
            return Self {
                api_base: PROD_API_BASE.to_string(),
            };
        }

        match dirs::config_dir() {
            Some(dir) => Self::load(&dir.join(CONFIG_DIR_NAME)),
            None => Self::default(),
        }
    }
}
