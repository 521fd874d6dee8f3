//! Unified API error types
//!
//! Provides a single error type for every backend interaction:
//! the stats orchestrator, the device directory and the page
//! configuration service all report failures through [`ApiError`].

use thiserror::Error;

/// API-level error type
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, request aborted)
    #[error("网络错误: {0}")]
    Network(String),

    /// Non-2xx HTTP response
    #[error("HTTP {status}: {reason}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase (empty for unassigned codes)
        reason: String,
    },

    /// JSON decoding failure (body decode or shape mismatch)
    #[error("解析错误: {0}")]
    Parse(String),

    /// Caller passed an unsupported stats type
    #[error("未知的统计类型: {0}")]
    UnknownPeriodType(String),
}

impl ApiError {
    /// Create a status error from a reqwest status code
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        Self::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_display() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "网络错误: connection refused");
    }

    #[test]
    fn test_status_error_display() {
        let err = ApiError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn test_unknown_period_type_display() {
        let err = ApiError::UnknownPeriodType("yearly".to_string());
        assert_eq!(err.to_string(), "未知的统计类型: yearly");
    }
}
