//! Health Check
//!
//! 提供服务健康状态，供负载均衡器和监控系统使用
//!
//! ## 健康检查端点
//! - `/health` - 状态与名单可读性
//! - `/health/ready` - 就绪检查（名单能否读取）
//! - `/health/live` - 存活检查（进程是否仍在运行）
//!
//! ## 响应格式
//! ```json
//! {
//!   "status": "healthy",
//!   "uptime_seconds": 3600,
//!   "version": "0.1.0",
//!   "timestamp": 1234567890,
//!   "details": { "sheet": "入場者リスト", "store_reachable": true, "row_count": 42 }
//! }
//! ```

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// 健康状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// 健康
    Healthy,
    /// 降级（名单读取失败，查询只能返回系统错误）
    Degraded,
}

/// 健康检查响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub uptime_seconds: u64,
    pub version: String,
    pub timestamp: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HealthDetails>,
}

/// 名单相关的详细信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthDetails {
    /// 读取的表名
    pub sheet: String,
    /// 最近一次读取是否成功
    pub store_reachable: bool,
    /// 行数（含表头），读取失败时为 0
    pub row_count: usize,
}

/// 健康检查器
pub struct HealthChecker {
    start_time: SystemTime,
    status: Arc<RwLock<HealthStatus>>,
    version: String,
}

impl HealthChecker {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            start_time: SystemTime::now(),
            status: Arc::new(RwLock::new(HealthStatus::Healthy)),
            version: version.into(),
        }
    }

    /// 运行时间（秒）
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time
            .elapsed()
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    fn current_timestamp() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    pub fn set_status(&self, status: HealthStatus) {
        *self.status.write() = status;
    }

    pub fn get_status(&self) -> HealthStatus {
        *self.status.read()
    }

    /// Records the outcome of a store probe. An unreadable roster degrades
    /// the service; it never marks the process unhealthy on its own.
    pub fn record_store_probe(&self, reachable: bool) -> HealthStatus {
        let status = if reachable {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        };
        self.set_status(status);
        status
    }

    pub fn check_health(&self) -> HealthResponse {
        HealthResponse {
            status: self.get_status(),
            uptime_seconds: self.uptime_seconds(),
            version: self.version.clone(),
            timestamp: Self::current_timestamp(),
            details: None,
        }
    }

    pub fn check_health_detailed(&self, details: HealthDetails) -> HealthResponse {
        HealthResponse {
            details: Some(details),
            ..self.check_health()
        }
    }

    /// 存活检查（liveness probe）
    pub fn check_liveness(&self) -> bool {
        true
    }

    /// 就绪检查（readiness probe），只有 Healthy 才接受流量
    pub fn check_readiness(&self) -> bool {
        matches!(self.get_status(), HealthStatus::Healthy)
    }
}

impl Default for HealthChecker {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_checker_creation() {
        let checker = HealthChecker::new("1.0.0");
        assert_eq!(checker.version, "1.0.0");
        assert_eq!(checker.get_status(), HealthStatus::Healthy);
    }

    #[test]
    fn test_store_probe_updates_status() {
        let checker = HealthChecker::new("1.0.0");

        assert_eq!(checker.record_store_probe(false), HealthStatus::Degraded);
        assert!(!checker.check_readiness());
        // 名单不可读时进程仍然存活
        assert!(checker.check_liveness());

        assert_eq!(checker.record_store_probe(true), HealthStatus::Healthy);
        assert!(checker.check_readiness());
    }

    #[test]
    fn test_health_response_detailed() {
        let checker = HealthChecker::new("1.0.0");
        let details = HealthDetails {
            sheet: "入場者リスト".to_string(),
            store_reachable: true,
            row_count: 3,
        };

        let response = checker.check_health_detailed(details.clone());
        assert_eq!(response.status, HealthStatus::Healthy);
        assert_eq!(response.version, "1.0.0");
        assert_eq!(response.details, Some(details));
    }

    #[test]
    fn test_serialization() {
        let response = HealthResponse {
            status: HealthStatus::Degraded,
            uptime_seconds: 3600,
            version: "1.0.0".to_string(),
            timestamp: 1234567890,
            details: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("degraded"));
        assert!(json.contains("3600"));
        assert!(!json.contains("details"));
    }
}
