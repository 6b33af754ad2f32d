//! Observability Module
//!
//! 提供系统可观测性功能：
//! - Prometheus metrics导出
//! - 健康检查端点
//!
//! ## 模块结构
//! - `health` - 健康状态
//! - `endpoints` - HTTP 处理函数

pub mod endpoints;
pub mod health;

pub use health::{HealthChecker, HealthDetails, HealthResponse, HealthStatus};
