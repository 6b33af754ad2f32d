//! Prometheus Metrics Module
//!
//! 入场权利查询的核心指标
//!
//! ## 指标类型
//! - **Counter**: 查询总数（按入口与结果）、名单读取失败数
//! - **Histogram**: 名单查询耗时
//!
//! ## 使用示例
//! ```rust,ignore
//! use admission_check::shared::metrics::METRICS;
//!
//! METRICS.checks_total.with_label_values(&["get", "both"]).inc();
//!
//! let timer = METRICS.lookup_duration.with_label_values(&["found"]).start_timer();
//! // ... 扫描名单 ...
//! timer.observe_duration();
//! ```

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, Encoder, HistogramVec, TextEncoder,
};

lazy_static! {
    /// 全局Metrics实例
    pub static ref METRICS: Metrics = Metrics::new();
}

/// 查询服务指标
pub struct Metrics {
    /// 查询总数 (entry_point: get/post, outcome: both/entrance_only/none/not_found/rejected/error)
    pub checks_total: CounterVec,

    /// 名单不可用次数 (按错误类型)
    pub store_errors_total: CounterVec,

    /// 名单扫描耗时分布 (秒)
    pub lookup_duration: HistogramVec,
}

impl Metrics {
    /// 创建并注册指标
    pub fn new() -> Self {
        Self {
            checks_total: register_counter_vec!(
                "admission_check_checks_total",
                "Total number of access checks handled",
                &["entry_point", "outcome"]
            )
            .expect("register admission_check_checks_total"),

            store_errors_total: register_counter_vec!(
                "admission_check_store_errors_total",
                "Total number of record store read failures",
                &["kind"]
            )
            .expect("register admission_check_store_errors_total"),

            lookup_duration: register_histogram_vec!(
                "admission_check_lookup_duration_seconds",
                "Roster lookup duration in seconds",
                &["result"],
                vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]
            )
            .expect("register admission_check_lookup_duration_seconds"),
        }
    }

    /// 导出Prometheus格式的指标
    pub fn export(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = prometheus::gather();
        let mut buffer = vec![];
        if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
            tracing::warn!(error = %e, "metrics encoding failed");
            return String::new();
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checks_counter_exported() {
        // 全局实例在测试之间共享，只断言名称存在
        METRICS.checks_total.with_label_values(&["get", "both"]).inc();

        let output = METRICS.export();
        assert!(output.contains("admission_check_checks_total"));
    }

    #[test]
    fn test_lookup_histogram_exported() {
        METRICS
            .lookup_duration
            .with_label_values(&["found"])
            .observe(0.002);

        let output = METRICS.export();
        assert!(output.contains("admission_check_lookup_duration_seconds"));
    }
}
