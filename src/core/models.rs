//! # Data Models Module / 数据模型模块
//!
//! This module defines the records produced by a test session: one
//! `TestResult` per executed test body and the `Summary` computed from them.
//!
//! 此模块定义测试会话产生的记录：每个已执行测试体对应一个 `TestResult`，
//! 以及由它们计算得出的 `Summary`。

use serde::{Deserialize, Serialize};
use std::process::ExitCode;
use std::time::Duration;

/// The message stored for every passing test.
/// 每个通过的测试所存储的消息。
pub const OK_MESSAGE: &str = "OK";

/// The recorded outcome of a single test invocation.
/// Created once by the runner and never mutated afterwards.
///
/// 单次测试调用的记录结果。
/// 由运行器创建一次，之后不再修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Display name of the test / 测试的显示名称
    pub name: String,
    /// Free-form grouping label, only used for reporting / 自由格式的分组标签，仅用于报告
    pub category: String,
    /// Whether the test passed / 测试是否通过
    pub passed: bool,
    /// `"OK"` on success, otherwise the failure detail / 成功时为 `"OK"`，否则为失败详情
    pub message: String,
    /// Wall-clock time of the single invocation / 单次调用的耗时
    #[serde(with = "duration_secs")]
    pub execution_time: Duration,
}

impl TestResult {
    /// Elapsed time in milliseconds, as shown in reports.
    pub fn execution_millis(&self) -> f64 {
        self.execution_time.as_secs_f64() * 1000.0
    }
}

/// Aggregate counts over a result history.
/// 结果历史的汇总计数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    /// Counts passes and failures in `results`.
    /// 统计 `results` 中通过和失败的数量。
    pub fn from_results(results: &[TestResult]) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total,
            passed,
            failed: total - passed,
        }
    }

    /// Percentage of passed tests, or `None` when nothing ran.
    ///
    /// 通过测试的百分比；若没有执行任何测试则返回 `None`。
    pub fn success_rate(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.passed as f64 / self.total as f64 * 100.0)
        }
    }

    /// A run is successful when nothing failed, including the empty run.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status for this summary.
    /// 此摘要对应的进程退出状态。
    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }

    /// Success rate formatted with one decimal, or `N/A`.
    pub fn success_rate_display(&self) -> String {
        self.success_rate()
            .map(|rate| format!("{rate:.1}%"))
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// Serializes a `Duration` as fractional seconds.
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
