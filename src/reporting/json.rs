//! # JSON Reporting Module / JSON 报告模块
//!
//! Machine-readable session report: the summary, the success rate and the
//! full result history.
//!
//! 机器可读的会话报告：摘要、成功率和完整的结果历史。

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::models::{Summary, TestResult};
use crate::infra::fs::write_report;

/// The document written by [`write_json_report`].
/// [`write_json_report`] 写入的文档。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub generated_at: DateTime<Local>,
    /// Seed used by the randomized suites, if any / 随机套件使用的种子（如有）
    pub seed: Option<u64>,
    #[serde(flatten)]
    pub summary: Summary,
    /// `null` when no test ran / 没有运行任何测试时为 `null`
    pub success_rate: Option<f64>,
    pub results: Vec<TestResult>,
}

impl JsonReport {
    pub fn new(results: &[TestResult], seed: Option<u64>) -> Self {
        let summary = Summary::from_results(results);
        Self {
            generated_at: Local::now(),
            seed,
            summary,
            success_rate: summary.success_rate(),
            results: results.to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize JSON report")
    }
}

/// Writes the JSON report for `results` to `output_path`.
///
/// # Errors
/// Fails if serialization fails or the file cannot be written.
pub fn write_json_report(results: &[TestResult], seed: Option<u64>, output_path: &Path) -> Result<()> {
    let report = JsonReport::new(results, seed);
    write_report(output_path, &report.to_json()?)
}
