//! # Console Reporting Module / 控制台报告模块
//!
//! This module renders the end-of-session report for the console. It
//! provides colored, localized output for the header, per-test lines and
//! failure details.
//!
//! 此模块为控制台渲染会话结束报告。它为标题、每个测试的行和失败详情
//! 提供彩色的本地化输出。

use colored::*;
use std::fmt::Write;

use crate::core::models::{Summary, TestResult};
use crate::infra::t;

const BANNER_WIDTH: usize = 60;

/// Renders the full report as a string.
///
/// # Arguments / 参数
/// * `results` - The result history in execution order / 按执行顺序排列的结果历史
/// * `summary` - Counts computed from `results` / 由 `results` 计算出的计数
/// * `locale` - The language locale to use for messages / 用于消息的语言区域设置
///
/// # Output Format / 输出格式
/// ```text
/// ============================================================
///   DYNAMIC TEST RESULTS - Rust
/// ============================================================
///   Total: 3 | Passed: 2 | Failed: 1
///   Success Rate: 66.7%
/// ============================================================
///
/// [PASS] Arithmetic: overflow_handling (0.01ms)
/// [FAIL] String: unicode_encoding (0.02ms)
///        Error: round trip changed "..."
/// ```
pub fn render_report(results: &[TestResult], summary: &Summary, locale: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "  {}", t!("report.title", locale = locale).bold());
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "  {}",
        t!(
            "report.totals",
            locale = locale,
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed
        )
    );
    let _ = writeln!(
        out,
        "  {}",
        t!("report.success_rate", locale = locale, rate = summary.success_rate_display())
    );
    let _ = writeln!(out, "{rule}\n");

    if results.is_empty() {
        let _ = writeln!(out, "{}", t!("report.no_results", locale = locale).dimmed());
    }

    for result in results {
        let _ = writeln!(out, "{}", render_line(result, locale));
        if !result.passed {
            let _ = writeln!(
                out,
                "       {}",
                t!("report.error_line", locale = locale, message = &result.message)
            );
        }
    }
    out
}

/// Renders the one-line status of a single result.
/// 渲染单个结果的单行状态。
pub fn render_line(result: &TestResult, locale: &str) -> String {
    let marker = if result.passed {
        t!("report.pass_marker", locale = locale).green()
    } else {
        t!("report.fail_marker", locale = locale).red()
    };
    format!(
        "{} {}: {} ({:.2}ms)",
        marker,
        result.category,
        result.name,
        result.execution_millis()
    )
}

/// Prints the report to stdout.
/// 将报告打印到标准输出。
pub fn print_report(results: &[TestResult], summary: &Summary, locale: &str) {
    print!("{}", render_report(results, summary, locale));
}

/// Prints the closing verdict line.
pub fn print_verdict(summary: &Summary, locale: &str) {
    if summary.is_success() {
        println!("\n{}", t!("run.all_passed", locale = locale).green().bold());
    } else {
        println!(
            "\n{}",
            t!("run.some_failed", locale = locale, failed = summary.failed).red().bold()
        );
    }
}
