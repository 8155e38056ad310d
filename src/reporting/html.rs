//! # HTML Reporting Module / HTML 报告模块
//!
//! This module handles the generation of standalone HTML session reports.
//! It creates a styled page with summary statistics, a results table in
//! execution order and collapsible failure messages.
//!
//! 此模块处理独立 HTML 会话报告的生成。
//! 它创建一个带有摘要统计、按执行顺序排列的结果表格和可折叠失败消息的样式化页面。

use anyhow::Result;
use chrono::Local;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::path::Path;

use crate::core::models::{Summary, TestResult};
use crate::infra::fs::write_report;
use crate::infra::t;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Embedded JavaScript for HTML report interactivity / HTML 报告交互性的嵌入式 JavaScript
const HTML_SCRIPT: &str = include_str!("assets/report.js");

/// Renders the HTML report for `results`.
///
/// 为 `results` 渲染 HTML 报告。
///
/// # Arguments / 参数
/// * `results` - The result history in execution order / 按执行顺序排列的结果历史
/// * `locale` - The locale to use for internationalization / 用于国际化的语言环境
pub fn render_html_report(results: &[TestResult], locale: &str) -> Markup {
    let summary = Summary::from_results(results);
    let title = t!("html_report.title", locale = locale).to_string();
    let generated = t!(
        "html_report.generated_at",
        locale = locale,
        time = Local::now().format("%Y-%m-%d %H:%M:%S")
    )
    .to_string();
    let toggle_label = t!("html_report.toggle_output", locale = locale).to_string();

    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
                style { (PreEscaped(HTML_STYLE)) }
            }
            body {
                h1 { (title) }
                div.meta { (generated) }
                div.summary-container {
                    (summary_item(summary.total, "", &t!("html_report.summary.total", locale = locale)))
                    (summary_item(summary.passed, "passed-text", &t!("html_report.summary.passed", locale = locale)))
                    (summary_item(summary.failed, "failed-text", &t!("html_report.summary.failed", locale = locale)))
                    div.summary-item {
                        span.count { (summary.success_rate_display()) }
                        span.label { (t!("html_report.summary.success_rate", locale = locale).to_string()) }
                    }
                }
                table {
                    thead {
                        tr {
                            th { (t!("html_report.table.category", locale = locale).to_string()) }
                            th { (t!("html_report.table.name", locale = locale).to_string()) }
                            th { (t!("html_report.table.status", locale = locale).to_string()) }
                            th.duration-cell { (t!("html_report.table.duration", locale = locale).to_string()) }
                        }
                    }
                    tbody {
                        @for (i, result) in results.iter().enumerate() {
                            @let output_id = format!("output-{i}");
                            tr {
                                td { (result.category) }
                                td { (result.name) }
                                td {
                                    div class=(status_class(result)) { (status_label(result, locale)) }
                                    @if !result.passed {
                                        div.output-toggle onclick=(format!("toggleOutput('{output_id}')")) { (toggle_label) }
                                    }
                                }
                                td.duration-cell { (format!("{:.2}ms", result.execution_millis())) }
                            }
                            @if !result.passed {
                                tr id=(output_id) style="display:none;" {
                                    td colspan="4" {
                                        pre.output-content { (result.message) }
                                    }
                                }
                            }
                        }
                    }
                }
                script { (PreEscaped(HTML_SCRIPT)) }
            }
        }
    }
}

/// Writes the HTML report for `results` to `output_path`.
///
/// # Errors / 错误
/// This function will return an error if the output file cannot be written.
///
/// 如果无法写入输出文件，此函数将返回错误。
pub fn generate_html_report(results: &[TestResult], output_path: &Path, locale: &str) -> Result<()> {
    let markup = render_html_report(results, locale);
    write_report(output_path, &markup.into_string())
}

fn summary_item(count: usize, class: &str, label: &str) -> Markup {
    let classes = if class.is_empty() {
        "count".to_string()
    } else {
        format!("count {class}")
    };
    html! {
        div.summary-item {
            span class=(classes) { (count) }
            span.label { (label) }
        }
    }
}

fn status_class(result: &TestResult) -> &'static str {
    if result.passed {
        "status-cell status-Passed"
    } else {
        "status-cell status-Failed"
    }
}

fn status_label(result: &TestResult, locale: &str) -> String {
    if result.passed {
        t!("html_report.status_passed", locale = locale).to_string()
    } else {
        t!("html_report.status_failed", locale = locale).to_string()
    }
}
