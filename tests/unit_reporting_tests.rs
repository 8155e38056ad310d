//! # Reporting Unit Tests / 报告单元测试
//!
//! Tests for the console, JSON and HTML renderings of a result history.
//!
//! 测试结果历史的控制台、JSON 和 HTML 渲染。

mod common;

use common::make_result;
use dyntest::Summary;
use dyntest::reporting::console::{render_line, render_report};
use dyntest::reporting::html::render_html_report;
use dyntest::reporting::json::JsonReport;
use dyntest::reporting::{generate_html_report, write_json_report};

fn sample_results() -> Vec<dyntest::TestResult> {
    vec![
        make_result("overflow_handling", "Arithmetic", true, "OK"),
        make_result("unicode_encoding", "String", false, "round trip changed"),
        make_result("json", "Serialization", true, "OK"),
    ]
}

#[cfg(test)]
mod console_tests {
    use super::*;

    #[test]
    fn test_report_header_and_lines() {
        colored::control::set_override(false);
        let results = sample_results();
        let summary = Summary::from_results(&results);
        let text = render_report(&results, &summary, "en");

        assert!(text.contains(&"=".repeat(60)));
        assert!(text.contains("DYNAMIC TEST RESULTS - Rust"));
        assert!(text.contains("Total: 3 | Passed: 2 | Failed: 1"));
        assert!(text.contains("Success Rate: 66.7%"));
        assert!(text.contains("[PASS] Arithmetic: overflow_handling (1.50ms)"));
        assert!(text.contains("[FAIL] String: unicode_encoding (1.50ms)"));
        assert!(text.contains("       Error: round trip changed"));
    }

    #[test]
    fn test_lines_follow_result_order() {
        colored::control::set_override(false);
        let results = sample_results();
        let text = render_report(&results, &Summary::from_results(&results), "en");
        let first = text.find("overflow_handling").unwrap();
        let second = text.find("unicode_encoding").unwrap();
        let third = text.find("Serialization: json").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_passing_tests_have_no_error_line() {
        colored::control::set_override(false);
        let results = vec![make_result("ok", "Basic", true, "OK")];
        let text = render_report(&results, &Summary::from_results(&results), "en");
        assert!(!text.contains("Error:"));
    }

    #[test]
    fn test_empty_report_shows_not_applicable() {
        colored::control::set_override(false);
        let text = render_report(&[], &Summary::default(), "en");
        assert!(text.contains("Total: 0 | Passed: 0 | Failed: 0"));
        assert!(text.contains("Success Rate: N/A"));
    }

    #[test]
    fn test_report_in_chinese() {
        colored::control::set_override(false);
        let results = sample_results();
        let text = render_report(&results, &Summary::from_results(&results), "zh-CN");
        assert!(text.contains("成功率：66.7%"));
        assert!(text.contains("[失败] String: unicode_encoding"));
    }

    #[test]
    fn test_render_line_formats_millis() {
        colored::control::set_override(false);
        let line = render_line(&make_result("a", "B", true, "OK"), "en");
        assert_eq!(line, "[PASS] B: a (1.50ms)");
    }
}

#[cfg(test)]
mod json_tests {
    use super::*;

    #[test]
    fn test_json_document_shape() {
        let report = JsonReport::new(&sample_results(), Some(42));
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["seed"], 42);
        assert_eq!(value["total"], 3);
        assert_eq!(value["passed"], 2);
        assert_eq!(value["failed"], 1);
        assert_eq!(value["results"].as_array().unwrap().len(), 3);
        assert_eq!(value["results"][1]["name"], "unicode_encoding");
        assert_eq!(value["results"][1]["passed"], false);
        assert!((value["results"][0]["execution_time"].as_f64().unwrap() - 0.0015).abs() < 1e-9);
    }

    #[test]
    fn test_json_success_rate_is_null_without_tests() {
        let report = JsonReport::new(&[], None);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert!(value["success_rate"].is_null());
        assert_eq!(value["total"], 0);
    }

    #[test]
    fn test_json_report_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/report.json");
        write_json_report(&sample_results(), Some(1), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let report: JsonReport = serde_json::from_str(&text).unwrap();
        let names: Vec<_> = report.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["overflow_handling", "unicode_encoding", "json"]);
        assert_eq!(report.results[1].message, "round trip changed");
        assert_eq!(report.seed, Some(1));
        assert_eq!(report.summary, Summary::from_results(&sample_results()));
    }
}

#[cfg(test)]
mod html_tests {
    use super::*;

    #[test]
    fn test_html_contains_summary_and_rows() {
        let html = render_html_report(&sample_results(), "en").into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("DynTest Report"));
        assert!(html.contains("overflow_handling"));
        assert!(html.contains("status-cell status-Failed"));
        assert!(html.contains("toggleOutput('output-1')"));
        assert!(html.contains("round trip changed"));
        assert!(html.contains("66.7%"));
    }

    #[test]
    fn test_html_escapes_messages() {
        let results = vec![make_result("x", "Y", false, "<script>alert(1)</script>")];
        let html = render_html_report(&results, "en").into_string();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_html_report_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");
        generate_html_report(&sample_results(), &path, "en").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("unicode_encoding"));
    }
}
