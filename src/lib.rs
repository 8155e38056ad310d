//! # dyntest Library / dyntest 库
//!
//! This library provides a sequential test harness that runs named test
//! bodies, times them, classifies each as passed or failed and reports the
//! results, together with the built-in verification suites that use it and
//! a source line counter.
//!
//! 此库提供一个顺序执行的测试框架：运行具名测试体、计时、将每个测试分类为
//! 通过或失败并报告结果；同时提供使用它的内置验证套件和源代码行数统计工具。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, configuration and the `TestRunner`
//! - `suites` - Built-in verification suites
//! - `reporting` - Console, JSON and HTML reports
//! - `stats` - Source line counting
//! - `infra` - File system helpers and i18n
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、配置和 `TestRunner`
//! - `suites` - 内置验证套件
//! - `reporting` - 控制台、JSON 和 HTML 报告
//! - `stats` - 源代码行数统计
//! - `infra` - 文件系统辅助功能和国际化
//! - `cli` - 命令行接口和命令
//!
//! ## Example / 示例
//!
//! ```no_run
//! use dyntest::TestRunner;
//!
//! let mut runner = TestRunner::with_locale("en");
//! runner.run_test("addition", "Arithmetic", || 2 + 2 == 4);
//! runner.run_test("parse", "Errors", || "42".parse::<i32>().map(|_| ()));
//! let summary = runner.report();
//! std::process::exit(if summary.failed == 0 { 0 } else { 1 });
//! ```

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;
pub mod stats;
pub mod suites;

// Re-export commonly used items
pub use core::config;
pub use core::models::{Summary, TestResult};
pub use core::outcome::{IntoOutcome, Outcome};
pub use core::runner::{SilentPanics, TestRunner};

/// Sets the global locale for messages and returns the locale in use.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "zh" from "zh-TW"), and finally falls back to "en".
pub fn init_locale(requested: &str) -> String {
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&requested) {
        requested.to_string()
    } else {
        let code = requested.split(['-', '_']).next().unwrap_or_default();
        available_locales
            .iter()
            .find(|candidate| **candidate == code || candidate.split('-').next() == Some(code))
            .map(|candidate| candidate.to_string())
            .unwrap_or_else(|| "en".to_string())
    };

    rust_i18n::set_locale(&lang);
    lang
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
