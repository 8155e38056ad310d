//! # Reporting Module / 报告模块
//!
//! This module handles the generation and display of session reports in multiple formats.
//! It provides colorful, localized console output, a machine-readable JSON document and
//! a standalone HTML page.
//!
//! 此模块处理多种格式的会话报告生成和显示。
//! 它提供彩色的本地化控制台输出、机器可读的 JSON 文档和独立的 HTML 页面。

pub mod console;
pub mod html;
pub mod json;

// Re-export common reporting functions
pub use console::{print_report, print_verdict, render_report};
pub use html::generate_html_report;
pub use json::write_json_report;
