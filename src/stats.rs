//! # Source Statistics Module / 源代码统计模块
//!
//! Counts code, comment and blank lines per language over a directory tree
//! and renders the totals for the console and as an appendable markdown log.
//!
//! 在目录树上按语言统计代码行、注释行和空行，
//! 并将总计渲染到控制台以及可追加的 markdown 日志中。

pub mod analyze;
pub mod languages;
pub mod markdown;

pub use analyze::{FileStats, LanguageStats, ProjectStats, analyze_content, scan_tree};
pub use languages::{LanguageSpec, language_for_extension};
