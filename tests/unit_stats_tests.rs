//! # Stats Unit Tests / 统计单元测试
//!
//! Tests for line classification, tree scanning and the markdown log.
//!
//! 测试行分类、目录树扫描和 markdown 日志。

mod common;

use common::setup_source_tree;
use dyntest::stats::markdown::{self, FunStats};
use dyntest::stats::analyze::analyze_file;
use dyntest::stats::{FileStats, analyze_content, language_for_extension, scan_tree};
use std::path::PathBuf;

#[cfg(test)]
mod classification_tests {
    use super::*;

    #[test]
    fn test_rust_lines() {
        let spec = language_for_extension("rs").unwrap();
        let stats = analyze_content("// a\nfn x() {}\n\n/* b\n c */\nlet y = 1;\n", &spec);
        assert_eq!(stats.lines, 6);
        assert_eq!(stats.code, 2);
        assert_eq!(stats.comments, 3);
        assert_eq!(stats.blanks, 1);
    }

    #[test]
    fn test_single_line_block_comment() {
        let spec = language_for_extension("c").unwrap();
        let stats = analyze_content("/* one */\nint x;\n", &spec);
        assert_eq!(stats.comments, 1);
        assert_eq!(stats.code, 1);
    }

    #[test]
    fn test_blank_lines_inside_block_are_blank() {
        let spec = language_for_extension("rs").unwrap();
        let stats = analyze_content("/*\n\n*/\n", &spec);
        assert_eq!(stats.blanks, 1);
        assert_eq!(stats.comments, 2);
    }

    #[test]
    fn test_sql_and_batch_markers() {
        let sql = language_for_extension("sql").unwrap();
        let stats = analyze_content("-- note\nSELECT 1;\n", &sql);
        assert_eq!((stats.comments, stats.code), (1, 1));

        let bat = language_for_extension("bat").unwrap();
        let stats = analyze_content("REM note\n:: other\necho hi\n", &bat);
        assert_eq!((stats.comments, stats.code), (2, 1));
    }

    #[test]
    fn test_markup_comments() {
        let html = language_for_extension("html").unwrap();
        let stats = analyze_content("<!-- start\nstill comment -->\n<p>hi</p>\n", &html);
        assert_eq!((stats.comments, stats.code), (2, 1));
    }

    #[test]
    fn test_unknown_extension() {
        assert!(language_for_extension("exe").is_none());
        assert!(language_for_extension("").is_none());
    }
}

#[cfg(test)]
mod scan_tests {
    use super::*;

    #[test]
    fn test_scan_counts_known_files_only() {
        let dir = setup_source_tree();
        let stats = scan_tree(dir.path()).unwrap();

        assert_eq!(stats.file_count, 2);
        assert_eq!(stats.total.lines, 11);
        assert_eq!(stats.total.code, 6);
        assert_eq!(stats.total.comments, 3);
        assert_eq!(stats.total.blanks, 2);

        let rust = &stats.by_language["Rust"];
        assert_eq!((rust.files, rust.lines, rust.code), (1, 6, 4));
        let python = &stats.by_language["Python"];
        assert_eq!((python.files, python.lines, python.code), (1, 5, 2));
    }

    #[test]
    fn test_largest_files_sorted_descending() {
        let dir = setup_source_tree();
        let stats = scan_tree(dir.path()).unwrap();
        assert_eq!(
            stats.largest_files,
            vec![
                (PathBuf::from("src").join("main.rs"), 6),
                (PathBuf::from("scripts").join("build.py"), 5),
            ]
        );
    }

    #[test]
    fn test_languages_by_lines() {
        let dir = setup_source_tree();
        let stats = scan_tree(dir.path()).unwrap();
        let names: Vec<_> = stats.languages_by_lines().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Rust", "Python"]);
        assert_eq!(stats.average_file_size(), 5);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_tree(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.c");
        std::fs::write(&path, b"\xff\xfe int x;\n// c\n").unwrap();

        let spec = language_for_extension("c").unwrap();
        let stats = analyze_file(&path, &spec);
        assert_eq!((stats.lines, stats.code, stats.comments), (2, 1, 1));

        let project = scan_tree(dir.path()).unwrap();
        assert_eq!(project.file_count, 1);
        assert_eq!(project.total, stats);
    }

    #[test]
    fn test_unreadable_file_counts_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let spec = language_for_extension("rs").unwrap();
        let stats = analyze_file(&dir.path().join("missing.rs"), &spec);
        assert_eq!(stats, FileStats::default());
    }

    #[test]
    fn test_empty_tree() {
        let dir = tempfile::tempdir().unwrap();
        let stats = scan_tree(dir.path()).unwrap();
        assert_eq!(stats.file_count, 0);
        assert_eq!(stats.code_percent(), 0.0);
        assert_eq!(stats.average_file_size(), 0);
    }
}

#[cfg(test)]
mod markdown_tests {
    use super::*;

    #[test]
    fn test_fun_stats() {
        let fun = FunStats::from_lines(5_000);
        assert_eq!(fun.pages, 100);
        assert_eq!(fun.stack_height_cm, 1.0);
        assert_eq!(fun.typing_hours, 10.4);
    }

    #[test]
    fn test_summary_row_and_details() {
        let dir = setup_source_tree();
        let stats = scan_tree(dir.path()).unwrap();

        let row = markdown::summary_row(&stats, "2024-01-01 00:00:00");
        assert!(row.starts_with("| 2024-01-01 00:00:00 | **11** |"));
        assert!(row.contains("54.5% / 27.3%"));
        assert!(row.ends_with("| 1 pages |\n"));

        let details = markdown::details(&stats, "2024-01-01 00:00:00", 1);
        assert!(details.contains("```mermaid"));
        assert!(details.contains("\"Rust\" : 6"));
        assert!(details.contains("| 1 | `"));
        assert!(!details.contains("| 2 | `"));
        assert!(details.trim_end().ends_with("---"));
    }

    #[test]
    fn test_header_has_table() {
        assert!(markdown::header().contains("| Timestamp | Total Lines |"));
    }
}
