//! # Line Analysis Module / 行分析模块
//!
//! Classifies the lines of source files as code, comment or blank and
//! aggregates the counts over a directory tree.
//!
//! 将源文件的行分类为代码、注释或空行，并在目录树上汇总计数。

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::ops::AddAssign;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::stats::languages::{IGNORED_DIRS, LanguageSpec, language_for_extension};

/// Line counts of a single file, or of many files summed.
/// 单个文件（或多个文件之和）的行数统计。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileStats {
    pub lines: usize,
    pub code: usize,
    pub comments: usize,
    pub blanks: usize,
}

impl AddAssign for FileStats {
    fn add_assign(&mut self, other: Self) {
        self.lines += other.lines;
        self.code += other.code;
        self.comments += other.comments;
        self.blanks += other.blanks;
    }
}

/// Per-language totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LanguageStats {
    pub lines: usize,
    pub code: usize,
    pub files: usize,
}

/// Aggregated statistics of a directory tree.
/// 目录树的汇总统计。
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectStats {
    pub total: FileStats,
    pub file_count: usize,
    pub by_language: BTreeMap<String, LanguageStats>,
    /// Relative path and line count, largest first / 相对路径和行数，按从大到小排列
    pub largest_files: Vec<(PathBuf, usize)>,
}

impl ProjectStats {
    /// Share of code lines in percent, 0 for an empty tree.
    pub fn code_percent(&self) -> f64 {
        percent(self.total.code, self.total.lines)
    }

    /// Share of comment lines in percent, 0 for an empty tree.
    pub fn comment_percent(&self) -> f64 {
        percent(self.total.comments, self.total.lines)
    }

    /// Average lines per file, 0 when no file was counted.
    pub fn average_file_size(&self) -> usize {
        self.total.lines.checked_div(self.file_count).unwrap_or(0)
    }

    /// Languages ordered by line count, largest first.
    pub fn languages_by_lines(&self) -> Vec<(&str, &LanguageStats)> {
        let mut languages: Vec<_> = self
            .by_language
            .iter()
            .map(|(name, stats)| (name.as_str(), stats))
            .collect();
        languages.sort_by(|a, b| b.1.lines.cmp(&a.1.lines).then_with(|| a.0.cmp(b.0)));
        languages
    }

    fn record(&mut self, spec: &LanguageSpec, relative: PathBuf, stats: FileStats) {
        self.total += stats;
        self.file_count += 1;
        let language = self.by_language.entry(spec.name.to_string()).or_default();
        language.lines += stats.lines;
        language.code += stats.code;
        language.files += 1;
        self.largest_files.push((relative, stats.lines));
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Classifies every line of `content` according to `spec`.
///
/// A line inside a block comment is a comment until the closing delimiter
/// shows up. A line containing the opening delimiter is a comment and opens
/// a block unless the closing delimiter follows it on the same line.
///
/// 根据 `spec` 对 `content` 的每一行进行分类。
pub fn analyze_content(content: &str, spec: &LanguageSpec) -> FileStats {
    let mut stats = FileStats::default();
    let mut in_block = false;

    for line in content.lines() {
        stats.lines += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            stats.blanks += 1;
            continue;
        }

        if let Some((start, end)) = spec.block {
            if in_block {
                stats.comments += 1;
                if line.contains(end) {
                    in_block = false;
                }
                continue;
            }
            if let Some(pos) = line.find(start) {
                stats.comments += 1;
                if !line[pos + start.len()..].contains(end) {
                    in_block = true;
                }
                continue;
            }
        }

        if spec.line_markers.iter().any(|m| trimmed.starts_with(m)) {
            stats.comments += 1;
        } else {
            stats.code += 1;
        }
    }
    stats
}

/// Reads and classifies a file. Unreadable files count as empty;
/// invalid UTF-8 is replaced rather than rejected.
pub fn analyze_file(path: &Path, spec: &LanguageSpec) -> FileStats {
    match fs::read(path) {
        Ok(bytes) => analyze_content(&String::from_utf8_lossy(&bytes), spec),
        Err(_) => FileStats::default(),
    }
}

fn is_ignored(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| IGNORED_DIRS.contains(&name))
}

fn spec_for(path: &Path) -> Option<LanguageSpec> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    language_for_extension(&ext)
}

/// Walks `root` and aggregates the statistics of every recognized file.
///
/// # Errors
/// Fails when `root` itself cannot be read. Unreadable entries below it
/// are skipped.
///
/// 遍历 `root` 并汇总每个可识别文件的统计信息。
pub fn scan_tree(root: &Path) -> Result<ProjectStats> {
    fs::read_dir(root).with_context(|| format!("Failed to read directory: {}", root.display()))?;

    let mut stats = ProjectStats::default();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_ignored(e))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file());

    for entry in walker {
        let path = entry.path();
        let Some(spec) = spec_for(path) else {
            continue;
        };
        let file_stats = analyze_file(path, &spec);
        let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        stats.record(&spec, relative, file_stats);
    }

    stats
        .largest_files
        .sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(stats)
}
