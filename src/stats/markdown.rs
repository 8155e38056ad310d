//! # Markdown Statistics / Markdown 统计
//!
//! Markdown rendering of project statistics.
//!
//! 项目统计信息的 markdown 渲染。

use std::fmt::Write;

use crate::stats::analyze::ProjectStats;

const LINES_PER_PAGE: usize = 50;
const PAPER_THICKNESS_MM: f64 = 0.1;
const TYPING_WPM: f64 = 40.0;
const WORDS_PER_LINE: f64 = 5.0;
const SHEETS_PER_TREE: f64 = 8333.0;
const PIE_LANGUAGES: usize = 8;

/// Tongue-in-cheek physical equivalents of a line count.
/// 行数对应的一些趣味物理量。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunStats {
    pub pages: usize,
    pub stack_height_cm: f64,
    pub typing_hours: f64,
    pub tree_impact: f64,
}

impl FunStats {
    pub fn from_lines(total_lines: usize) -> Self {
        let pages = total_lines.div_ceil(LINES_PER_PAGE);
        let typing_minutes = total_lines as f64 * WORDS_PER_LINE / TYPING_WPM;
        Self {
            pages,
            stack_height_cm: round_to(pages as f64 * PAPER_THICKNESS_MM / 10.0, 2),
            typing_hours: round_to(typing_minutes / 60.0, 1),
            tree_impact: round_to(pages as f64 / SHEETS_PER_TREE, 4),
        }
    }
}

fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// Formats an integer with `,` thousands separators.
pub fn thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Header written once, when the statistics file is created.
pub fn header() -> &'static str {
    "# Project Statistics & Insights\n\n\
     > \"Data beats opinion.\"\n\n\
     | Timestamp | Total Lines | Code vs Comments | Paper Estimate |\n\
     |---|---|---|---|\n"
}

/// One summary row for the header table.
pub fn summary_row(stats: &ProjectStats, timestamp: &str) -> String {
    let fun = FunStats::from_lines(stats.total.lines);
    format!(
        "| {} | **{}** | {:.1}% / {:.1}% | {} pages |\n",
        timestamp,
        thousands(stats.total.lines),
        stats.code_percent(),
        stats.comment_percent(),
        thousands(fun.pages)
    )
}

/// Mermaid pie chart of the languages with the most lines.
pub fn mermaid_pie(stats: &ProjectStats) -> String {
    let mut chart = String::from("```mermaid\npie title Language Distribution (Lines)\n");
    for (name, language) in stats
        .languages_by_lines()
        .into_iter()
        .take(PIE_LANGUAGES)
        .filter(|(_, l)| l.lines > 0)
    {
        let _ = writeln!(chart, "    \"{name}\" : {}", language.lines);
    }
    chart.push_str("```");
    chart
}

/// The collapsible detail block appended after each summary row.
/// 每个摘要行之后追加的可折叠详情块。
pub fn details(stats: &ProjectStats, timestamp: &str, top: usize) -> String {
    let fun = FunStats::from_lines(stats.total.lines);
    let mut out = String::new();

    let _ = writeln!(out, "\n<details>");
    let _ = writeln!(out, "<summary><strong>Deep Dive: {timestamp}</strong></summary>\n");
    let _ = writeln!(out, "### Language Breakdown\n{}\n", mermaid_pie(stats));
    let _ = writeln!(out, "### Physical & Fun Metrics");
    let _ = writeln!(out, "| Metric | Value | Context |");
    let _ = writeln!(out, "|---|---|---|");
    let _ = writeln!(out, "| **Stack Height** | {} cm | Height if printed on A4 paper |", fun.stack_height_cm);
    let _ = writeln!(out, "| **Typing Time** | {} hours | Pure typing time at 40 WPM |", fun.typing_hours);
    let _ = writeln!(out, "| **Tree Cost** | {} trees | Paper needed to print this |", fun.tree_impact);
    let _ = writeln!(out, "| **Avg File Size** | {} lines | Complexity indicator |\n", stats.average_file_size());
    let _ = writeln!(out, "### Largest Files");
    let _ = writeln!(out, "| Rank | File | Lines |");
    let _ = writeln!(out, "|---|---|---|");
    for (rank, (path, lines)) in stats.largest_files.iter().take(top).enumerate() {
        let _ = writeln!(out, "| {} | `{}` | **{}** |", rank + 1, path.display(), thousands(*lines));
    }
    out.push_str("\n</details>\n\n---\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn fun_stats_round_pages_up() {
        let fun = FunStats::from_lines(101);
        assert_eq!(fun.pages, 3);
        assert_eq!(fun.stack_height_cm, 0.03);
    }
}
