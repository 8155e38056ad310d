//! # Count Command Module / 统计命令模块
//!
//! Implements the `count` command: scans a directory tree, prints the line
//! totals per language and optionally appends them to a markdown log.
//!
//! 实现 `count` 命令：扫描目录树，按语言打印行数总计，并可选择追加到 markdown 日志中。

use anyhow::{Result, bail};
use chrono::Local;
use colored::*;
use std::path::Path;

use crate::{
    infra::{
        fs::{absolute_path, append_to_file, is_directory},
        t,
    },
    stats::{ProjectStats, markdown, scan_tree},
};

/// Executes the count command.
///
/// # Arguments
/// * `root` - Directory to scan
/// * `output` - Markdown file to append the statistics to
/// * `top` - Number of largest files listed in the markdown details
pub fn execute(root: &Path, output: Option<&Path>, top: usize) -> Result<()> {
    if !is_directory(root) {
        bail!(t!("count.not_a_directory", path = root.display()).to_string());
    }
    let root = absolute_path(root)?;

    println!("{}", t!("count.scanning", path = root.display()).cyan());
    let stats = scan_tree(&root)?;
    print_stats(&stats);

    if let Some(output) = output {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let mut content = String::new();
        if !output.exists() {
            content.push_str(markdown::header());
        }
        content.push_str(&markdown::summary_row(&stats, &timestamp));
        content.push_str(&markdown::details(&stats, &timestamp, top));
        append_to_file(output, &content)?;
        println!(
            "{} {}",
            "✔".green(),
            t!("count.written", path = output.display())
        );
    }

    Ok(())
}

fn print_stats(stats: &ProjectStats) {
    println!(
        "{}",
        t!(
            "count.totals",
            files = stats.file_count,
            lines = markdown::thousands(stats.total.lines)
        )
        .bold()
    );
    println!(
        "{}",
        t!(
            "count.breakdown",
            code = stats.total.code,
            comments = stats.total.comments,
            blanks = stats.total.blanks,
            code_pct = format!("{:.1}", stats.code_percent()),
            comment_pct = format!("{:.1}", stats.comment_percent())
        )
    );

    if stats.by_language.is_empty() {
        return;
    }
    println!();
    println!("{:<14} {:>8} {:>10} {:>10}", "Language", "Files", "Lines", "Code");
    println!("{}", "-".repeat(45));
    for (name, language) in stats.languages_by_lines() {
        println!(
            "{} {:>8} {:>10} {:>10}",
            format!("{name:<14}").yellow(),
            language.files,
            markdown::thousands(language.lines),
            markdown::thousands(language.code)
        );
    }
}
