//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command, which executes the selected
//! verification suites on one `TestRunner` and reports the results.
//!
//! 此模块实现了 `run` 命令，在一个 `TestRunner` 上执行所选的验证套件并报告结果。

use anyhow::Result;
use colored::*;
use std::path::{Path, PathBuf};

use crate::{
    core::{
        config,
        models::Summary,
        runner::{SilentPanics, TestRunner},
    },
    infra::{fs::expand_path, t},
    reporting::{generate_html_report, print_verdict, write_json_report},
    suites::{self, Suite, SuiteContext},
};

/// Options of one `run` invocation, as parsed from the command line.
/// 一次 `run` 调用的选项，从命令行解析而来。
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Path of the session configuration / 会话配置路径
    pub config: PathBuf,
    /// Whether `config` was given on the command line / `config` 是否在命令行中显式给出
    pub config_explicit: bool,
    /// Language requested with `--lang` / 通过 `--lang` 指定的语言
    pub lang: Option<String>,
    pub seed: Option<u64>,
    pub dynamic_tests: Option<usize>,
    pub suites: Option<Vec<Suite>>,
    pub json: Option<PathBuf>,
    pub html: Option<PathBuf>,
    pub no_color: bool,
}

/// Executes the run command with the provided options.
///
/// Command-line values take precedence over the configuration file, which
/// takes precedence over the built-in defaults.
///
/// # Returns
/// The summary of the session. Test failures are not errors; only an
/// unreadable configuration is.
///
/// 使用提供的选项执行运行命令。命令行的值优先于配置文件，配置文件优先于内置默认值。
/// 测试失败不会作为错误返回；只有无法读取的配置才会。
pub fn execute(options: RunOptions) -> Result<Summary> {
    if options.no_color {
        colored::control::set_override(false);
    }

    let (config, config_path) = config::resolve_config(&options.config, options.config_explicit)?;

    let requested_locale = match (&options.lang, &config_path) {
        (Some(lang), _) => lang.clone(),
        (None, Some(_)) => config.language.clone(),
        (None, None) => rust_i18n::locale().to_string(),
    };
    let locale = crate::init_locale(&requested_locale);

    match &config_path {
        Some(path) => println!("{}", t!("run.config_loaded", locale = locale, path = path.display())),
        None => println!("{}", t!("run.config_default", locale = locale)),
    }

    let seed = options
        .seed
        .or(config.seed)
        .unwrap_or_else(rand::random::<u64>);
    let ctx = SuiteContext {
        seed,
        dynamic_tests: options.dynamic_tests.unwrap_or(config.dynamic_tests),
        workers: config.workers.max(1),
    };
    let selected = options.suites.clone().unwrap_or_else(|| config.suites.clone());

    println!("{}", t!("run.seed", locale = locale, seed = seed).cyan());
    println!(
        "{}",
        t!("run.suites", locale = locale, suites = suite_list(&selected)).cyan()
    );

    let mut runner = TestRunner::with_locale(&locale);
    let quiet = SilentPanics::install();
    for suite in &selected {
        println!(
            "\n{}",
            t!("run.suite_banner", locale = locale, suite = suite.as_str()).bold()
        );
        suites::register(*suite, &mut runner, &ctx);
    }
    drop(quiet);

    let summary = runner.report();
    print_verdict(&summary, &locale);

    if let Some(path) = options.json.as_ref().or(config.report.json.as_ref()) {
        if let Some(target) = write_report_file(path, &locale, |target| {
            write_json_report(runner.results(), Some(seed), target)
        }) {
            println!("{}", t!("run.json_written", locale = locale, path = target.display()));
        }
    }
    if let Some(path) = options.html.as_ref().or(config.report.html.as_ref()) {
        if let Some(target) = write_report_file(path, &locale, |target| {
            generate_html_report(runner.results(), target, &locale)
        }) {
            println!("{}", t!("run.html_written", locale = locale, path = target.display()));
        }
    }

    Ok(summary)
}

fn suite_list(suites: &[Suite]) -> String {
    if suites.is_empty() {
        return "-".to_string();
    }
    suites
        .iter()
        .map(Suite::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Writes one report file and returns where it landed. A failure is printed
/// but does not change the outcome of the session.
fn write_report_file<F>(path: &Path, locale: &str, write: F) -> Option<PathBuf>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let result = expand_path(path).and_then(|target| write(&target).map(|()| target));
    match result {
        Ok(target) => Some(target),
        Err(e) => {
            eprintln!(
                "{} {:#}",
                t!("run.report_failed", locale = locale, path = path.display()).red(),
                e
            );
            None
        }
    }
}
