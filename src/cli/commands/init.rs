//! # Config Initialization Module / 配置初始化模块
//!
//! This module provides functionality for creating a new `DynTest.toml`
//! session configuration, either with built-in defaults or through an
//! interactive command-line wizard.
//!
//! 此模块提供创建新的 `DynTest.toml` 会话配置的功能，
//! 可以使用内置默认值，也可以通过交互式命令行向导。
//!
//! ## Features / 功能特性
//!
//! - **Interactive Wizard**: Step-by-step prompts for language, seed, sizes and suites
//! - **Overwrite Protection**: Confirmation prompts before overwriting existing configurations
//!
//! - **交互式向导**: 逐步提示语言、种子、规模和套件
//! - **覆盖保护**: 覆盖现有配置前的确认提示

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, MultiSelect, theme::ColorfulTheme};
use std::fs;
use std::path::Path;

use crate::core::config::{self, DynTestConfig};
use crate::infra::t;
use crate::suites::Suite;

/// Writes a new configuration file at `config_path`.
///
/// In non-interactive mode the defaults are written and an existing file is
/// never overwritten. Otherwise the user is asked before overwriting and
/// then walked through the settings.
///
/// 在 `config_path` 写入新的配置文件。
/// 非交互模式下写入默认值，且从不覆盖已有文件；交互模式下会先询问是否覆盖，
/// 然后引导用户完成各项设置。
pub fn run_init_wizard(config_path: &Path, non_interactive: bool) -> Result<()> {
    if non_interactive {
        if config_path.exists() {
            println!(
                "{}",
                t!("init.already_exists", path = config_path.display()).yellow()
            );
            return Ok(());
        }
        return write_config(config_path, &DynTestConfig::default());
    }

    let theme = ColorfulTheme::default();
    println!("\n{}", t!("init.wizard_welcome").cyan().bold());
    println!("{}", t!("init.wizard_description"));

    if config_path.exists() {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init.overwrite_prompt", path = config_path.display()))
            .default(false)
            .interact()
            .context(t!("init.user_confirmation_failed").to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted"));
            return Ok(());
        }
    }

    let config = prompt_config(&theme)?;
    write_config(config_path, &config)
}

fn prompt_config(theme: &ColorfulTheme) -> Result<DynTestConfig> {
    let defaults = DynTestConfig::default();

    let language: String = Input::with_theme(theme)
        .with_prompt(t!("init.language_prompt"))
        .default(rust_i18n::locale().to_string())
        .interact_text()?;

    let seed_text: String = Input::with_theme(theme)
        .with_prompt(t!("init.seed_prompt"))
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() || input.trim().parse::<u64>().is_ok() {
                Ok(())
            } else {
                Err(t!("init.seed_invalid").to_string())
            }
        })
        .interact_text()?;
    let seed = seed_text.trim().parse::<u64>().ok();

    let dynamic_tests: usize = Input::with_theme(theme)
        .with_prompt(t!("init.dynamic_tests_prompt"))
        .default(defaults.dynamic_tests)
        .interact_text()?;

    let workers: usize = Input::with_theme(theme)
        .with_prompt(t!("init.workers_prompt"))
        .default(defaults.workers)
        .interact_text()?;

    let selections = MultiSelect::with_theme(theme)
        .with_prompt(t!("init.suite_selection_prompt"))
        .items(&Suite::ALL.map(|s| s.as_str()))
        .defaults(&[true; Suite::ALL.len()])
        .interact()
        .context(t!("init.user_confirmation_failed").to_string())?;

    let suites = if selections.is_empty() {
        println!("{}", t!("init.no_suites_selected").yellow());
        defaults.suites.clone()
    } else {
        selections.into_iter().map(|i| Suite::ALL[i]).collect()
    };

    Ok(DynTestConfig {
        language,
        seed,
        dynamic_tests,
        workers,
        suites,
        ..defaults
    })
}

fn write_config(path: &Path, config: &DynTestConfig) -> Result<()> {
    let body = config::to_toml(config).context(t!("init.serialize_failed").to_string())?;
    let content = format!("# dyntest session configuration\n\n{body}");

    fs::write(path, content).with_context(|| t!("init.write_failed", path = path.display()).to_string())?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init.success_created", path = path.display()).bold()
    );
    println!("{}", t!("init.usage_hint"));

    Ok(())
}
