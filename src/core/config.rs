//! # Configuration Module / 配置模块
//!
//! Loading of the `DynTest.toml` session configuration. Every field has a
//! default so that an empty file, or no file at all, is a valid session.
//!
//! 加载 `DynTest.toml` 会话配置。每个字段都有默认值，
//! 因此空文件或没有文件都是有效的会话配置。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;
use crate::suites::Suite;

/// Default file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "DynTest.toml";

/// Represents the whole session configuration, loaded from a TOML file.
/// 代表从 TOML 文件加载的整个会话配置。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DynTestConfig {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    #[serde(default = "default_language")]
    pub language: String,

    /// Seed for the randomized tests. A fresh seed is drawn when absent.
    /// 随机测试的种子。未指定时会随机生成一个。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Number of generated tests in the `dynamic` suite.
    /// `dynamic` 套件中生成的测试数量。
    #[serde(default = "default_dynamic_tests")]
    pub dynamic_tests: usize,

    /// Worker threads spawned by the threading smoke test.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Suites to run, in order.
    /// 要运行的套件，按顺序排列。
    #[serde(default = "default_suites")]
    pub suites: Vec<Suite>,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Optional report files written after a run.
/// 运行结束后写入的可选报告文件。
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Path of the JSON report / JSON 报告路径
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<PathBuf>,
    /// Path of the HTML report / HTML 报告路径
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<PathBuf>,
}

impl Default for DynTestConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            seed: None,
            dynamic_tests: default_dynamic_tests(),
            workers: default_workers(),
            suites: default_suites(),
            report: ReportConfig::default(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_dynamic_tests() -> usize {
    5
}

fn default_workers() -> usize {
    3
}

fn default_suites() -> Vec<Suite> {
    Suite::ALL.to_vec()
}

/// Reads and parses a configuration file.
///
/// # Errors
/// Fails when the file cannot be read or is not valid TOML for
/// `DynTestConfig`.
pub fn load_config(path: &Path) -> Result<DynTestConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| t!("config.read_failed", path = path.display()).to_string())?;
    parse_config(&content).with_context(|| t!("config.parse_failed", path = path.display()).to_string())
}

/// Parses configuration text.
/// 解析配置文本。
pub fn parse_config(content: &str) -> Result<DynTestConfig> {
    Ok(toml::from_str(content)?)
}

/// Resolves the configuration for a session.
///
/// An explicitly requested file must exist. The default file name is
/// optional: when it is missing the built-in defaults are used.
///
/// 解析会话使用的配置。显式指定的文件必须存在；默认文件名是可选的，
/// 缺失时使用内置默认值。
pub fn resolve_config(path: &Path, explicit: bool) -> Result<(DynTestConfig, Option<PathBuf>)> {
    if !explicit && !path.exists() {
        return Ok((DynTestConfig::default(), None));
    }
    let config = load_config(path)?;
    Ok((config, Some(path.to_path_buf())))
}

/// Serializes a configuration back to TOML text.
pub fn to_toml(config: &DynTestConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}
