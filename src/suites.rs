//! # Built-in Suites / 内置测试套件
//!
//! Verification suites that register their tests with a [`TestRunner`].
//! They are ordinary callers of the harness: each one only uses
//! `TestRunner::run_test`.
//!
//! 向 [`TestRunner`] 注册测试的验证套件。它们只是框架的普通调用方，
//! 只使用 `TestRunner::run_test`。
//!
//! - `edge_cases` - Fixed checks on integer, float, string, collection and error behaviour
//! - `dynamic` - Seeded, randomly generated collection and fuzz tests
//! - `smoke` - Basic language/runtime smoke test
//!
//! - `edge_cases` - 整数、浮点数、字符串、集合和错误行为的固定检查
//! - `dynamic` - 基于种子随机生成的集合和模糊测试
//! - `smoke` - 基础语言/运行时冒烟测试

pub mod dynamic;
pub mod edge_cases;
pub mod smoke;

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::runner::TestRunner;

/// The suites shipped with dyntest.
/// dyntest 自带的测试套件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suite {
    EdgeCases,
    Dynamic,
    Smoke,
}

impl Suite {
    pub const ALL: [Suite; 3] = [Suite::EdgeCases, Suite::Dynamic, Suite::Smoke];

    pub fn as_str(&self) -> &'static str {
        match self {
            Suite::EdgeCases => "edge_cases",
            Suite::Dynamic => "dynamic",
            Suite::Smoke => "smoke",
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suite {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "edge_cases" => Ok(Suite::EdgeCases),
            "dynamic" => Ok(Suite::Dynamic),
            "smoke" => Ok(Suite::Smoke),
            other => bail!("unknown suite '{other}' (expected edge_cases, dynamic or smoke)"),
        }
    }
}

/// Parameters shared by all suites of one session.
/// 一个会话中所有套件共享的参数。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteContext {
    /// Seed for every random choice made by the suites / 套件中所有随机选择的种子
    pub seed: u64,
    /// Number of tests the `dynamic` suite generates / `dynamic` 套件生成的测试数量
    pub dynamic_tests: usize,
    /// Worker threads used by the threading smoke test / 线程冒烟测试使用的工作线程数
    pub workers: usize,
}

impl Default for SuiteContext {
    fn default() -> Self {
        Self {
            seed: 0,
            dynamic_tests: 5,
            workers: 3,
        }
    }
}

/// Registers and runs every test of `suite` on `runner`.
/// 在 `runner` 上注册并运行 `suite` 的所有测试。
pub fn register(suite: Suite, runner: &mut TestRunner, ctx: &SuiteContext) {
    match suite {
        Suite::EdgeCases => edge_cases::register(runner, ctx),
        Suite::Dynamic => dynamic::register(runner, ctx),
        Suite::Smoke => smoke::register(runner, ctx),
    }
}
