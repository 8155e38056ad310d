//! # Core Module / 核心模块
//!
//! This module contains the core functionality of dyntest,
//! including data models, configuration, outcome classification
//! and the sequential `TestRunner`.
//!
//! 此模块包含 dyntest 的核心功能，
//! 包括数据模型、配置、结果分类以及顺序执行的 `TestRunner`。

pub mod config;
pub mod models;
pub mod outcome;
pub mod runner;

// Re-exports
pub use config::DynTestConfig;
pub use models::{Summary, TestResult};
pub use outcome::{IntoOutcome, Outcome};
pub use runner::{SilentPanics, TestRunner};
