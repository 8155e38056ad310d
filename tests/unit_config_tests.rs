//! # Config Module Unit Tests / Config 模块单元测试
//!
//! Tests for loading, defaulting and round-tripping `DynTest.toml`.
//!
//! 测试 `DynTest.toml` 的加载、默认值和序列化。

mod common;

use common::write_config;
use dyntest::config::{
    DEFAULT_CONFIG_FILE, DynTestConfig, load_config, parse_config, resolve_config, to_toml,
};
use dyntest::suites::Suite;
use std::path::PathBuf;

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, DynTestConfig::default());
        assert_eq!(config.language, "en");
        assert_eq!(config.seed, None);
        assert_eq!(config.dynamic_tests, 5);
        assert_eq!(config.workers, 3);
        assert_eq!(config.suites, Suite::ALL.to_vec());
    }

    #[test]
    fn test_full_config() {
        let config = parse_config(
            r#"
language = "zh-CN"
seed = 42
dynamic_tests = 12
workers = 2
suites = ["smoke", "edge_cases"]

[report]
json = "out/report.json"
html = "out/report.html"
"#,
        )
        .unwrap();

        assert_eq!(config.language, "zh-CN");
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.dynamic_tests, 12);
        assert_eq!(config.workers, 2);
        assert_eq!(config.suites, vec![Suite::Smoke, Suite::EdgeCases]);
        assert_eq!(config.report.json, Some(PathBuf::from("out/report.json")));
        assert_eq!(config.report.html, Some(PathBuf::from("out/report.html")));
    }

    #[test]
    fn test_unknown_suite_is_rejected() {
        assert!(parse_config("suites = [\"database\"]").is_err());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(parse_config("seed = [").is_err());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = DynTestConfig {
            seed: Some(7),
            suites: vec![Suite::Dynamic],
            ..DynTestConfig::default()
        };
        let text = to_toml(&config).unwrap();
        assert!(text.contains("seed = 7"));
        assert_eq!(parse_config(&text).unwrap(), config);
    }
}

#[cfg(test)]
mod resolve_tests {
    use super::*;

    #[test]
    fn test_missing_default_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let (config, source) = resolve_config(&path, false).unwrap();
        assert_eq!(config, DynTestConfig::default());
        assert_eq!(source, None);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(resolve_config(&path, true).is_err());
    }

    #[test]
    fn test_existing_file_is_loaded() {
        let (_dir, path) = write_config("seed = 99\n");
        let (config, source) = resolve_config(&path, false).unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(source, Some(path));
    }

    #[test]
    fn test_load_error_names_the_file() {
        let (_dir, path) = write_config("workers = \"many\"\n");
        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("DynTest.toml"));
    }
}
