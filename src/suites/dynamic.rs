//! # Dynamic Suite / 动态测试套件
//!
//! Randomly generated tests. Every choice (kind, size and data) derives
//! from the session seed, so the same seed always produces the same tests
//! with the same inputs.
//!
//! 随机生成的测试。所有选择（类型、规模和数据）都源自会话种子，
//! 因此相同的种子总是生成相同输入的相同测试。

use anyhow::{Result, ensure};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::collections::HashMap;
use std::fmt;

use crate::core::runner::TestRunner;
use crate::suites::SuiteContext;

/// What a generated test exercises.
/// 生成的测试所检验的内容。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicKind {
    /// Sort and aggregate a list of random integers / 对随机整数列表排序并聚合
    RandomList,
    /// Fill and read back a map of random values / 填充并读回随机值映射
    RandomMap,
    /// Lossy UTF-8 decoding of random bytes / 对随机字节进行有损 UTF-8 解码
    FuzzInput,
}

impl DynamicKind {
    const ALL: [DynamicKind; 3] = [
        DynamicKind::RandomList,
        DynamicKind::RandomMap,
        DynamicKind::FuzzInput,
    ];

    /// Category label used in reports.
    pub fn category(&self) -> &'static str {
        match self {
            DynamicKind::RandomList => "RandomList",
            DynamicKind::RandomMap => "RandomMap",
            DynamicKind::FuzzInput => "FuzzInput",
        }
    }

    fn size_range(&self) -> std::ops::RangeInclusive<usize> {
        match self {
            DynamicKind::RandomList => 50..=5_000,
            DynamicKind::RandomMap => 50..=5_000,
            DynamicKind::FuzzInput => 16..=512,
        }
    }
}

impl fmt::Display for DynamicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category())
    }
}

/// A single generated test, fully determined before it runs.
/// 单个生成的测试，在运行前已完全确定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicTest {
    pub name: String,
    pub kind: DynamicKind,
    pub size: usize,
    /// Seed for the test's own input data / 测试自身输入数据的种子
    pub data_seed: u64,
}

impl DynamicTest {
    /// Generates the input and checks the invariants of its kind.
    /// 生成输入并检查其类型的不变量。
    pub fn run(&self) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(self.data_seed);
        match self.kind {
            DynamicKind::RandomList => {
                let mut items: Vec<i64> = (0..self.size)
                    .map(|_| rng.gen_range(-1_000_000..=1_000_000))
                    .collect();
                let sum: i64 = items.iter().sum();
                items.sort_unstable();
                ensure!(items.len() == self.size, "list has {} items, expected {}", items.len(), self.size);
                ensure!(items.iter().sum::<i64>() == sum, "sorting changed the sum");
                if let (Some(min), Some(max)) = (items.first(), items.last()) {
                    ensure!(min <= max, "min {min} is above max {max}");
                }
            }
            DynamicKind::RandomMap => {
                let map: HashMap<String, u64> = (0..self.size)
                    .map(|i| (format!("k{i}"), rng.gen_range(0..=1_000_000)))
                    .collect();
                ensure!(map.len() == self.size, "map has {} keys, expected {}", map.len(), self.size);
                let from_keys: u64 = map.keys().map(|k| map[k]).sum();
                ensure!(from_keys == map.values().sum::<u64>(), "keys and values disagree");
            }
            DynamicKind::FuzzInput => {
                let mut data = vec![0u8; self.size];
                rng.fill_bytes(&mut data);
                let decoded = String::from_utf8_lossy(&data);
                ensure!(
                    decoded.chars().count() <= data.len(),
                    "decoding produced more chars than input bytes"
                );
            }
        }
        Ok(())
    }
}

/// Derives the generated tests for a session.
///
/// # Arguments
/// * `ctx` - Session parameters; `seed` and `dynamic_tests` are used
///
/// # Returns
/// `ctx.dynamic_tests` tests named `dynamic_test_1`, `dynamic_test_2`, ...
pub fn plan(ctx: &SuiteContext) -> Vec<DynamicTest> {
    let mut rng = StdRng::seed_from_u64(ctx.seed);
    (1..=ctx.dynamic_tests)
        .map(|n| {
            let kind = DynamicKind::ALL[rng.gen_range(0..DynamicKind::ALL.len())];
            let size = rng.gen_range(kind.size_range());
            DynamicTest {
                name: format!("dynamic_test_{n}"),
                kind,
                size,
                data_seed: rng.next_u64(),
            }
        })
        .collect()
}

pub fn register(runner: &mut TestRunner, ctx: &SuiteContext) {
    for test in plan(ctx) {
        runner.run_test(&test.name, test.kind.category(), || test.run());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_plan() {
        let ctx = SuiteContext {
            seed: 7,
            dynamic_tests: 20,
            workers: 1,
        };
        assert_eq!(plan(&ctx), plan(&ctx));
    }

    #[test]
    fn plan_sizes_stay_in_range() {
        let ctx = SuiteContext {
            seed: 99,
            dynamic_tests: 50,
            workers: 1,
        };
        for test in plan(&ctx) {
            assert!(test.kind.size_range().contains(&test.size), "{test:?}");
        }
    }
}
