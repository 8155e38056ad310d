//! # Edge Case Suite / 边界情况套件
//!
//! Fixed edge-case checks on arithmetic, strings, collections and errors.
//! Only `sorting_stress` draws random input, from the session seed.
//!
//! 针对算术、字符串、集合和错误的固定边界检查。
//! 只有 `sorting_stress` 使用随机输入，且来源于会话种子。

use anyhow::{Result, ensure};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};

use crate::core::runner::TestRunner;
use crate::suites::SuiteContext;

pub fn register(runner: &mut TestRunner, ctx: &SuiteContext) {
    runner.run_test("overflow_handling", "Arithmetic", integer_overflow);
    runner.run_test("division_edge_cases", "Arithmetic", division_edge_cases);
    runner.run_test("float_precision", "Arithmetic", float_precision);
    runner.run_test("string_edge_cases", "String", string_edge_cases);
    runner.run_test("unicode_encoding", "String", unicode_round_trip);
    runner.run_test("vec_stress", "DataStructure", vec_stress);
    runner.run_test("map_stress", "DataStructure", map_stress);
    runner.run_test("set_operations", "DataStructure", set_operations);
    runner.run_test("error_handling", "Errors", error_kinds);
    runner.run_test("recursion", "Recursion", recursion);
    runner.run_test("memory_alloc", "Memory", memory_allocation);
    let seed = ctx.seed;
    runner.run_test("sorting_stress", "Sorting", move || sorting_edge_cases(seed));
    runner.run_test("math_edge_cases", "Math", math_edge_cases);
}

/// Boundary integers used by several checks.
pub fn edge_integers() -> Vec<i64> {
    vec![
        0,
        1,
        -1,
        i32::MAX as i64,
        i32::MIN as i64,
        i64::MAX,
        i64::MIN,
        42,
        -42,
        1_000_000_000,
        -1_000_000_000,
        1_000_000_000_000_000_000,
        -1_000_000_000_000_000_000,
    ]
}

pub fn edge_strings() -> Vec<String> {
    vec![
        String::new(),
        " ".to_string(),
        "\t".to_string(),
        "\n".to_string(),
        "\r\n".to_string(),
        "null".to_string(),
        "NULL".to_string(),
        "None".to_string(),
        "true".to_string(),
        "false".to_string(),
        "0".to_string(),
        "-1".to_string(),
        "'".to_string(),
        "\"".to_string(),
        "\\".to_string(),
        "a".repeat(10_000),
        "\0".to_string(),
        "\u{ff}".to_string(),
        "émoji: 🎉".to_string(),
    ]
}

fn integer_overflow() -> bool {
    let big = i64::MAX;
    big.checked_add(1).is_none()
        && big.wrapping_add(1) == i64::MIN
        && big as i128 + 1 == 1i128 << 63
}

fn division_edge_cases() -> Result<()> {
    let cases: [(i64, i64); 5] = [(10, 3), (1, 3), (-1, 3), (0, 1), (1_000_000_000_000_000_000, 7)];
    for (a, b) in cases {
        let quotient = a / b;
        let remainder = a % b;
        ensure!(quotient * b + remainder == a, "{a} / {b} does not recombine");
        ensure!(a.rem_euclid(b) >= 0, "rem_euclid of {a} by {b} is negative");
    }
    ensure!(1i64.checked_div(0).is_none(), "division by zero was not rejected");
    ensure!(i64::MIN.checked_div(-1).is_none(), "i64::MIN / -1 did not overflow");
    for value in edge_integers() {
        ensure!(value.checked_rem(0).is_none(), "remainder by zero was not rejected");
    }
    Ok(())
}

fn float_precision() -> Result<()> {
    ensure!((0.1 + 0.2 - 0.3_f64).abs() < 1e-10, "float precision issue");
    ensure!(0.1 + 0.2 != 0.3_f64, "0.1 + 0.2 is exactly 0.3");
    ensure!(f64::NAN != f64::NAN, "NaN compares equal to itself");
    ensure!(f64::INFINITY > f64::MAX, "infinity is not above MAX");
    ensure!(1.0 + f64::EPSILON > 1.0, "epsilon vanished");
    Ok(())
}

fn string_edge_cases() -> bool {
    edge_strings().iter().all(|s| {
        let upper = s.to_uppercase();
        let lower = s.to_lowercase();
        let _ = s.trim();
        upper.to_lowercase() == lower.to_lowercase() && s.chars().count() <= s.len()
    })
}

fn unicode_round_trip() -> Result<()> {
    let samples = ["Hello", "こんにちは", "مرحبا", "🎉🎊", "\u{0}\u{1}\u{2}"];
    for s in samples {
        let encoded = s.as_bytes().to_vec();
        let decoded = String::from_utf8(encoded)?;
        ensure!(decoded == s, "round trip changed {s:?}");
    }
    Ok(())
}

fn vec_stress() -> bool {
    let mut items: Vec<i64> = (0..100_000).collect();
    items.reverse();
    items.sort_unstable();
    let middle = items[50_000];
    items.insert(0, -1);
    items.pop();
    middle == 50_000 && items[0] == -1 && items.len() == 100_000
}

fn map_stress() -> bool {
    let map: HashMap<String, u64> = (0..10_000u64).map(|i| (format!("key_{i}"), i * i)).collect();
    map.len() == 10_000 && (0..10_000u64).all(|i| map.get(&format!("key_{i}")) == Some(&(i * i)))
}

fn set_operations() -> bool {
    let s1: HashSet<u32> = (0..10_000).collect();
    let s2: HashSet<u32> = (5_000..15_000).collect();
    s1.union(&s2).count() == 15_000
        && s1.intersection(&s2).count() == 5_000
        && s1.difference(&s2).count() == 5_000
}

/// Counts the failure kinds that surface as values rather than panics.
fn error_kinds() -> bool {
    let mut caught = 0;
    if 1i32.checked_div(0).is_none() {
        caught += 1;
    }
    if "not_a_number".parse::<i32>().is_err() {
        caught += 1;
    }
    let empty: Vec<i32> = Vec::new();
    if empty.first().is_none() {
        caught += 1;
    }
    let map: HashMap<&str, i32> = HashMap::new();
    if !map.contains_key("missing") {
        caught += 1;
    }
    caught == 4
}

fn recursion() -> bool {
    fn factorial(n: u32) -> f64 {
        if n <= 1 { 1.0 } else { n as f64 * factorial(n - 1) }
    }
    let exact = (1..=20u64).product::<u64>();
    factorial(100) > 0.0 && factorial(100).is_finite() && factorial(20) == exact as f64
}

fn memory_allocation() -> bool {
    let data: Vec<Vec<u8>> = (0..1_000).map(|_| vec![0u8; 1024]).collect();
    let total: usize = data.iter().map(Vec::len).sum();
    drop(data);
    total == 1024 * 1_000
}

fn sorting_edge_cases(seed: u64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let cases: Vec<Vec<i64>> = vec![
        vec![],
        vec![1],
        vec![2, 1],
        (1..=1_000).rev().collect(),
        (0..1_000).collect(),
        vec![1; 1_000],
        (0..1_000).map(|_| rng.gen_range(-1_000_000_000..=1_000_000_000)).collect(),
    ];
    for case in cases {
        let mut stable = case.clone();
        stable.sort();
        let mut unstable = case.clone();
        unstable.sort_unstable();
        ensure!(stable == unstable, "sort and sort_unstable disagree");
        ensure!(stable.windows(2).all(|w| w[0] <= w[1]), "output is not ordered");
        ensure!(stable.len() == case.len(), "sorting changed the length");
    }
    Ok(())
}

fn math_edge_cases() -> Result<()> {
    fn gcd(a: u64, b: u64) -> u64 {
        if b == 0 { a } else { gcd(b, a % b) }
    }
    ensure!(0f64.sqrt() == 0.0 && 1f64.sqrt() == 1.0, "sqrt of 0 or 1 is wrong");
    ensure!(std::iter::empty::<u64>().product::<u64>() == 1, "0! is not 1");
    ensure!(gcd(0, 5) == 5 && gcd(12, 8) == 4, "gcd is wrong");
    ensure!(0f64.sin().abs() < 1e-10, "sin(0) is not 0");
    ensure!((0f64.cos() - 1.0).abs() < 1e-10, "cos(0) is not 1");
    ensure!((-1f64).sqrt().is_nan(), "sqrt(-1) is not NaN");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_edge_cases_pass() {
        let mut runner = TestRunner::with_locale("en");
        register(&mut runner, &SuiteContext::default());
        let failures: Vec<_> = runner.results().iter().filter(|r| !r.passed).collect();
        assert!(failures.is_empty(), "unexpected failures: {failures:?}");
        assert_eq!(runner.len(), 13);
    }
}
