//! # Smoke Suite / 冒烟测试套件
//!
//! Basic language and runtime smoke test, one test per area.
//!
//! 基础语言和运行时冒烟测试，每个领域一个测试。

use anyhow::{Context, Result, anyhow, bail, ensure};
use chrono::{Duration as ChronoDuration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::core::runner::TestRunner;
use crate::suites::SuiteContext;

/// Sleep of each worker in the threading test.
const WORKER_DELAY: Duration = Duration::from_millis(10);

pub fn register(runner: &mut TestRunner, ctx: &SuiteContext) {
    runner.run_test("basic_operations", "Basics", basic_operations);
    runner.run_test("collections", "Collections", collections);
    runner.run_test("traits", "Traits", traits);
    runner.run_test("functional", "Functional", functional);
    runner.run_test("file_io", "FileIO", file_io);
    runner.run_test("json", "Serialization", json_round_trip);
    runner.run_test("datetime", "DateTime", datetime);
    runner.run_test("math", "Math", math);
    let workers = ctx.workers;
    runner.run_test("threading", "Threading", move || threading(workers));
    runner.run_test("error_handling", "Errors", error_handling);
}

fn basic_operations() -> Result<()> {
    let (a, b) = (10i32, 3i32);
    ensure!(a + b == 13 && a - b == 7 && a * b == 30, "integer arithmetic");
    ensure!(a / b == 3 && a % b == 1, "integer division");
    ensure!(a.pow(b as u32) == 1000, "power");
    ensure!(format!("{:.2}", a as f64 / b as f64) == "3.33", "float formatting");

    let greeting = format!("{} {}!", "Hello", "World");
    ensure!(greeting == "Hello World!", "concatenation");
    ensure!("Hello".to_lowercase() == "hello" && "World".to_uppercase() == "WORLD", "case mapping");
    ensure!(&"Rustacean"[0..4] == "Rust", "slicing");
    Ok(())
}

fn collections() -> Result<()> {
    let mut list = vec![1, 2, 3, 4, 5];
    list.push(6);
    let squares: Vec<i32> = list.iter().map(|x| x * x).collect();
    ensure!(squares == [1, 4, 9, 16, 25, 36], "squares");

    let person: HashMap<&str, &str> = [("name", "Alice"), ("city", "NYC")].into_iter().collect();
    ensure!(person.get("name") == Some(&"Alice"), "map lookup");

    let unique: HashSet<i32> = [1, 2, 2, 3, 3, 3].into_iter().collect();
    ensure!(unique.len() == 3, "set deduplication");

    let tuple = (1, "two", 3.0);
    ensure!(tuple.1 == "two", "tuple access");

    let words = ["apple", "banana", "apple", "cherry", "banana", "apple"];
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for word in words {
        *counts.entry(word).or_default() += 1;
    }
    ensure!(counts["apple"] == 3 && counts["banana"] == 2 && counts["cherry"] == 1, "counting");

    let mut grouped: HashMap<&str, Vec<&str>> = HashMap::new();
    grouped.entry("fruits").or_default().push("apple");
    grouped.entry("fruits").or_default().push("banana");
    ensure!(grouped["fruits"] == ["apple", "banana"], "grouping");
    Ok(())
}

trait Greet {
    fn name(&self) -> &str;

    fn greet(&self) -> String {
        format!("Hello, I'm {}!", self.name())
    }
}

struct Person {
    name: String,
    #[allow(dead_code)]
    age: u32,
}

struct Employee {
    person: Person,
    role: String,
}

impl Greet for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Greet for Employee {
    fn name(&self) -> &str {
        self.person.name()
    }
}

impl Employee {
    fn work(&self) -> String {
        format!("{} is working as {}", self.name(), self.role)
    }
}

fn traits() -> Result<()> {
    let alice = Person {
        name: "Alice".to_string(),
        age: 30,
    };
    let bob = Employee {
        person: Person {
            name: "Bob".to_string(),
            age: 25,
        },
        role: "Developer".to_string(),
    };
    ensure!(alice.greet() == "Hello, I'm Alice!", "default trait method");
    ensure!(bob.work() == "Bob is working as Developer", "inherent method");

    let greeters: Vec<&dyn Greet> = vec![&alice, &bob];
    let names: Vec<&str> = greeters.iter().map(|g| g.name()).collect();
    ensure!(names == ["Alice", "Bob"], "dynamic dispatch");
    Ok(())
}

fn functional() -> bool {
    let numbers: Vec<i32> = (1..=10).collect();
    let squared: Vec<i32> = numbers.iter().map(|x| x * x).collect();
    let evens: Vec<i32> = numbers.iter().copied().filter(|x| x % 2 == 0).collect();
    let total = numbers.iter().fold(0, |acc, x| acc + x);
    let zipped: Vec<(char, i32)> = ['a', 'b', 'c'].into_iter().zip(1..).collect();
    let enumerated: Vec<(usize, &str)> = ["apple", "banana", "cherry"].into_iter().enumerate().collect();

    squared[9] == 100
        && evens == [2, 4, 6, 8, 10]
        && total == 55
        && zipped == [('a', 1), ('b', 2), ('c', 3)]
        && enumerated[2] == (2, "cherry")
}

fn file_io() -> Result<()> {
    let mut file = tempfile::Builder::new()
        .prefix("dyntest_")
        .suffix(".txt")
        .tempfile()
        .context("failed to create temporary file")?;
    writeln!(file, "Hello from Rust!")?;
    writeln!(file, "This is a test file.")?;
    writeln!(file, "Line 3.")?;
    file.flush()?;

    let reader = BufReader::new(fs::File::open(file.path())?);
    let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
    ensure!(lines.len() == 3, "read {} lines, expected 3", lines.len());
    ensure!(lines[0] == "Hello from Rust!", "unexpected first line {:?}", lines[0]);

    let path = file.path().to_path_buf();
    file.close()?;
    ensure!(!path.exists(), "temporary file survived close");
    Ok(())
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Payload {
    name: String,
    values: Vec<i32>,
}

fn json_round_trip() -> Result<()> {
    let data = Payload {
        name: "Test".to_string(),
        values: vec![1, 2, 3],
    };
    let text = serde_json::to_string(&data)?;
    ensure!(text == r#"{"name":"Test","values":[1,2,3]}"#, "unexpected JSON {text}");
    let parsed: Payload = serde_json::from_str(&text)?;
    ensure!(parsed == data, "JSON round trip changed the value");
    Ok(())
}

fn datetime() -> Result<()> {
    let now = Local::now();
    let formatted = now.format("%Y-%m-%d %H:%M:%S").to_string();
    ensure!(formatted.len() == 19, "unexpected format {formatted}");
    ensure!(now.timestamp() > 0, "timestamp before the epoch");

    let day = NaiveDate::from_ymd_opt(2024, 2, 26).ok_or_else(|| anyhow!("invalid date"))?;
    let expected = NaiveDate::from_ymd_opt(2024, 3, 4).ok_or_else(|| anyhow!("invalid date"))?;
    ensure!(day + ChronoDuration::days(7) == expected, "leap-year arithmetic");
    Ok(())
}

fn math() -> bool {
    fn gcd(a: u64, b: u64) -> u64 {
        if b == 0 { a } else { gcd(b, a % b) }
    }
    (std::f64::consts::PI * 2.0 - std::f64::consts::TAU).abs() < 1e-12
        && 16f64.sqrt() == 4.0
        && (90f64.to_radians().sin() - 1.0).abs() < 1e-10
        && (100f64.log10() - 2.0).abs() < 1e-12
        && (1..=5u64).product::<u64>() == 120
        && gcd(48, 18) == 6
}

/// Spawns `workers` threads that each record a line, then joins them.
/// Only the count is checked: completion order is not deterministic.
fn threading(workers: usize) -> Result<()> {
    let results = Arc::new(Mutex::new(Vec::with_capacity(workers)));
    let handles: Vec<_> = (1..=workers)
        .map(|i| {
            let results = Arc::clone(&results);
            thread::spawn(move || {
                thread::sleep(WORKER_DELAY);
                if let Ok(mut guard) = results.lock() {
                    guard.push(format!("Thread-{i} completed"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().map_err(|_| anyhow!("worker thread panicked"))?;
    }

    let completed = results.lock().map_err(|_| anyhow!("results lock poisoned"))?.len();
    ensure!(completed == workers, "{completed} of {workers} workers completed");
    Ok(())
}

#[derive(Debug)]
struct CustomError(String);

impl fmt::Display for CustomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "custom error: {}", self.0)
    }
}

impl std::error::Error for CustomError {}

fn fail_with_custom() -> std::result::Result<(), CustomError> {
    Err(CustomError("This is a custom error".to_string()))
}

fn error_handling() -> Result<()> {
    ensure!(10i32.checked_div(0).is_none(), "division by zero was not caught");

    let Err(err) = fail_with_custom() else {
        bail!("custom error expected");
    };
    ensure!(err.to_string() == "custom error: This is a custom error", "custom error text");

    let Err(wrapped) = fail_with_custom().context("while running the smoke test") else {
        bail!("context error expected");
    };
    let message = format!("{wrapped:#}");
    ensure!(
        message.contains("while running the smoke test") && message.contains("custom error"),
        "context chain lost"
    );

    let mut cleanup_ran = false;
    {
        struct Finally<'a>(&'a mut bool);
        impl Drop for Finally<'_> {
            fn drop(&mut self) {
                *self.0 = true;
            }
        }
        let _guard = Finally(&mut cleanup_ran);
    }
    ensure!(cleanup_ran, "drop guard did not run");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_suite_passes() {
        let mut runner = TestRunner::with_locale("en");
        register(&mut runner, &SuiteContext::default());
        let failures: Vec<_> = runner.results().iter().filter(|r| !r.passed).collect();
        assert!(failures.is_empty(), "unexpected failures: {failures:?}");
    }

    #[test]
    fn threading_with_many_workers() {
        assert!(threading(16).is_ok());
    }
}
