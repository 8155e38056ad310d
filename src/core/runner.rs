//! # Test Runner Module / 测试运行器模块
//!
//! The sequential harness at the heart of dyntest. Each `run_test` call
//! invokes its body exactly once on the calling thread, times it, classifies
//! the result and appends one `TestResult` to an append-only history.
//! Nothing a test body does, including panicking, escapes `run_test`.
//!
//! dyntest 的核心顺序执行框架。每次调用 `run_test` 都会在调用线程上
//! 恰好执行一次测试体，计时、分类结果，并向只追加的历史中添加一个 `TestResult`。
//! 测试体的任何行为（包括 panic）都不会逃逸出 `run_test`。

use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use crate::core::models::{Summary, TestResult};
use crate::core::outcome::{IntoOutcome, Outcome};
use crate::reporting::console;

/// Accumulates test results for one session and reports on them.
///
/// Created by the session entry point, handed by `&mut` to whatever
/// registers tests, and consumed at the end by `report`.
///
/// 为一个会话累积测试结果并进行报告。
#[derive(Debug)]
pub struct TestRunner {
    results: Vec<TestResult>,
    executed: usize,
    locale: String,
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRunner {
    /// Creates an empty runner that reports in the current global locale.
    /// 创建一个使用当前全局语言环境进行报告的空运行器。
    pub fn new() -> Self {
        Self::with_locale(&rust_i18n::locale().to_string())
    }

    /// Creates an empty runner that reports in `locale`.
    /// 创建一个使用 `locale` 进行报告的空运行器。
    pub fn with_locale(locale: &str) -> Self {
        Self {
            results: Vec::new(),
            executed: 0,
            locale: locale.to_string(),
        }
    }

    /// Runs a single test body and records its result.
    ///
    /// The body is called exactly once. Its return value is classified by
    /// [`IntoOutcome`]; a panic is caught and recorded as a failure carrying
    /// the panic message. Elapsed time is taken after the body returned or
    /// unwound, whatever the outcome.
    ///
    /// 运行单个测试体并记录其结果。
    ///
    /// # Arguments / 参数
    /// * `name` - Display name of the test / 测试的显示名称
    /// * `category` - Grouping label used in reports / 报告中使用的分组标签
    /// * `test_fn` - The test body / 测试体
    ///
    /// # Returns / 返回值
    /// The recorded result / 记录的结果
    pub fn run_test<F, R>(&mut self, name: &str, category: &str, test_fn: F) -> &TestResult
    where
        F: FnOnce() -> R,
        R: IntoOutcome,
    {
        let start = Instant::now();
        let outcome = match panic::catch_unwind(AssertUnwindSafe(test_fn)) {
            Ok(value) => value.into_outcome(),
            Err(payload) => Outcome::from_panic(payload),
        };
        let execution_time = start.elapsed();

        self.executed += 1;
        self.results.push(TestResult {
            name: name.to_string(),
            category: category.to_string(),
            passed: outcome.is_passed(),
            message: outcome.message(),
            execution_time,
        });
        &self.results[self.results.len() - 1]
    }

    /// Prints the report to stdout and returns the summary.
    /// Does not touch the history, so calling it twice yields the same summary.
    ///
    /// 将报告打印到标准输出并返回摘要。
    /// 不会修改历史记录，因此调用两次会得到相同的摘要。
    pub fn report(&self) -> Summary {
        let summary = self.summary();
        console::print_report(&self.results, &summary, &self.locale);
        summary
    }

    /// Computes the summary without printing anything.
    /// 计算摘要，不打印任何内容。
    pub fn summary(&self) -> Summary {
        Summary::from_results(&self.results)
    }

    /// The result history in execution order.
    /// 按执行顺序排列的结果历史。
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Number of `run_test` calls made so far.
    /// 到目前为止 `run_test` 的调用次数。
    pub fn executed(&self) -> usize {
        self.executed
    }

    /// Number of recorded results / 已记录结果的数量
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// `true` before the first `run_test` call / 首次调用 `run_test` 之前为 `true`
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Locale used by `report` / `report` 使用的语言环境
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

/// Replaces the process panic hook with a silent one while alive.
///
/// Panicking test bodies are already recorded as failures, so the default
/// hook would only print a duplicate message to stderr. The previous hook is
/// restored on drop.
///
/// 在存活期间用静默钩子替换进程的 panic 钩子。
/// 发生 panic 的测试体已被记录为失败，默认钩子只会向标准错误输出重复的消息。
/// 析构时恢复之前的钩子。
pub struct SilentPanics {
    previous: Option<PanicHook>,
}

type PanicHook = Box<dyn Fn(&panic::PanicHookInfo<'_>) + Sync + Send + 'static>;

impl SilentPanics {
    pub fn install() -> Self {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        Self {
            previous: Some(previous),
        }
    }
}

impl Drop for SilentPanics {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            panic::set_hook(previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn executed_counter_tracks_history() {
        let mut runner = TestRunner::with_locale("en");
        runner.run_test("a", "X", || true);
        runner.run_test("b", "X", || false);
        runner.run_test("c", "X", || -> bool { panic!("boom") });
        assert_eq!(runner.executed(), 3);
        assert_eq!(runner.len(), 3);
    }

    #[test]
    fn run_test_returns_the_recorded_entry() {
        let mut runner = TestRunner::with_locale("en");
        let result = runner.run_test("returns", "X", || Some(false));
        assert!(!result.passed);
        assert_eq!(result.message, "returned false, expected true");
    }
}
