//! # Outcome Module / 结果分类模块
//!
//! Classification of whatever a test body hands back. The convention is
//! strict: only `()` and `true` count as success. `false`, `0`, `1`, strings
//! and every other plain value are failures even though nothing went wrong
//! while computing them. `None` is treated like `()` ("no value").
//!
//! 对测试体返回值的分类。约定是严格的：只有 `()` 和 `true` 视为成功。
//! `false`、`0`、`1`、字符串以及其他任何普通值都视为失败。
//! `None` 与 `()` 相同（"没有返回值"）。

use std::any::Any;
use std::fmt;

use crate::core::models::OK_MESSAGE;

/// The harness's own view of how a test body ended.
/// 框架对测试体结束方式的内部表示。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Returned `()`, `true` or `None`.
    Passed,
    /// Returned normally, but with a value other than `true`.
    /// 正常返回，但返回值不是 `true`。
    Rejected { returned: String },
    /// Returned an error value or panicked.
    /// 返回了错误值或发生了 panic。
    Errored { message: String },
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    /// The text stored in `TestResult::message`.
    /// 存储在 `TestResult::message` 中的文本。
    pub fn message(&self) -> String {
        match self {
            Outcome::Passed => OK_MESSAGE.to_string(),
            Outcome::Rejected { returned } => format!("returned {returned}, expected true"),
            Outcome::Errored { message } => message.clone(),
        }
    }

    /// Builds an `Errored` outcome from a `catch_unwind` payload.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "test panicked".to_string()
        };
        Outcome::Errored { message }
    }

    fn rejected(value: impl fmt::Debug) -> Self {
        Outcome::Rejected {
            returned: format!("{value:?}"),
        }
    }
}

/// Converts a test body's return value into an `Outcome`.
///
/// Implemented for `()`, `bool`, the numeric primitives, `char`, strings,
/// `Option<T>` and `Result<T, E>`. Implement it for your own types to give
/// them a pass/fail meaning.
///
/// 将测试体的返回值转换为 `Outcome`。
pub trait IntoOutcome {
    fn into_outcome(self) -> Outcome;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Outcome {
        Outcome::Passed
    }
}

impl IntoOutcome for bool {
    fn into_outcome(self) -> Outcome {
        if self {
            Outcome::Passed
        } else {
            Outcome::rejected(self)
        }
    }
}

impl IntoOutcome for Outcome {
    fn into_outcome(self) -> Outcome {
        self
    }
}

macro_rules! reject_plain_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoOutcome for $ty {
                fn into_outcome(self) -> Outcome {
                    Outcome::rejected(self)
                }
            }
        )*
    };
}

reject_plain_values!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, String,
);

impl IntoOutcome for &str {
    fn into_outcome(self) -> Outcome {
        Outcome::rejected(self)
    }
}

impl<T: IntoOutcome> IntoOutcome for Option<T> {
    fn into_outcome(self) -> Outcome {
        match self {
            None => Outcome::Passed,
            Some(value) => value.into_outcome(),
        }
    }
}

impl<T: IntoOutcome, E: fmt::Display> IntoOutcome for Result<T, E> {
    fn into_outcome(self) -> Outcome {
        match self {
            Ok(value) => value.into_outcome(),
            // `{:#}` keeps the whole context chain for anyhow errors.
            Err(e) => Outcome::Errored {
                message: format!("{e:#}"),
            },
        }
    }
}
