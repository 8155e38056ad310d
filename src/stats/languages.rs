//! # Language Table / 语言表
//!
//! Language table used by the line counter, keyed by file extension.
//!
//! 行数统计使用的语言表，以文件扩展名为键。

/// Comment syntax of one language.
/// 一种语言的注释语法。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSpec {
    /// Display name / 显示名称
    pub name: &'static str,
    /// Prefixes that mark a whole line as a comment / 将整行标记为注释的前缀
    pub line_markers: &'static [&'static str],
    /// Block comment delimiters / 块注释定界符
    pub block: Option<(&'static str, &'static str)>,
}

const C_BLOCK: Option<(&str, &str)> = Some(("/*", "*/"));
const MARKUP_BLOCK: Option<(&str, &str)> = Some(("<!--", "-->"));

const fn c_style(name: &'static str) -> LanguageSpec {
    LanguageSpec {
        name,
        line_markers: &["//"],
        block: C_BLOCK,
    }
}

const fn hash_style(name: &'static str, block: Option<(&'static str, &'static str)>) -> LanguageSpec {
    LanguageSpec {
        name,
        line_markers: &["#"],
        block,
    }
}

const fn no_line_markers(name: &'static str, block: Option<(&'static str, &'static str)>) -> LanguageSpec {
    LanguageSpec {
        name,
        line_markers: &[],
        block,
    }
}

/// Directory names never descended into.
pub const IGNORED_DIRS: &[&str] = &[
    ".git",
    ".vs",
    ".idea",
    "__pycache__",
    "node_modules",
    "bin",
    "obj",
    "lib",
    "build",
    "dist",
    "target",
    ".target",
    ".gradle",
    "cmake-build-debug",
];

/// Looks up the language of a lowercase extension without the leading dot.
///
/// Returns `None` for extensions the counter ignores.
pub fn language_for_extension(ext: &str) -> Option<LanguageSpec> {
    let spec = match ext {
        "c" => c_style("C"),
        "cpp" => c_style("C++"),
        "h" => c_style("C/C++ Header"),
        "hpp" => c_style("C++ Header"),
        "java" => c_style("Java"),
        "js" => c_style("JavaScript"),
        "ts" => c_style("TypeScript"),
        "rs" => c_style("Rust"),
        "css" => no_line_markers("CSS", C_BLOCK),
        "py" => hash_style("Python", Some(("\"\"\"", "\"\"\""))),
        "ps1" => hash_style("PowerShell", Some(("<#", "#>"))),
        "sh" => hash_style("Shell", None),
        "yml" | "yaml" => hash_style("YAML", None),
        "toml" => hash_style("TOML", None),
        "sql" => LanguageSpec {
            name: "SQL",
            line_markers: &["--"],
            block: C_BLOCK,
        },
        "html" => no_line_markers("HTML", MARKUP_BLOCK),
        "md" => no_line_markers("Markdown", MARKUP_BLOCK),
        "xml" => no_line_markers("XML", MARKUP_BLOCK),
        "json" => no_line_markers("JSON", None),
        "bat" => LanguageSpec {
            name: "Batch",
            line_markers: &["REM", "::"],
            block: None,
        },
        "txt" => no_line_markers("Text", None),
        _ => return None,
    };
    Some(spec)
}
