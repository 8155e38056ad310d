// Shared test helpers for integration tests
#![allow(dead_code)]

use dyntest::TestResult;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::{TempDir, tempdir};

/// Builds a result record without running anything.
pub fn make_result(name: &str, category: &str, passed: bool, message: &str) -> TestResult {
    TestResult {
        name: name.to_string(),
        category: category.to_string(),
        passed,
        message: message.to_string(),
        execution_time: Duration::from_micros(1500),
    }
}

/// Writes a configuration file with the given content into a fresh temp dir.
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("DynTest.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Creates a small source tree with a known line layout.
///
/// - `src/main.rs`: 6 lines (4 code, 1 comment, 1 blank)
/// - `scripts/build.py`: 5 lines (2 code, 2 comment, 1 blank)
/// - `target/ignored.rs`: never counted
/// - `notes.unknown`: unknown extension, never counted
pub fn setup_source_tree() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let root = temp_dir.path();

    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(
        root.join("src/main.rs"),
        "// entry point\nfn main() {\n    let x = 1;\n\n    println!(\"{x}\");\n}\n",
    )
    .unwrap();

    fs::create_dir_all(root.join("scripts")).unwrap();
    fs::write(
        root.join("scripts/build.py"),
        "# build helper\nimport os\n\n# run it\nprint(os.getcwd())\n",
    )
    .unwrap();

    fs::create_dir_all(root.join("target")).unwrap();
    fs::write(root.join("target/ignored.rs"), "fn ignored() {}\n".repeat(100)).unwrap();

    fs::write(root.join("notes.unknown"), "not counted\n").unwrap();

    temp_dir
}
