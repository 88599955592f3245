//! Hygiene — enforces coding standards at test time.
//!
//! Scans the crate's production sources for antipatterns. Every pattern has a
//! budget of zero; test files (`*_test.rs`) are exempt.

use std::fs;
use std::path::Path;

/// Patterns that must not appear in production code.
const FORBIDDEN: &[(&str, &str)] = &[
    (".unwrap()", "panics on error"),
    (".expect(", "panics on error"),
    ("panic!(", "crashes the process"),
    ("unreachable!(", "crashes the process"),
    ("todo!(", "unfinished stub"),
    ("unimplemented!(", "unfinished stub"),
    ("let _ =", "silently discards a result"),
    (".ok()", "silently discards an error"),
    ("#[allow(dead_code)]", "hides unused code"),
];

fn collect_rs_files(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path_str, content));
            }
        }
    }
}

#[test]
fn production_sources_are_free_of_forbidden_patterns() {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no production sources found under src/");

    let mut violations = Vec::new();
    for (path, content) in &files {
        for (lineno, line) in content.lines().enumerate() {
            for (pattern, why) in FORBIDDEN {
                if line.contains(pattern) {
                    violations.push(format!("  {path}:{}: {pattern} ({why})", lineno + 1));
                }
            }
        }
    }
    assert!(
        violations.is_empty(),
        "forbidden patterns in production code:\n{}",
        violations.join("\n")
    );
}
