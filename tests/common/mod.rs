//! Common test utilities and helpers
//!
//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

/// Creates a text file with one line per entry
pub fn write_corpus(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create corpus file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write line");
    }
    path
}

/// Small English/Portuguese parallel sample
pub fn sample_en() -> Vec<&'static str> {
    vec![
        "Hello, World! 123",
        "The cat sat.",
        "The dog ran!",
        "Hello again, cat.",
        "Good night",
    ]
}

pub fn sample_pt() -> Vec<&'static str> {
    vec!["Olá, mundo!", "O gato sentou.", "O cão correu!"]
}
