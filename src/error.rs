use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Lado do par de sentenças (idioma de origem ou de destino)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => write!(f, "source"),
            Side::Target => write!(f, "target"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PrepError {
    // --- I/O ---
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    // --- Data ---
    #[error("Corrupt data in {path} at line {line}: {reason}")]
    DataCorrupt {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    // --- Vocabulary ---
    #[error("Unknown word {word:?} in {side} vocabulary")]
    UnknownWord { word: String, side: Side },

    #[error("Vocabulary load failed: {0}")]
    VocabLoad(String),

    // --- Config ---
    #[error("Invalid config: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, PrepError>;
