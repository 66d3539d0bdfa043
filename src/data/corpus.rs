// src/data/corpus.rs
//! Leitura dos dois corpora alinhados e montagem dos pares

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::lines::CorpusLines;
use crate::error::{PrepError, Result};
use crate::tokenizer::{normalize, Vocabulary};

/// Par de sentenças normalizadas `(origem, destino)`, alinhadas pela linha
pub type SentencePair = (String, String);

/// Como `max_rows` limita a leitura de cada arquivo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowCap {
    /// Lê no máximo `max_rows` linhas
    #[default]
    Exact,
    /// Lê `max_rows + 1` linhas, como os datasets antigos foram gerados
    Legacy,
}

impl RowCap {
    fn limit(self, max_rows: usize) -> usize {
        match self {
            RowCap::Exact => max_rows,
            RowCap::Legacy => max_rows.saturating_add(1),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CorpusConfig {
    pub max_rows: Option<usize>,
    pub row_cap: RowCap,
}

impl CorpusConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_rows(mut self, max_rows: Option<usize>) -> Self {
        self.max_rows = max_rows;
        self
    }

    pub fn with_row_cap(mut self, row_cap: RowCap) -> Self {
        self.row_cap = row_cap;
        self
    }

    fn line_limit(&self) -> Option<usize> {
        self.max_rows.map(|n| self.row_cap.limit(n))
    }
}

/// Lê um arquivo linha a linha, normalizando e alimentando um vocabulário novo.
///
/// `\n`, `\r\n` e `\r` isolado terminam uma linha. Bytes que não são UTF-8
/// válido são decodificados com perda em vez de falhar.
pub fn read_corpus_file(path: &Path, config: &CorpusConfig) -> Result<(Vec<String>, Vocabulary)> {
    let read_err = |source: std::io::Error| PrepError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let mut reader = CorpusLines::new(BufReader::new(file));
    let limit = config.line_limit();

    let mut vocab = Vocabulary::new();
    let mut lines = Vec::new();

    loop {
        if limit.is_some_and(|n| lines.len() >= n) {
            break;
        }

        let Some(raw) = reader.next() else {
            tracing::debug!("EOF reached: {}", path.display());
            break;
        };

        let line = normalize(&raw.map_err(read_err)?);
        vocab.add_sentence(&line);
        lines.push(line);
    }

    Ok((lines, vocab))
}

/// Monta pares e vocabulários com um limite opcional de linhas por arquivo
pub fn build_pairs_and_vocab(
    source_path: &Path,
    target_path: &Path,
    max_rows: Option<usize>,
) -> Result<(Vec<SentencePair>, Vocabulary, Vocabulary)> {
    let config = CorpusConfig::new().with_max_rows(max_rows);
    build_pairs_and_vocab_with(&config, source_path, target_path)
}

pub fn build_pairs_and_vocab_with(
    config: &CorpusConfig,
    source_path: &Path,
    target_path: &Path,
) -> Result<(Vec<SentencePair>, Vocabulary, Vocabulary)> {
    let (source_lines, source_vocab) = read_corpus_file(source_path, config)?;
    let (target_lines, target_vocab) = read_corpus_file(target_path, config)?;

    if source_lines.len() != target_lines.len() {
        tracing::debug!(
            "line count mismatch: {} source vs {} target, truncating",
            source_lines.len(),
            target_lines.len()
        );
    }

    let pairs: Vec<SentencePair> = source_lines.into_iter().zip(target_lines).collect();

    tracing::info!("Number of sentences: {}", pairs.len());
    tracing::info!("Number of source words: {}", source_vocab.size());
    tracing::info!("Number of target words: {}", target_vocab.size());

    Ok((pairs, source_vocab, target_vocab))
}
