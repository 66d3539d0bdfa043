// src/data/dataset.rs

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::corpus::SentencePair;
use crate::error::{PrepError, Result};

/// Nomes dos arquivos gerados por `build` e lidos por `tensorize`
pub const PAIRS_FILE: &str = "pairs.tsv";
pub const SOURCE_VOCAB_FILE: &str = "source_vocab.json";
pub const TARGET_VOCAB_FILE: &str = "target_vocab.json";
pub const TENSORS_FILE: &str = "tensors.jsonl";

/// Salva pares como TSV: `origem\tdestino` por linha
pub fn save_pairs(path: &Path, pairs: &[SentencePair]) -> Result<()> {
    let write_err = |source: std::io::Error| PrepError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    for (source, target) in pairs {
        writeln!(writer, "{}\t{}", source, target).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)
}

pub fn load_pairs(path: &Path) -> Result<Vec<SentencePair>> {
    let read_err = |source: std::io::Error| PrepError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let reader = BufReader::new(file);

    let mut pairs = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(read_err)?;
        let (source, target) = line.split_once('\t').ok_or_else(|| PrepError::DataCorrupt {
            path: path.to_path_buf(),
            line: i + 1,
            reason: "missing tab separator".to_string(),
        })?;
        pairs.push((source.to_string(), target.to_string()));
    }
    Ok(pairs)
}

/// Uma linha do arquivo de tensores
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TensorRecord {
    pub source: Vec<u32>,
    pub target: Vec<u32>,
}

/// Escreve pares de índices em JSON lines
pub struct TensorPairWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    pairs_written: usize,
}

impl TensorPairWriter {
    pub fn new(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| PrepError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        let writer = BufWriter::with_capacity(1024 * 1024, file);

        Ok(Self {
            writer,
            path: path.to_path_buf(),
            pairs_written: 0,
        })
    }

    pub fn write_pair(&mut self, source: &[u32], target: &[u32]) -> Result<()> {
        let record = TensorRecord {
            source: source.to_vec(),
            target: target.to_vec(),
        };
        serde_json::to_writer(&mut self.writer, &record).map_err(|e| self.write_err(e.into()))?;
        self.writer
            .write_all(b"\n")
            .map_err(|e| self.write_err(e))?;
        self.pairs_written += 1;
        Ok(())
    }

    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush().map_err(|e| self.write_err(e))?;
        Ok(self.pairs_written)
    }

    fn write_err(&self, source: std::io::Error) -> PrepError {
        PrepError::FileWrite {
            path: self.path.clone(),
            source,
        }
    }
}

/// Lê de volta um arquivo escrito por `TensorPairWriter`
pub fn load_tensor_records(path: &Path) -> Result<Vec<TensorRecord>> {
    let file = File::open(path).map_err(|source| PrepError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|e| PrepError::DataCorrupt {
            path: path.to_path_buf(),
            line: i + 1,
            reason: e.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}
