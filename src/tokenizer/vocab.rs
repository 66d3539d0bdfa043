// src/tokenizer/vocab.rs

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{PrepError, Result};

/// Forma persistida do vocabulário (o mapa direto é reconstruído no load)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct VocabFile {
    pub index_to_word: Vec<String>,
    pub word_count: HashMap<String, usize>,
}

/// Vocabulário palavra <-> índice de um idioma.
///
/// Índices são atribuídos na ordem da primeira ocorrência a partir de 2;
/// `SOS` e `EOS` ocupam 0 e 1 para sempre. Os dois mapas só mudam juntos,
/// dentro de `add_word`.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    word_to_index: HashMap<String, u32>,
    index_to_word: Vec<String>,
    word_count: HashMap<String, usize>,
    seen_words: HashSet<String>,
}

impl Vocabulary {
    pub const SOS_TOKEN: &'static str = "SOS";
    pub const EOS_TOKEN: &'static str = "EOS";
    pub const SOS_INDEX: u32 = 0;
    pub const EOS_INDEX: u32 = 1;

    pub fn new() -> Self {
        let index_to_word = vec![Self::SOS_TOKEN.to_string(), Self::EOS_TOKEN.to_string()];
        let word_to_index = index_to_word
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i as u32))
            .collect();

        Self {
            word_to_index,
            index_to_word,
            word_count: HashMap::new(),
            seen_words: HashSet::new(),
        }
    }

    /// Divide no espaço literal; tokens vazios (de espaços repetidos) são ignorados
    pub fn add_sentence(&mut self, line: &str) {
        for word in line.split(' ') {
            if word.is_empty() {
                continue;
            }
            self.add_word(word);
        }
    }

    pub fn add_word(&mut self, word: &str) {
        if self.word_to_index.contains_key(word) {
            // Marcadores reservados não têm contagem inicial
            *self.word_count.entry(word.to_string()).or_insert(0) += 1;
            return;
        }

        let index = self.index_to_word.len() as u32;
        self.word_to_index.insert(word.to_string(), index);
        self.index_to_word.push(word.to_string());
        self.word_count.insert(word.to_string(), 1);
        self.seen_words.insert(word.to_string());
    }

    /// Palavras distintas, incluindo os dois marcadores
    pub fn size(&self) -> usize {
        self.index_to_word.len()
    }

    pub fn index_of(&self, word: &str) -> Option<u32> {
        self.word_to_index.get(word).copied()
    }

    pub fn word_at(&self, index: u32) -> Option<&str> {
        self.index_to_word.get(index as usize).map(String::as_str)
    }

    pub fn count_of(&self, word: &str) -> usize {
        self.word_count.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.word_to_index.contains_key(word)
    }

    pub fn seen_words(&self) -> &HashSet<String> {
        &self.seen_words
    }

    pub fn word_counts(&self) -> &HashMap<String, usize> {
        &self.word_count
    }

    /// Itera `(índice, palavra)` em ordem de índice
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.index_to_word
            .iter()
            .enumerate()
            .map(|(i, w)| (i as u32, w.as_str()))
    }

    /// Palavras mais frequentes (contagem desc, depois índice asc). Só para relatório.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(u32, &str, usize)> = self
            .iter()
            .filter_map(|(i, w)| self.word_count.get(w).map(|&c| (i, w, c)))
            .collect();
        entries.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));
        entries.into_iter().take(n).map(|(_, w, c)| (w, c)).collect()
    }

    pub fn to_file(&self) -> VocabFile {
        VocabFile {
            index_to_word: self.index_to_word.clone(),
            word_count: self.word_count.clone(),
        }
    }

    pub fn from_file_data(data: VocabFile) -> Result<Self> {
        let VocabFile { index_to_word, word_count } = data;

        if index_to_word.len() < 2
            || index_to_word[0] != Self::SOS_TOKEN
            || index_to_word[1] != Self::EOS_TOKEN
        {
            return Err(PrepError::VocabLoad(format!(
                "expected reserved markers {} and {} at indices 0 and 1",
                Self::SOS_TOKEN,
                Self::EOS_TOKEN
            )));
        }

        let mut word_to_index = HashMap::with_capacity(index_to_word.len());
        for (i, word) in index_to_word.iter().enumerate() {
            if word_to_index.insert(word.clone(), i as u32).is_some() {
                return Err(PrepError::VocabLoad(format!(
                    "duplicate word {:?} at index {}",
                    word, i
                )));
            }
        }

        // Contagens precisam bater com as palavras registradas
        if let Some(word) = word_count.keys().find(|w| !word_to_index.contains_key(w.as_str())) {
            return Err(PrepError::VocabLoad(format!(
                "count for unregistered word {:?}",
                word
            )));
        }
        if let Some(word) = index_to_word[2..]
            .iter()
            .find(|w| word_count.get(w.as_str()).copied().unwrap_or(0) == 0)
        {
            return Err(PrepError::VocabLoad(format!("missing count for word {:?}", word)));
        }

        let seen_words = index_to_word[2..].iter().cloned().collect();

        Ok(Self {
            word_to_index,
            index_to_word,
            word_count,
            seen_words,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| PrepError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        let data: VocabFile = serde_json::from_reader(reader)
            .map_err(|e| PrepError::VocabLoad(format!("{}: {}", path.display(), e)))?;
        Self::from_file_data(data)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| PrepError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.to_file()).map_err(|e| {
            PrepError::FileWrite {
                path: path.to_path_buf(),
                source: e.into(),
            }
        })?;
        writer.flush().map_err(|source| PrepError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}
