// src/tensor/mod.rs
//! Conversão de pares de sentenças em sequências de índices

#[cfg(feature = "burn")]
mod burn_adapter;

#[cfg(feature = "burn")]
pub use burn_adapter::{to_batch_tensor, to_int_tensor};

use crate::data::{SentencePair, TensorPairWriter};
use crate::error::{PrepError, Result, Side};
use crate::tokenizer::Vocabulary;

/// Par de sequências de índices `(origem, destino)`, cada uma terminando no marcador de fim
pub type TensorPair = (Vec<u32>, Vec<u32>);

/// Contexto de tensorização, criado uma vez por execução
#[derive(Debug, Clone, Copy)]
pub struct TensorizeConfig {
    pub end_marker: u32,
    /// Ignora tokens vazios vindos de espaços repetidos (desligado: eles falham no lookup)
    pub skip_empty_tokens: bool,
}

impl TensorizeConfig {
    pub fn new() -> Self {
        Self {
            end_marker: Vocabulary::EOS_INDEX,
            skip_empty_tokens: false,
        }
    }

    pub fn with_end_marker(mut self, end_marker: u32) -> Self {
        self.end_marker = end_marker;
        self
    }

    pub fn with_skip_empty_tokens(mut self, skip: bool) -> Self {
        self.skip_empty_tokens = skip;
        self
    }

    /// O marcador de fim entra nas duas sequências, então precisa existir nos dois vocabulários
    pub fn validate(&self, source_vocab: &Vocabulary, target_vocab: &Vocabulary) -> Result<()> {
        let limit = source_vocab.size().min(target_vocab.size());
        if self.end_marker as usize >= limit {
            return Err(PrepError::ConfigError(format!(
                "end marker {} outside vocabulary range 0..{}",
                self.end_marker, limit
            )));
        }
        Ok(())
    }
}

impl Default for TensorizeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Converte uma sentença em índices e anexa o marcador de fim
pub fn tensorize_sentence(
    sentence: &str,
    vocab: &Vocabulary,
    side: Side,
    config: &TensorizeConfig,
) -> Result<Vec<u32>> {
    let mut indices = Vec::new();

    for word in sentence.split(' ') {
        if word.is_empty() && config.skip_empty_tokens {
            continue;
        }
        let index = vocab.index_of(word).ok_or_else(|| PrepError::UnknownWord {
            word: word.to_string(),
            side,
        })?;
        indices.push(index);
    }

    indices.push(config.end_marker);
    Ok(indices)
}

pub fn tensorize(
    pair: &SentencePair,
    source_vocab: &Vocabulary,
    target_vocab: &Vocabulary,
    end_marker_index: u32,
) -> Result<TensorPair> {
    let config = TensorizeConfig::new().with_end_marker(end_marker_index);
    tensorize_with(&config, pair, source_vocab, target_vocab)
}

pub fn tensorize_with(
    config: &TensorizeConfig,
    pair: &SentencePair,
    source_vocab: &Vocabulary,
    target_vocab: &Vocabulary,
) -> Result<TensorPair> {
    let (source, target) = pair;
    let source_indices = tensorize_sentence(source, source_vocab, Side::Source, config)?;
    let target_indices = tensorize_sentence(target, target_vocab, Side::Target, config)?;
    Ok((source_indices, target_indices))
}

/// Tensoriza todos os pares; para no primeiro erro
pub fn tensorize_all(
    config: &TensorizeConfig,
    pairs: &[SentencePair],
    source_vocab: &Vocabulary,
    target_vocab: &Vocabulary,
) -> Result<Vec<TensorPair>> {
    config.validate(source_vocab, target_vocab)?;
    pairs
        .iter()
        .map(|pair| tensorize_with(config, pair, source_vocab, target_vocab))
        .collect()
}

/// Resultado de `write_tensor_pairs`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TensorizeReport {
    pub written: usize,
    pub failed: usize,
}

/// Escreve os pares tensorizados; pares com palavra desconhecida são pulados e contados
pub fn write_tensor_pairs(
    config: &TensorizeConfig,
    pairs: &[SentencePair],
    source_vocab: &Vocabulary,
    target_vocab: &Vocabulary,
    writer: &mut TensorPairWriter,
) -> Result<TensorizeReport> {
    config.validate(source_vocab, target_vocab)?;
    let mut report = TensorizeReport::default();

    for (i, pair) in pairs.iter().enumerate() {
        match tensorize_with(config, pair, source_vocab, target_vocab) {
            Ok((source, target)) => {
                writer.write_pair(&source, &target)?;
                report.written += 1;
            }
            Err(PrepError::UnknownWord { word, side }) => {
                tracing::warn!("pair {} skipped: unknown {} word {:?}", i + 1, side, word);
                report.failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab_of(line: &str) -> Vocabulary {
        let mut vocab = Vocabulary::new();
        vocab.add_sentence(line);
        vocab
    }

    #[test]
    fn test_hello_world() {
        let vocab = vocab_of("hello world");
        let seq = tensorize_sentence("hello world", &vocab, Side::Source, &TensorizeConfig::new())
            .unwrap();
        assert_eq!(seq, vec![2, 3, 1]);
    }

    #[test]
    fn test_empty_token_fails_by_default() {
        let vocab = vocab_of("hello world ");
        let err = tensorize_sentence("hello world ", &vocab, Side::Target, &TensorizeConfig::new())
            .unwrap_err();
        match err {
            PrepError::UnknownWord { word, side } => {
                assert_eq!(word, "");
                assert_eq!(side, Side::Target);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_skip_empty_tokens() {
        let vocab = vocab_of("hello world ");
        let config = TensorizeConfig::new().with_skip_empty_tokens(true);
        let seq = tensorize_sentence("  hello   world ", &vocab, Side::Source, &config).unwrap();
        assert_eq!(seq, vec![2, 3, 1]);
    }

    #[test]
    fn test_empty_sentence_only_end_marker_when_skipping() {
        let vocab = Vocabulary::new();
        let config = TensorizeConfig::new().with_skip_empty_tokens(true);
        assert_eq!(
            tensorize_sentence("", &vocab, Side::Source, &config).unwrap(),
            vec![1]
        );
    }

    #[test]
    fn test_custom_end_marker() {
        let source = vocab_of("a b");
        let target = vocab_of("c");
        let pair = ("b a".to_string(), "c".to_string());
        let (s, t) = tensorize(&pair, &source, &target, 0).unwrap();
        assert_eq!(s, vec![3, 2, 0]);
        assert_eq!(t, vec![2, 0]);
    }

    #[test]
    fn test_end_marker_outside_vocab_is_config_error() {
        let source = vocab_of("a b c");
        let target = vocab_of("x");
        let config = TensorizeConfig::new().with_end_marker(3);
        assert!(config.validate(&source, &target).is_err());
        let err = tensorize_all(&config, &[], &source, &target).unwrap_err();
        assert!(matches!(err, PrepError::ConfigError(_)));

        let ok = TensorizeConfig::new().with_end_marker(2);
        assert!(ok.validate(&source, &target).is_ok());
    }

    #[test]
    fn test_vocabs_are_not_swapped() {
        let source = vocab_of("only source");
        let target = vocab_of("only target");
        let pair = ("source".to_string(), "source".to_string());
        let err = tensorize(&pair, &source, &target, 1).unwrap_err();
        assert!(matches!(err, PrepError::UnknownWord { side: Side::Target, .. }));
    }
}
