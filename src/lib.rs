//! seq2seq-prep: pré-processamento de corpora paralelos para tradução seq2seq

pub mod data;
pub mod error;
pub mod tensor;
pub mod tokenizer;
pub mod utils;

// Re-exports principais
pub use data::{build_pairs_and_vocab, CorpusConfig, RowCap, SentencePair, TensorPairWriter};
pub use error::{PrepError, Result, Side};
pub use tensor::{tensorize, tensorize_with, TensorPair, TensorizeConfig};
pub use tokenizer::{normalize, Vocabulary};
