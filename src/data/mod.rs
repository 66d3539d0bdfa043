// src/data/mod.rs

mod corpus;
mod dataset;
mod lines;

pub use corpus::{
    build_pairs_and_vocab, build_pairs_and_vocab_with, read_corpus_file, CorpusConfig, RowCap,
    SentencePair,
};

pub use dataset::{
    load_pairs, load_tensor_records, save_pairs, TensorPairWriter, TensorRecord, PAIRS_FILE,
    SOURCE_VOCAB_FILE, TARGET_VOCAB_FILE, TENSORS_FILE,
};

pub use lines::CorpusLines;
