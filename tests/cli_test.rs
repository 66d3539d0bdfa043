//! Build/Tensorize Flow Tests
//!
//! Runs the library pieces in the same order as the `build` and
//! `tensorize` subcommands and checks the files they leave behind.

mod common;

use seq2seq_prep::data::{
    build_pairs_and_vocab_with, load_pairs, load_tensor_records, save_pairs, CorpusConfig,
    TensorPairWriter, PAIRS_FILE, SOURCE_VOCAB_FILE, TARGET_VOCAB_FILE, TENSORS_FILE,
};
use seq2seq_prep::tensor::{write_tensor_pairs, TensorizeConfig};
use seq2seq_prep::{PrepError, Vocabulary};
use std::path::Path;
use tempfile::tempdir;

fn run_build(source: &Path, target: &Path, output: &Path) {
    let config = CorpusConfig::new();
    let (pairs, source_vocab, target_vocab) =
        build_pairs_and_vocab_with(&config, source, target).expect("build failed");

    std::fs::create_dir_all(output).expect("Failed to create output dir");
    save_pairs(&output.join(PAIRS_FILE), &pairs).expect("Failed to save pairs");
    source_vocab
        .save(&output.join(SOURCE_VOCAB_FILE))
        .expect("Failed to save source vocab");
    target_vocab
        .save(&output.join(TARGET_VOCAB_FILE))
        .expect("Failed to save target vocab");
}

#[test]
fn test_build_writes_three_outputs() {
    let dir = tempdir().expect("Failed to create temp dir");
    let en = common::write_corpus(dir.path(), "en.txt", &common::sample_en());
    let pt = common::write_corpus(dir.path(), "pt.txt", &common::sample_pt());
    let out = dir.path().join("out");

    run_build(&en, &pt, &out);

    for name in [PAIRS_FILE, SOURCE_VOCAB_FILE, TARGET_VOCAB_FILE] {
        assert!(out.join(name).exists(), "missing {}", name);
    }
    assert_eq!(load_pairs(&out.join(PAIRS_FILE)).unwrap().len(), 3);
    let source_vocab = Vocabulary::load(&out.join(SOURCE_VOCAB_FILE)).unwrap();
    assert_eq!(source_vocab.index_of("hello"), Some(2));
}

#[test]
fn test_tensorize_skips_and_counts_failed_pairs() {
    let dir = tempdir().expect("Failed to create temp dir");
    // "hi there!" termina em espaço após normalizar; os outros pares são limpos
    let en = common::write_corpus(dir.path(), "en.txt", &["good night", "hi there!", "good day"]);
    let pt = common::write_corpus(dir.path(), "pt.txt", &["boa noite", "oi", "bom dia"]);
    let out = dir.path().join("out");
    run_build(&en, &pt, &out);

    let source_vocab = Vocabulary::load(&out.join(SOURCE_VOCAB_FILE)).unwrap();
    let target_vocab = Vocabulary::load(&out.join(TARGET_VOCAB_FILE)).unwrap();
    let pairs = load_pairs(&out.join(PAIRS_FILE)).unwrap();

    let tensors_path = out.join(TENSORS_FILE);
    let mut writer = TensorPairWriter::new(&tensors_path).unwrap();
    let report = write_tensor_pairs(
        &TensorizeConfig::new(),
        &pairs,
        &source_vocab,
        &target_vocab,
        &mut writer,
    )
    .unwrap();
    assert_eq!(writer.finish().unwrap(), 2);

    assert_eq!(report.written, 2);
    assert_eq!(report.failed, 1);

    let records = load_tensor_records(&tensors_path).unwrap();
    assert_eq!(records[0].source, vec![2, 3, 1]);
    assert_eq!(records[1].source, vec![2, 6, 1]);
    assert_eq!(records[1].target, vec![5, 6, 1]);
}

#[test]
fn test_tensorize_rejects_bad_end_marker() {
    let dir = tempdir().expect("Failed to create temp dir");
    let en = common::write_corpus(dir.path(), "en.txt", &["a"]);
    let pt = common::write_corpus(dir.path(), "pt.txt", &["b"]);
    let out = dir.path().join("out");
    run_build(&en, &pt, &out);

    let source_vocab = Vocabulary::load(&out.join(SOURCE_VOCAB_FILE)).unwrap();
    let target_vocab = Vocabulary::load(&out.join(TARGET_VOCAB_FILE)).unwrap();
    let pairs = load_pairs(&out.join(PAIRS_FILE)).unwrap();

    let mut writer = TensorPairWriter::new(&out.join(TENSORS_FILE)).unwrap();
    let config = TensorizeConfig::new().with_end_marker(99);
    let result = write_tensor_pairs(&config, &pairs, &source_vocab, &target_vocab, &mut writer);
    assert!(matches!(result, Err(PrepError::ConfigError(_))));
}
