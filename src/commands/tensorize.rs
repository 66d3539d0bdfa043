//! Tensorize Command
//!
//! Converts the pairs produced by `build` into index sequences.

use std::path::Path;

use seq2seq_prep::data::{
    load_pairs, TensorPairWriter, PAIRS_FILE, SOURCE_VOCAB_FILE, TARGET_VOCAB_FILE, TENSORS_FILE,
};
use seq2seq_prep::error::Result;
use seq2seq_prep::tensor::{write_tensor_pairs, TensorizeConfig};
use seq2seq_prep::utils::format_number;
use seq2seq_prep::Vocabulary;

pub fn execute(data: &Path, end_marker: u32, skip_empty: bool) -> Result<()> {
    println!("═══════════════════════════════════════════════════════════");
    println!("  🔢 Tensorizando pares");
    println!("═══════════════════════════════════════════════════════════");

    let source_vocab = Vocabulary::load(&data.join(SOURCE_VOCAB_FILE))?;
    let target_vocab = Vocabulary::load(&data.join(TARGET_VOCAB_FILE))?;
    let pairs = load_pairs(&data.join(PAIRS_FILE))?;

    println!("  Pares: {}", format_number(pairs.len()));
    println!("  Marcador de fim: {}", end_marker);
    println!("  Ignorar tokens vazios: {}", skip_empty);
    println!();

    let config = TensorizeConfig::new()
        .with_end_marker(end_marker)
        .with_skip_empty_tokens(skip_empty);

    // Valida antes de criar o arquivo de saída
    config.validate(&source_vocab, &target_vocab)?;

    let out_path = data.join(TENSORS_FILE);
    let mut writer = TensorPairWriter::new(&out_path)?;
    let report = write_tensor_pairs(&config, &pairs, &source_vocab, &target_vocab, &mut writer)?;
    let written = writer.finish()?;

    println!("═══════════════════════════════════════════════════════════");
    println!("  ✅ Tensorização concluída!");
    println!("  Escritos: {}", format_number(written));
    println!("  Falhas de lookup: {}", format_number(report.failed));
    println!("  Arquivo: {:?}", out_path);
    println!("═══════════════════════════════════════════════════════════");
    Ok(())
}
