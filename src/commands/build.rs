//! Build Command
//!
//! Builds sentence pairs and per-language vocabularies from two aligned files.

use std::path::Path;
use std::time::Instant;

use seq2seq_prep::data::{
    build_pairs_and_vocab_with, save_pairs, CorpusConfig, RowCap, PAIRS_FILE, SOURCE_VOCAB_FILE,
    TARGET_VOCAB_FILE,
};
use seq2seq_prep::error::{PrepError, Result};
use seq2seq_prep::utils::{format_duration, format_number};

pub fn execute(
    source: &Path,
    target: &Path,
    output: &Path,
    max_rows: Option<usize>,
    legacy_row_cap: bool,
) -> Result<()> {
    println!("═══════════════════════════════════════════════════════════");
    println!("  📚 Construindo pares e vocabulários");
    println!("═══════════════════════════════════════════════════════════");
    println!("  Origem: {:?}", source);
    println!("  Destino: {:?}", target);
    if let Some(n) = max_rows {
        println!("  Max linhas: {}{}", n, if legacy_row_cap { " (+1 legado)" } else { "" });
    }
    println!();

    let row_cap = if legacy_row_cap { RowCap::Legacy } else { RowCap::Exact };
    let config = CorpusConfig::new()
        .with_max_rows(max_rows)
        .with_row_cap(row_cap);

    let start = Instant::now();
    let (pairs, source_vocab, target_vocab) = build_pairs_and_vocab_with(&config, source, target)?;

    std::fs::create_dir_all(output).map_err(|source| PrepError::FileWrite {
        path: output.to_path_buf(),
        source,
    })?;

    save_pairs(&output.join(PAIRS_FILE), &pairs)?;
    source_vocab.save(&output.join(SOURCE_VOCAB_FILE))?;
    target_vocab.save(&output.join(TARGET_VOCAB_FILE))?;

    println!("═══════════════════════════════════════════════════════════");
    println!("  ✅ Construção concluída!");
    println!("  Pares: {}", format_number(pairs.len()));
    println!("  Vocab origem: {}", format_number(source_vocab.size()));
    println!("  Vocab destino: {}", format_number(target_vocab.size()));
    println!("  Saída: {:?}", output);
    println!("  Tempo: {}", format_duration(start.elapsed().as_secs_f64()));
    println!("═══════════════════════════════════════════════════════════");
    Ok(())
}
