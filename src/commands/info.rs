//! Info Command
//!
//! Shows vocabulary size and most frequent words.

use std::path::Path;

use seq2seq_prep::utils::format_number;
use seq2seq_prep::{Result, Vocabulary};

pub fn execute(vocab_path: &Path, top: usize) -> Result<()> {
    let vocab = Vocabulary::load(vocab_path)?;
    let total: usize = vocab.word_counts().values().sum();

    println!("═══════════════════════════════════════════════════════════");
    println!("  📊 Vocabulário: {:?}", vocab_path);
    println!("═══════════════════════════════════════════════════════════");
    println!("  Palavras (com SOS/EOS): {}", format_number(vocab.size()));
    println!("  Ocorrências: {}", format_number(total));
    println!();
    println!("  🔥 Top {}:", top);
    for (word, count) in vocab.most_common(top) {
        let index = vocab.index_of(word).unwrap_or_default();
        println!("    [{:>6}] {:<20} {}", index, word, count);
    }
    println!("═══════════════════════════════════════════════════════════");
    Ok(())
}
