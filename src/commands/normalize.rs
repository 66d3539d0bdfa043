//! Normalize Command
//!
//! Prints the normalized form of each line of a file.

use std::io::Write;
use std::path::Path;

use seq2seq_prep::data::{read_corpus_file, CorpusConfig};
use seq2seq_prep::Result;

pub fn execute(input: &Path, max_rows: Option<usize>) -> Result<()> {
    let config = CorpusConfig::new().with_max_rows(max_rows);
    let (lines, vocab) = read_corpus_file(input, &config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in &lines {
        writeln!(out, "{}", line)?;
    }

    tracing::info!("{} lines, {} words", lines.len(), vocab.size());
    Ok(())
}
