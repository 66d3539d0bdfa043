// src/tokenizer/normalize.rs

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex patterns compilados uma vez
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w ]").unwrap());
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Normaliza uma linha crua do corpus.
///
/// Ordem: lowercase, trim, pontuação -> espaço, dígitos -> espaço.
/// O trim acontece antes das substituições, então `"Hello, World! 123"`
/// vira `"hello world "` (espaço final vindo dos dígitos).
pub fn normalize(line: &str) -> String {
    // 1. Lowercase
    let lowered = line.to_lowercase();

    // 2. Remove espaços nas pontas
    let trimmed = lowered.trim();

    // 3. Tudo que não é caractere de palavra nem espaço literal
    let no_punct = NON_WORD.replace_all(trimmed, " ");

    // 4. Sequências de dígitos
    DIGITS.replace_all(&no_punct, " ").into_owned()
}
