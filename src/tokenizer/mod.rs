mod normalize;
mod vocab;

pub use normalize::normalize;
pub use vocab::{VocabFile, Vocabulary};
