//! Sentiment adapters - implementations of the sentiment scorer port.

mod lexical;

pub use lexical::LexicalScorer;
