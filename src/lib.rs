pub mod analysis;
pub mod classify;
pub mod config;
pub mod corpus;
pub mod error;
pub mod frequency;
pub mod input;
pub mod phrase;
pub mod render;
pub mod sentence;
pub mod tokenize;

pub use analysis::{Report, analyze};
pub use config::Config;
pub use corpus::{CommonWord, CorpusTransport, HttpTransport, LineStream};
pub use error::{Result, WordFreqError};
pub use frequency::{FrequencyTable, RankedEntry, RankedList};
pub use phrase::generate_phrases;
pub use render::{normalization_exponent, render, render_bar};
pub use sentence::segment;
pub use tokenize::tokenize;
