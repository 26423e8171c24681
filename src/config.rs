use crate::corpus::DEFAULT_CORPUS_URL;
use crate::error::{Result, WordFreqError};

/// Settings for one analysis run.
#[derive(Debug, Clone)]
pub struct Config {
    pub number: usize,           // entries to show, 0 for all
    pub phrase_min_words: usize, // shortest phrase, 0 disables phrases
    pub histogram: bool,
    pub show_count: bool,
    pub uncommon: usize, // remove this many of the most common words
    pub compare: usize,  // show this many common words alongside
    pub corpus_url: String,
    pub page_size: usize, // corpus lines per page when removing words
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            number: 10,
            phrase_min_words: 0,
            histogram: false,
            show_count: true,
            uncommon: 0,
            compare: 0,
            corpus_url: DEFAULT_CORPUS_URL.to_string(),
            page_size: 1000,
            verbose: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(WordFreqError::InvalidConfig(
                "page size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
