//! The full analysis run: count words (and phrases), drop or compare
//! against common words, rank, and lay out the report.

use crate::config::Config;
use crate::corpus::{self, CommonWordPages, CorpusTransport};
use crate::error::Result;
use crate::frequency::{FrequencyTable, RankedEntry, RankedList};
use crate::phrase::generate_phrases;
use crate::render::{render, side_by_side};
use crate::sentence::segment;
use crate::tokenize::tokenize;
use log::{debug, info};

/// Ranked results of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub words: RankedList,
    pub phrases: Option<RankedList>,
    /// Most common corpus words with their reference counts.
    pub reference: Option<RankedList>,
}

pub fn count_words(text: &str) -> FrequencyTable {
    let table = FrequencyTable::count(tokenize(text));
    debug!("{} word tokens, {} distinct", table.total(), table.len());
    table
}

/// Count phrases of at least `min_words` words. Phrases never span a
/// sentence boundary.
pub fn count_phrases(text: &str, min_words: usize) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    let sentences = segment(text);
    debug!("{} sentences", sentences.len());
    for sentence in &sentences {
        let tokens = tokenize(sentence);
        table.extend(generate_phrases(&tokens, min_words));
    }
    debug!("{} distinct phrases", table.len());
    table
}

/// Remove the `config.uncommon` most common corpus words from `table`,
/// a page at a time. Returns how many distinct words were removed.
pub fn remove_common_words<T: CorpusTransport>(
    table: &mut FrequencyTable,
    config: &Config,
    transport: &T,
) -> Result<usize> {
    let before = table.len();
    let mut stream = corpus::open(transport, &config.corpus_url)?;
    for page in CommonWordPages::new(&mut stream, config.page_size, config.uncommon) {
        table.subtract(page?);
    }
    let removed = before - table.len();
    info!(
        "removed {removed} common words (corpus lines read: {})",
        stream.line_index()
    );
    Ok(removed)
}

/// The first `config.compare` corpus entries as a ranked list.
pub fn reference_list<T: CorpusTransport>(config: &Config, transport: &T) -> Result<RankedList> {
    let mut stream = corpus::open(transport, &config.corpus_url)?;
    let window = corpus::fetch_window(&mut stream, 0, config.compare, true)?;
    Ok(window
        .into_iter()
        .map(|entry| {
            let count = entry.frequency.unwrap_or_default();
            RankedEntry::new(entry.word, usize::try_from(count).unwrap_or(usize::MAX))
        })
        .collect())
}

/// Run the whole pipeline over `text`. The transport is only used when
/// `config` asks for the corpus.
pub fn analyze<T: CorpusTransport>(text: &str, config: &Config, transport: &T) -> Result<Report> {
    config.validate()?;

    let mut words = count_words(text);
    if config.uncommon > 0 {
        remove_common_words(&mut words, config, transport)?;
    }

    let phrases = (config.phrase_min_words > 0)
        .then(|| count_phrases(text, config.phrase_min_words).rank(config.number));

    let reference = if config.compare > 0 {
        Some(reference_list(config, transport)?)
    } else {
        None
    };

    Ok(Report {
        words: words.rank(config.number),
        phrases,
        reference,
    })
}

impl Report {
    /// Output lines: the word table (beside the reference table, if any),
    /// then the phrase table under its own heading.
    pub fn lines(&self, config: &Config) -> Vec<String> {
        let words = render(&self.words, config.histogram, config.show_count);
        let mut lines = match &self.reference {
            Some(reference) => {
                let reference = render(reference, config.histogram, config.show_count);
                side_by_side(&words, &reference)
            }
            None => words,
        };

        if let Some(phrases) = &self.phrases {
            if !phrases.is_empty() {
                lines.push(String::new());
                lines.push("Phrases:".to_string());
                lines.extend(render(phrases, config.histogram, config.show_count));
            }
        }
        lines
    }
}
