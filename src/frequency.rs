use std::collections::{HashMap, HashSet};

/// Occurrence counts for words or phrases, kept in order of first occurrence.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,   // key and count, first occurrence first
    index: HashMap<String, usize>,   // key to position in `entries`
}

/// A key with its count, as produced by [`FrequencyTable::rank`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub token: String,
    pub count: usize,
}

impl RankedEntry {
    pub fn new(token: impl Into<String>, count: usize) -> Self {
        RankedEntry {
            token: token.into(),
            count,
        }
    }
}

pub type RankedList = Vec<RankedEntry>;

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every item of `tokens`.
    pub fn count<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        table.extend(tokens);
        table
    }

    pub fn add(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 1));
            }
        }
    }

    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.add(token.as_ref());
        }
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Remove every key in `words`. Absent keys are ignored.
    pub fn subtract<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let doomed: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .filter(|w| self.index.contains_key(w))
            .collect();
        if doomed.is_empty() {
            return;
        }
        self.entries.retain(|(key, _)| !doomed.contains(key));
        self.reindex();
    }

    fn reindex(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(pos, (key, _))| (key.clone(), pos))
            .collect();
    }

    /// Entries by count, highest first; equal counts keep first-occurrence
    /// order. `n == 0` returns everything, otherwise at most `n` entries.
    pub fn rank(&self, n: usize) -> RankedList {
        let mut ranked: RankedList = self
            .entries
            .iter()
            .map(|(token, count)| RankedEntry::new(token.as_str(), *count))
            .collect();

        // stable sort: ties stay in insertion order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        if n > 0 {
            ranked.truncate(n);
        }
        ranked
    }
}
