/// Every contiguous run of at least `min_words` tokens, each rendered as
/// its words followed by a single space (`"a b "`).
///
/// Phrases are grouped by start position, shortest first. A `min_words` of
/// zero disables phrase generation.
pub fn generate_phrases<S: AsRef<str>>(tokens: &[S], min_words: usize) -> Vec<String> {
    let len = tokens.len();
    if min_words == 0 || len < min_words {
        return Vec::new();
    }

    let mut phrases = Vec::with_capacity(phrase_count(len, min_words));
    for start in 0..=len - min_words {
        let mut phrase = String::new();
        for (offset, token) in tokens[start..].iter().enumerate() {
            phrase.push_str(token.as_ref());
            phrase.push(' ');
            if offset + 1 >= min_words {
                phrases.push(phrase.clone());
            }
        }
    }
    phrases
}

/// Number of phrases `generate_phrases` yields for `len` tokens.
pub fn phrase_count(len: usize, min_words: usize) -> usize {
    if min_words == 0 || len < min_words {
        return 0;
    }
    (0..=len - min_words).map(|start| len - start - min_words + 1).sum()
}
