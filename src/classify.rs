//! Per-character predicates used by the tokenizer and sentence splitter.
//!
//! Classification is ASCII only. Any other character, accented letters
//! included, is neither a letter nor a digit and so acts as a word boundary.

/// Right single quotation mark, accepted inside words like an apostrophe.
pub const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Characters allowed inside a word but never at either end of one.
pub fn is_continuation(ch: char) -> bool {
    matches!(ch, '\'' | '-' | RIGHT_SINGLE_QUOTE)
}
