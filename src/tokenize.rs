use crate::classify::{is_continuation, is_digit, is_letter};

/// Split `text` into lowercase word tokens, in scan order.
///
/// A token is a run of ASCII letters and digits which may carry
/// apostrophes, hyphens or right single quotes on the inside. Leading
/// continuation characters are never started on, trailing ones are stripped.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for ch in text.chars() {
        if is_letter(ch) || is_digit(ch) {
            word.push(ch.to_ascii_lowercase());
        } else if is_continuation(ch) && !word.is_empty() {
            word.push(ch);
        } else {
            flush(&mut word, &mut tokens);
        }
    }
    flush(&mut word, &mut tokens);

    tokens
}

// strip trailing continuation characters and keep whatever is left
fn flush(word: &mut String, tokens: &mut Vec<String>) {
    while word.ends_with(is_continuation) {
        word.pop();
    }
    if !word.is_empty() {
        tokens.push(std::mem::take(word));
    }
}
