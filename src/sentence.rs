use crate::classify::is_digit;

/// Returns true if `curr` ends a sentence.
///
/// Newlines, `!` and `?` always do. A `.` does unless it sits between two
/// digits, which keeps decimals such as `3.50` inside one sentence.
pub fn is_sentence_boundary(prev: char, curr: char, next: char) -> bool {
    match curr {
        '\n' | '!' | '?' => true,
        '.' => !(is_digit(prev) && is_digit(next)),
        _ => false,
    }
}

/// Split `text` into sentences. Boundary characters are dropped.
///
/// Only characters with a neighbour on both sides are tested as boundaries:
/// the first character always opens the first sentence and the last one
/// always closes the final sentence, whatever they are. A one-character
/// text is both first and last, so it comes back doubled (`"a"` gives
/// `["aa"]`).
pub fn segment(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let (Some(&first), Some(&last)) = (chars.first(), chars.last()) else {
        return Vec::new();
    };

    let mut sentences = Vec::new();
    let mut sentence = String::from(first);

    for window in chars.windows(3) {
        let (prev, curr, next) = (window[0], window[1], window[2]);
        if is_sentence_boundary(prev, curr, next) {
            if !sentence.is_empty() {
                sentences.push(std::mem::take(&mut sentence));
            }
        } else {
            sentence.push(curr);
        }
    }

    sentence.push(last);
    sentences.push(sentence);
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_rules() {
        assert!(is_sentence_boundary('a', '\n', 'b'));
        assert!(is_sentence_boundary('a', '!', ' '));
        assert!(is_sentence_boundary('a', '?', ' '));
        assert!(is_sentence_boundary('a', '.', ' '));
        assert!(is_sentence_boundary('3', '.', ' '));
        assert!(is_sentence_boundary(' ', '.', '5'));
        assert!(!is_sentence_boundary('3', '.', '5'));
        assert!(!is_sentence_boundary('a', ',', 'b'));
    }

    #[test]
    fn splits_and_drops_boundaries() {
        assert_eq!(
            segment("The cat sat on the mat. The cat ran."),
            vec!["The cat sat on the mat", " The cat ran."]
        );
    }

    #[test]
    fn decimal_point_is_not_a_boundary() {
        assert_eq!(segment("It costs 3.50 now. Ok"), vec!["It costs 3.50 now", " Ok"]);
    }

    #[test]
    fn consecutive_boundaries_do_not_make_empty_sentences() {
        assert_eq!(segment("Hi!?\n\nyes"), vec!["Hi", "yes"]);
    }

    #[test]
    fn first_and_last_characters_are_never_boundaries() {
        assert_eq!(segment(".x."), vec![".x."]);
        assert_eq!(segment("!!"), vec!["!!"]);
    }

    #[test]
    fn short_texts() {
        assert!(segment("").is_empty());
        assert_eq!(segment("a"), vec!["aa"]);
        assert_eq!(segment("."), vec![".."]);
        assert_eq!(segment("ab"), vec!["ab"]);
    }

    #[test]
    fn multibyte_characters() {
        assert_eq!(segment("café? déjà vu"), vec!["café", " déjà vu"]);
    }
}
