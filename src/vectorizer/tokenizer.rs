//! Corpus tokenizer.
//!
//! Deliberately simple policy: lowercase the input, then take maximal runs of
//! ASCII letters `[a-z]+` as tokens. Digits, punctuation and non-ASCII
//! characters act as separators and are dropped. No stemming, no stopword
//! removal, no Unicode normalization.

/// Split `text` into lowercase alphabetic tokens.
///
/// An empty result is valid: a document may have no lexical content left
/// after filtering.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_lowercase() {
            current.push(ch);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
