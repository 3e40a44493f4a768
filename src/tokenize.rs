//! Whitespace tokenisation over normalised text.
//!
//! Tokens keep their insertion order and duplicates. A token survives
//! only if it carries at least one Arabic-script or Latin letter, so
//! pure numbers drop out while alphanumeric Arabizi tokens (`3lach`)
//! stay.
use crate::lexicon::STOPWORDS;
use crate::normalize::{has_arabic_letters, has_latin_letters};

/// Split normalised text into tokens with alphabetic signal.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|tok| has_arabic_letters(tok) || has_latin_letters(tok))
        .map(str::to_string)
        .collect()
}

/// Drop stopwords, keeping order and duplicates of what remains.
pub fn remove_stopwords(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|tok| !STOPWORDS.contains(tok.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_keeps_order() {
        let tokens = tokenize("واش هاد الفيديو زوين بزاف");
        assert_eq!(tokens, vec!["واش", "هاد", "الفيديو", "زوين", "بزاف"]);
    }

    #[test]
    fn drops_pure_numbers_keeps_arabizi() {
        let tokens = tokenize("3lach 123 2020 b1");
        assert_eq!(tokens, vec!["3lach", "b1"]);
    }

    #[test]
    fn keeps_duplicates() {
        let tokens = tokenize("top top top");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  42  ").is_empty());
    }

    #[test]
    fn stopword_removal() {
        let tokens = tokenize("واش هاد الفيديو زوين");
        let kept = remove_stopwords(tokens);
        assert_eq!(kept, vec!["الفيديو", "زوين"]);
    }
}
