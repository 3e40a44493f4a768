//! Classification outcomes.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a comment was excluded. Drop reasons are business outcomes of
/// the gate pipeline, not failures: every reason is final and counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    Empty,
    EmojiOnly,
    EmptyAfterClean,
    EmptyAfterTokenize,
    Spam,
    ReligiousMsa,
    NotDarija,
    GenericPhrase,
    OnlyStopwords,
    TooShort,
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::Empty => "empty",
            DropReason::EmojiOnly => "emoji_only",
            DropReason::EmptyAfterClean => "empty_after_clean",
            DropReason::EmptyAfterTokenize => "empty_after_tokenize",
            DropReason::Spam => "spam",
            DropReason::ReligiousMsa => "religious_msa",
            DropReason::NotDarija => "not_darija",
            DropReason::GenericPhrase => "generic_phrase",
            DropReason::OnlyStopwords => "only_stopwords",
            DropReason::TooShort => "too_short",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse script composition of an accepted comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LangHint {
    Darija,
    Mixed,
    Arabizi,
}

impl LangHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            LangHint::Darija => "darija",
            LangHint::Mixed => "mixed",
            LangHint::Arabizi => "arabizi",
        }
    }
}

impl fmt::Display for LangHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of an accepted comment.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedComment {
    /// Canonical normalised text.
    pub text_clean: String,
    /// Stopword-filtered tokens, in order.
    pub tokens: Vec<String>,
    pub lang_hint: LangHint,
}

/// One verdict per input, always: either the cleaned payload or a
/// single drop reason.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Accepted(CleanedComment),
    Rejected(DropReason),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }
}

#[cfg(test)]
mod tests {
    use super::DropReason;

    #[test]
    fn reason_wire_format() {
        let serialized = serde_json::to_string(&DropReason::ReligiousMsa).unwrap();
        assert_eq!(serialized, r#""religious_msa""#);
        let parsed: DropReason = serde_json::from_str(r#""emoji_only""#).unwrap();
        assert_eq!(parsed, DropReason::EmojiOnly);
    }

    #[test]
    fn display_matches_wire_format() {
        assert_eq!(DropReason::TooShort.to_string(), "too_short");
        assert_eq!(super::LangHint::Arabizi.to_string(), "arabizi");
    }
}
