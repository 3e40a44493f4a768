//! Raw and processed comment records.
use serde::{Deserialize, Deserializer, Serialize};

use crate::classify::{CleanedComment, DropReason, LangHint};

/// Platform a comment was fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Youtube,
    Instagram,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Youtube => "youtube",
            Source::Instagram => "instagram",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn source_default() -> Source {
    // the primary dump predates the source tag
    Source::Youtube
}

/// Accepts any JSON value where a text field is expected. Non-string
/// payloads degrade to an empty string so the record flows into the
/// `empty` rejection path instead of aborting the run.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

/// One comment as fetched from a platform. Immutable once ingested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawComment {
    #[serde(default)]
    pub comment_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(default)]
    pub video_id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub channel: String,
    #[serde(default = "source_default")]
    pub source: Source,
}

/// A kept comment, enriched with its canonical form and tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AcceptedComment {
    pub comment_id: String,
    /// Original text, untouched.
    pub text: String,
    /// Canonical cleaned text, the cross-source dedup key.
    pub text_clean: String,
    pub tokens: Vec<String>,
    pub date: String,
    pub likes: i64,
    pub channel: String,
    pub lang_hint: LangHint,
}

impl AcceptedComment {
    pub fn new(raw: RawComment, cleaned: CleanedComment) -> Self {
        AcceptedComment {
            comment_id: raw.comment_id,
            text: raw.text,
            text_clean: cleaned.text_clean,
            tokens: cleaned.tokens,
            date: raw.date,
            likes: raw.likes,
            channel: raw.channel,
            lang_hint: cleaned.lang_hint,
        }
    }
}

/// A dropped comment: full original metadata plus the drop reason,
/// kept around for auditing the filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RejectedComment {
    pub comment_id: String,
    pub text: String,
    pub video_id: String,
    pub author: String,
    pub date: String,
    pub likes: i64,
    pub channel: String,
    pub source: Source,
    pub drop_reason: DropReason,
}

impl RejectedComment {
    pub fn new(raw: RawComment, drop_reason: DropReason) -> Self {
        RejectedComment {
            comment_id: raw.comment_id,
            text: raw.text,
            video_id: raw.video_id,
            author: raw.author,
            date: raw.date,
            likes: raw.likes,
            channel: raw.channel,
            source: raw.source,
            drop_reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_record() {
        let json = r#"{
            "comment_id": "yt_1",
            "text": "واش هاد الفيديو زوين",
            "video_id": "abc",
            "author": "user",
            "date": "2025-03-01T10:00:00Z",
            "likes": 3,
            "channel": "Hespress",
            "source": "youtube"
        }"#;
        let raw: RawComment = serde_json::from_str(json).unwrap();
        assert_eq!(raw.comment_id, "yt_1");
        assert_eq!(raw.source, Source::Youtube);
        assert_eq!(raw.likes, 3);
    }

    #[test]
    fn missing_source_defaults_to_youtube() {
        let raw: RawComment =
            serde_json::from_str(r#"{"comment_id": "c1", "text": "hello"}"#).unwrap();
        assert_eq!(raw.source, Source::Youtube);
    }

    #[test]
    fn non_string_text_degrades_to_empty() {
        let raw: RawComment =
            serde_json::from_str(r#"{"comment_id": "c1", "text": 42}"#).unwrap();
        assert_eq!(raw.text, "");
        let raw: RawComment =
            serde_json::from_str(r#"{"comment_id": "c2", "text": null}"#).unwrap();
        assert_eq!(raw.text, "");
    }

    #[test]
    fn lang_hint_wire_format() {
        let raw = RawComment {
            comment_id: "ig_1".into(),
            text: "zwin".into(),
            video_id: String::new(),
            author: String::new(),
            date: String::new(),
            likes: 0,
            channel: String::new(),
            source: Source::Instagram,
        };
        let accepted = AcceptedComment::new(
            raw,
            CleanedComment {
                text_clean: "zwin".into(),
                tokens: vec!["zwin".into()],
                lang_hint: LangHint::Arabizi,
            },
        );
        let json = serde_json::to_string(&accepted).unwrap();
        assert!(json.contains(r#""lang_hint":"arabizi""#));
        // the accepted schema does not leak the source tag
        assert!(!json.contains("instagram"));
    }
}
