//! Cleaning run configuration.
//!
//! All thresholds used by the classification gates live here.
//! A config is fixed for the duration of one run: the pipeline takes it
//! by value at construction and never mutates it afterwards.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Thresholds and gate toggles for one cleaning run.
///
/// Every field has a default, so a partial JSON file overriding a
/// subset of fields is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CleaningConfig {
    /// Minimum number of tokens left after stopword removal.
    pub min_tokens: usize,
    /// Minimum share of dialect evidence over dialect+MSA evidence
    /// required to still call a mixed comment Darija.
    pub darija_ratio_threshold: f64,
    /// Minimum combined marker+morphology evidence for the lexicon
    /// branch of dialect determination to accept on its own.
    pub min_darija_hits: usize,
    /// Accept comments mixing Arabic and Latin script.
    pub allow_mixed_script: bool,
    /// Accept comments carrying Arabizi-style digits.
    pub allow_arabizi: bool,
    /// Accept short Arabic-only comments without any lexicon marker.
    pub allow_arabic_no_markers: bool,
    /// Length cap for marker-less Arabic-only acceptance.
    pub arabic_no_markers_max_tokens: usize,
    /// Accept short Latin-only comments without any lexicon marker.
    pub allow_latin_no_markers: bool,
    /// Length cap for marker-less Latin-only acceptance.
    pub latin_no_markers_max_tokens: usize,
    /// Keep too-short comments when a token carries sentiment.
    pub keep_short_if_sentiment: bool,
    /// Drop comments whose letters vanish once emoji/noise are stripped.
    pub drop_emoji_only: bool,
    /// Drop non-dialect comments that are religious/MSA formulas.
    pub drop_religious_msa: bool,
    /// Drop dialect comments that are generic formulaic phrases.
    pub drop_generic_phrases: bool,
    /// Drop comments dominated by spam vocabulary.
    pub drop_spam: bool,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        CleaningConfig {
            min_tokens: 1,
            darija_ratio_threshold: 0.4,
            min_darija_hits: 1,
            allow_mixed_script: true,
            allow_arabizi: true,
            allow_arabic_no_markers: true,
            arabic_no_markers_max_tokens: 18,
            allow_latin_no_markers: false,
            latin_no_markers_max_tokens: 5,
            keep_short_if_sentiment: true,
            drop_emoji_only: true,
            drop_religious_msa: true,
            drop_generic_phrases: true,
            drop_spam: true,
        }
    }
}

impl CleaningConfig {
    /// Read a configuration from a JSON file.
    /// Missing fields fall back to their defaults.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::CleaningConfig;

    #[test]
    fn defaults() {
        let cfg = CleaningConfig::default();
        assert_eq!(cfg.min_tokens, 1);
        assert_eq!(cfg.darija_ratio_threshold, 0.4);
        assert_eq!(cfg.arabic_no_markers_max_tokens, 18);
        assert_eq!(cfg.latin_no_markers_max_tokens, 5);
        assert!(cfg.drop_emoji_only);
        assert!(!cfg.allow_latin_no_markers);
    }

    #[test]
    fn partial_override() {
        let cfg: CleaningConfig =
            serde_json::from_str(r#"{"darija_ratio_threshold": 0.5, "drop_spam": false}"#).unwrap();
        assert_eq!(cfg.darija_ratio_threshold, 0.5);
        assert!(!cfg.drop_spam);
        // untouched fields keep their defaults
        assert_eq!(cfg.min_tokens, 1);
        assert!(cfg.keep_short_if_sentiment);
    }
}
