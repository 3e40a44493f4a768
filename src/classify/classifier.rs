/*! The comment classification gates.

An ordered sequence of checks where the first matching gate decides:

1. blank input,
2. emoji-only content,
3. empty or letter-free after normalisation,
4. empty after tokenisation,
5. spam-dominated vocabulary,
6. dialect determination, routing non-Darija text through the
   religious-formula check and Darija text through the generic-phrase
   check,
7. stopword removal leaving nothing,
8. minimum length, with a sentiment rescue for short comments,
9. language-hint tagging,
10. acceptance.

The order is part of the contract: spam wins over dialect, dialect
over formula checks. Gates are total functions over finite lexicons
and anchored patterns, so classification never fails and never loops.
!*/
use crate::config::CleaningConfig;
use crate::lexicon::{
    is_latin_negation, is_latin_verb_prefix, DARIJA_MARKERS, GENERIC_PHRASES, GENERIC_TOKENS,
    RELIGIOUS_MARKERS, SENTIMENT_WORDS, STOPWORDS,
};
use crate::normalize::{has_letters, is_emoji_only, normalize};
use crate::tokenize::{remove_stopwords, tokenize};

use super::stats::TokenStats;
use super::verdict::{CleanedComment, DropReason, LangHint, Verdict};

/// Deterministic rule-based comment classifier. Holds the run
/// configuration and nothing else, so one instance can classify any
/// number of comments from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: CleaningConfig,
}

impl Classifier {
    pub fn new(config: CleaningConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the classifier's configuration.
    pub fn config(&self) -> &CleaningConfig {
        &self.config
    }

    /// Run the gates over one raw comment text.
    /// Exactly one verdict comes out, whatever the input looks like.
    pub fn classify(&self, text: &str) -> Verdict {
        let cfg = &self.config;

        let text = text.trim();
        if text.is_empty() {
            return Verdict::Rejected(DropReason::Empty);
        }
        if cfg.drop_emoji_only && is_emoji_only(text) {
            return Verdict::Rejected(DropReason::EmojiOnly);
        }

        let cleaned = normalize(text);
        if cleaned.is_empty() || !has_letters(&cleaned) {
            return Verdict::Rejected(DropReason::EmptyAfterClean);
        }

        // dialect evidence is measured before stopword removal
        let full_tokens = tokenize(&cleaned);
        if full_tokens.is_empty() {
            return Verdict::Rejected(DropReason::EmptyAfterTokenize);
        }
        let stats = TokenStats::from_tokens(&full_tokens);

        if cfg.drop_spam && spam_ratio(&stats, &full_tokens) > 0.5 {
            return Verdict::Rejected(DropReason::Spam);
        }

        if !self.is_darija(&cleaned, &full_tokens, &stats) {
            if cfg.drop_religious_msa && is_religious_msa(&full_tokens, &cleaned) {
                return Verdict::Rejected(DropReason::ReligiousMsa);
            }
            return Verdict::Rejected(DropReason::NotDarija);
        }
        if cfg.drop_generic_phrases && is_generic_phrase(&cleaned, &full_tokens) {
            return Verdict::Rejected(DropReason::GenericPhrase);
        }

        let tokens = remove_stopwords(full_tokens);
        if tokens.is_empty() {
            return Verdict::Rejected(DropReason::OnlyStopwords);
        }
        if tokens.len() < cfg.min_tokens
            && !(cfg.keep_short_if_sentiment && has_sentiment(&tokens))
        {
            return Verdict::Rejected(DropReason::TooShort);
        }

        Verdict::Accepted(CleanedComment {
            text_clean: cleaned,
            tokens,
            lang_hint: lang_hint(&stats),
        })
    }

    /// Dialect determination over the pre-stopword token sequence.
    ///
    /// Lexicon evidence decides first; without it, script composition
    /// fallbacks take over, each behind its configuration flag.
    fn is_darija(&self, cleaned: &str, tokens: &[String], stats: &TokenStats) -> bool {
        let cfg = &self.config;
        if tokens.is_empty() {
            return false;
        }
        // formulaic boilerplate is register-neutral, never dialect evidence
        if GENERIC_PHRASES.contains(cleaned) {
            return false;
        }

        let total_darija = stats.total_darija();
        if total_darija > 0 {
            if stats.msa_hits > 0 {
                let ratio = total_darija as f64 / (total_darija + stats.msa_hits) as f64;
                if ratio < cfg.darija_ratio_threshold {
                    // formal register dominates
                    return false;
                }
            }
            if total_darija >= cfg.min_darija_hits {
                return true;
            }
            // below the evidence floor: fall through to the script rules
        } else if stats.msa_hits > 0 {
            return false;
        }

        if cfg.allow_arabizi && stats.has_arabizi_digits {
            return true;
        }
        if cfg.allow_mixed_script && stats.has_arabic && stats.has_latin {
            // script mixing is itself a strong informal signal
            return true;
        }
        if stats.has_arabic && !stats.has_latin {
            return cfg.allow_arabic_no_markers
                && tokens.len() <= cfg.arabic_no_markers_max_tokens;
        }
        if stats.has_latin && !stats.has_arabic {
            if cfg.drop_spam && spam_ratio(stats, tokens) > 0.3 {
                return false;
            }
            if tokens.iter().any(|t| DARIJA_MARKERS.contains(t.as_str())) {
                return true;
            }
            if tokens
                .iter()
                .any(|t| is_latin_negation(t) || is_latin_verb_prefix(t))
            {
                return true;
            }
            return cfg.allow_latin_no_markers && tokens.len() <= cfg.latin_no_markers_max_tokens;
        }
        false
    }
}

fn spam_ratio(stats: &TokenStats, tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    stats.spam_hits as f64 / tokens.len() as f64
}

/// Language hint from script composition.
fn lang_hint(stats: &TokenStats) -> LangHint {
    if stats.has_arabic && stats.has_latin {
        LangHint::Mixed
    } else if !stats.has_arabic && (stats.has_arabizi_digits || stats.has_latin) {
        LangHint::Arabizi
    } else {
        LangHint::Darija
    }
}

/// Religious/MSA formula check, applied to non-dialect comments only:
/// an exact formulaic phrase, a majority of strict religious markers
/// among non-stopword tokens, or no content tokens at all.
fn is_religious_msa(tokens: &[String], cleaned: &str) -> bool {
    if GENERIC_PHRASES.contains(cleaned) {
        return true;
    }
    if tokens.is_empty() {
        return true;
    }
    let content: Vec<&String> = tokens
        .iter()
        .filter(|t| !STOPWORDS.contains(t.as_str()))
        .collect();
    if content.is_empty() {
        return true;
    }
    let religious = content
        .iter()
        .filter(|t| RELIGIOUS_MARKERS.contains(t.as_str()))
        .count();
    religious as f64 / content.len() as f64 > 0.5
}

/// Generic-phrase check, applied to dialect comments only: an exact
/// phrase match, or a short comment made entirely of formulaic tokens.
fn is_generic_phrase(cleaned: &str, tokens: &[String]) -> bool {
    if GENERIC_PHRASES.contains(cleaned) {
        return true;
    }
    if tokens.is_empty() {
        return true;
    }
    tokens.len() <= 4 && tokens.iter().all(|t| GENERIC_TOKENS.contains(t.as_str()))
}

fn has_sentiment(tokens: &[String]) -> bool {
    tokens.iter().any(|t| SENTIMENT_WORDS.contains(t.as_str()))
}
