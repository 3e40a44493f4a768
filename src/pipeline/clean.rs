/*! The cleaning run.

Merges comment streams, deduplicates, classifies and persists:

1. load the primary dump (fatal on structural errors) and, when
   configured, the secondary Instagram dump (best-effort),
2. deduplicate candidates by `comment_id`, first occurrence wins,
3. classify every candidate — an embarrassingly parallel map, fanned
   out with rayon while the verdicts come back in input order,
4. deduplicate accepted comments by canonical cleaned text, first
   occurrence wins, counting the rest as duplicates,
5. accumulate counters and write the accepted/rejected collections.

The dedup sets and counters live in this single sequential pass; the
classification itself shares nothing mutable.
!*/
use std::collections::HashSet;
use std::path::PathBuf;

use log::info;
use rayon::prelude::*;

use crate::classify::{Classifier, Verdict};
use crate::config::CleaningConfig;
use crate::error::Error;
use crate::io;
use crate::sources::{instagram, AcceptedComment, RawComment, RejectedComment, Source};

use super::stats::RunStats;

/// One configured cleaning run over on-disk collections.
pub struct CleaningPipeline {
    src: PathBuf,
    instagram_src: Option<PathBuf>,
    dst: PathBuf,
    dropped_dst: PathBuf,
    config: CleaningConfig,
}

impl CleaningPipeline {
    pub fn new(
        src: PathBuf,
        instagram_src: Option<PathBuf>,
        dst: PathBuf,
        dropped_dst: PathBuf,
        config: CleaningConfig,
    ) -> Self {
        Self {
            src,
            instagram_src,
            dst,
            dropped_dst,
            config,
        }
    }

    /// Execute the run and return the final counters.
    pub fn run(&self) -> Result<RunStats, Error> {
        let mut stats = RunStats::default();

        info!("loading primary dump from {:?}", self.src);
        let mut candidates = io::read_comments(&self.src)?;
        info!("{} comments in primary dump", candidates.len());

        if let Some(path) = &self.instagram_src {
            candidates.extend(instagram::load(path));
        }

        let candidates = dedup_by_id(candidates);
        stats.add("total", candidates.len() as u64);
        for comment in &candidates {
            stats.incr_source_total(comment.source);
        }

        info!("classifying {} candidates", candidates.len());
        let classifier = Classifier::new(self.config.clone());
        let verdicts: Vec<(RawComment, Verdict)> = candidates
            .into_par_iter()
            .map(|comment| {
                let verdict = classifier.classify(&comment.text);
                (comment, verdict)
            })
            .collect();

        let mut seen_clean: HashSet<String> = HashSet::new();
        let mut accepted: Vec<(Source, AcceptedComment)> = Vec::new();
        let mut rejected: Vec<RejectedComment> = Vec::new();
        for (raw, verdict) in verdicts {
            match verdict {
                Verdict::Accepted(cleaned) => {
                    stats.incr("kept");
                    if seen_clean.contains(&cleaned.text_clean) {
                        stats.incr("duplicates_removed");
                        continue;
                    }
                    seen_clean.insert(cleaned.text_clean.clone());
                    accepted.push((raw.source, AcceptedComment::new(raw, cleaned)));
                }
                Verdict::Rejected(reason) => {
                    stats.incr_drop(reason);
                    rejected.push(RejectedComment::new(raw, reason));
                }
            }
        }

        stats.add("final_count", accepted.len() as u64);
        for (source, _) in &accepted {
            stats.incr_source_final(*source);
        }

        let records: Vec<AcceptedComment> =
            accepted.into_iter().map(|(_, record)| record).collect();
        io::write_records(&self.dst, &records)?;
        io::write_records(&self.dropped_dst, &rejected)?;

        info!(
            "run complete: {} kept, {} duplicates removed, {} dropped",
            stats.get("final_count"),
            stats.get("duplicates_removed"),
            stats.get("dropped"),
        );
        Ok(stats)
    }
}

/// Keep the first occurrence of every `comment_id`. Records without an
/// id carry no dedup key and are discarded.
fn dedup_by_id(candidates: Vec<RawComment>) -> Vec<RawComment> {
    let mut seen: HashSet<String> = HashSet::new();
    candidates
        .into_iter()
        .filter(|comment| {
            !comment.comment_id.is_empty() && seen.insert(comment.comment_id.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, text: &str) -> RawComment {
        RawComment {
            comment_id: id.to_string(),
            text: text.to_string(),
            video_id: "v1".to_string(),
            author: "author".to_string(),
            date: "2025-05-01T00:00:00Z".to_string(),
            likes: 0,
            channel: "channel".to_string(),
            source: Source::Youtube,
        }
    }

    #[test]
    fn id_dedup_first_wins() {
        let deduped = dedup_by_id(vec![
            raw("a", "first"),
            raw("b", "second"),
            raw("a", "third"),
            raw("", "no id"),
        ]);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].text, "first");
        assert_eq!(deduped[1].text, "second");
    }
}
