//! End-to-end cleaning runs over on-disk dumps.
use std::collections::HashSet;
use std::path::Path;

use gherbal::config::CleaningConfig;
use gherbal::pipeline::CleaningPipeline;
use gherbal::sources::{AcceptedComment, RejectedComment};

fn comment(id: &str, text: &str) -> serde_json::Value {
    serde_json::json!({
        "comment_id": id,
        "text": text,
        "video_id": "vid1",
        "author": "someone",
        "date": "2025-03-01T10:00:00Z",
        "likes": 2,
        "channel": "Hespress"
    })
}

fn write_primary(path: &Path) {
    let records = serde_json::Value::Array(vec![
        comment("yt_1", "واش هاد الفيديو زوين بزاف 😍😍 http://x.co"),
        // same id on purpose: only the first survives
        comment("yt_1", "duplicate id payload"),
        // two ids, one canonical cleaned form
        comment("yt_2", "زوين بزاف"),
        comment("yt_3", "زوين بزاف!!!"),
        comment("yt_4", "😂😂😂"),
        comment("yt_5", "please subscribe channel click link free gift"),
        comment("yt_6", "سبحان الله وبحمده"),
        comment("yt_7", ""),
    ]);
    std::fs::write(path, serde_json::to_string_pretty(&records).unwrap()).unwrap();
}

fn write_instagram(path: &Path) {
    let records = serde_json::json!([{
        "id": "900",
        "text": "hadchi zwin bzaf",
        "postUrl": "https://www.instagram.com/p/Cabc1/",
        "ownerUsername": "simo",
        "timestamp": "2025-04-02T09:00:00Z",
        "likesCount": 4,
        "replies": [
            {"id": "901", "text": "wach bssah", "ownerUsername": "sara",
             "timestamp": "2025-04-02T09:10:00Z", "likesCount": 0}
        ]
    }]);
    std::fs::write(path, serde_json::to_string_pretty(&records).unwrap()).unwrap();
}

#[test_log::test]
fn full_run() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("comments.json");
    let inst = dir.path().join("inst.json");
    let dst = dir.path().join("processed/comments_clean.json");
    let dropped_dst = dir.path().join("processed/comments_dropped.json");
    write_primary(&src);
    write_instagram(&inst);

    let pipeline = CleaningPipeline::new(
        src,
        Some(inst),
        dst.clone(),
        dropped_dst.clone(),
        CleaningConfig::default(),
    );
    let stats = pipeline.run().unwrap();

    let accepted: Vec<AcceptedComment> =
        serde_json::from_str(&std::fs::read_to_string(&dst).unwrap()).unwrap();
    let rejected: Vec<RejectedComment> =
        serde_json::from_str(&std::fs::read_to_string(&dropped_dst).unwrap()).unwrap();

    // yt_1, yt_2, ig_900, ig_901 survive; yt_3 is a textual duplicate of yt_2
    let kept_ids: HashSet<&str> = accepted.iter().map(|c| c.comment_id.as_str()).collect();
    assert_eq!(
        kept_ids,
        ["yt_1", "yt_2", "ig_900", "ig_901"].into_iter().collect()
    );

    // no two accepted records share a cleaned form, no two records an id
    let cleans: HashSet<&str> = accepted.iter().map(|c| c.text_clean.as_str()).collect();
    assert_eq!(cleans.len(), accepted.len());
    assert_eq!(kept_ids.len(), accepted.len());

    // 7 unique primary ids + 2 instagram records
    assert_eq!(stats.get("total"), 9);
    assert_eq!(stats.get("total_youtube"), 7);
    assert_eq!(stats.get("total_instagram"), 2);
    assert_eq!(stats.get("kept"), 5);
    assert_eq!(stats.get("duplicates_removed"), 1);
    assert_eq!(stats.get("final_count"), 4);
    assert_eq!(stats.get("final_youtube"), 2);
    assert_eq!(stats.get("final_instagram"), 2);
    assert_eq!(stats.get("dropped"), 4);
    assert_eq!(stats.get("dropped_empty"), 1);
    assert_eq!(stats.get("dropped_emoji_only"), 1);
    assert_eq!(stats.get("dropped_spam"), 1);
    assert_eq!(stats.get("dropped_religious_msa"), 1);

    // every rejected record keeps its metadata and reason
    assert_eq!(rejected.len(), 4);
    assert!(rejected.iter().all(|r| !r.comment_id.is_empty()));
    let spam = rejected
        .iter()
        .find(|r| r.comment_id == "yt_5")
        .expect("spam record present");
    assert_eq!(spam.drop_reason.to_string(), "spam");
    assert_eq!(spam.channel, "Hespress");
}

#[test_log::test]
fn missing_instagram_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("comments.json");
    write_primary(&src);

    let pipeline = CleaningPipeline::new(
        src,
        Some(dir.path().join("nope.json")),
        dir.path().join("clean.json"),
        dir.path().join("dropped.json"),
        CleaningConfig::default(),
    );
    let stats = pipeline.run().unwrap();
    assert_eq!(stats.get("total_instagram"), 0);
    assert_eq!(stats.get("total"), 7);
}

#[test_log::test]
fn missing_primary_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = CleaningPipeline::new(
        dir.path().join("absent.json"),
        None,
        dir.path().join("clean.json"),
        dir.path().join("dropped.json"),
        CleaningConfig::default(),
    );
    assert!(pipeline.run().is_err());
}

#[test_log::test]
fn outputs_preserve_unicode_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("comments.json");
    let dst = dir.path().join("clean.json");
    write_primary(&src);

    let pipeline = CleaningPipeline::new(
        src,
        None,
        dst.clone(),
        dir.path().join("dropped.json"),
        CleaningConfig::default(),
    );
    pipeline.run().unwrap();

    let on_disk = std::fs::read_to_string(&dst).unwrap();
    assert!(on_disk.contains("واش هاد الفيديو زوين بزاف"));
    assert!(!on_disk.contains("\\u06"));
}
