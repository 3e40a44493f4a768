/*! Instagram dump conversion.

The Instagram export has its own shape (post-level comment objects
with nested replies). This module maps it into [RawComment] records:
ids get an `ig_` prefix so they cannot collide with primary-dump ids,
the post shortcode becomes the `video_id`, and replies are flattened
into independent top-level records.

The secondary source is best-effort: a missing or unreadable dump
degrades to an empty contribution with a logged notice instead of
failing the run.
!*/
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Deserializer};

use crate::error::Error;

use super::comment::{RawComment, Source};

/// Instagram ids show up both as strings and as numbers.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

#[derive(Debug, Deserialize)]
struct InstagramComment {
    #[serde(default, deserialize_with = "id_string")]
    id: String,
    #[serde(default)]
    text: String,
    #[serde(default, rename = "postUrl")]
    post_url: String,
    #[serde(default, rename = "ownerUsername")]
    owner_username: String,
    #[serde(default)]
    timestamp: String,
    #[serde(default, rename = "likesCount")]
    likes_count: i64,
    #[serde(default)]
    replies: Vec<InstagramReply>,
}

/// Replies carry the same fields minus the nesting.
#[derive(Debug, Deserialize)]
struct InstagramReply {
    #[serde(default, deserialize_with = "id_string")]
    id: String,
    #[serde(default)]
    text: String,
    #[serde(default, rename = "ownerUsername")]
    owner_username: String,
    #[serde(default)]
    timestamp: String,
    #[serde(default, rename = "likesCount")]
    likes_count: i64,
}

/// Prefix an id so it cannot collide with primary-dump ids.
fn prefixed_id(id: &str) -> String {
    if id.starts_with("ig_") {
        id.to_string()
    } else {
        format!("ig_{}", id)
    }
}

/// Post shortcode out of a post URL, the whole URL as fallback.
fn shortcode(post_url: &str) -> String {
    post_url
        .split_once("/p/")
        .and_then(|(_, rest)| rest.split('/').next())
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| post_url.to_string())
}

fn channel_for(owner: &str) -> String {
    if owner.is_empty() {
        "@instagram".to_string()
    } else {
        format!("@{}", owner)
    }
}

fn author_for(owner: &str) -> String {
    if owner.is_empty() {
        "unknown".to_string()
    } else {
        owner.to_string()
    }
}

fn convert(items: Vec<InstagramComment>) -> Vec<RawComment> {
    let mut converted = Vec::new();
    for item in items {
        let video_id = shortcode(&item.post_url);
        if item.text.trim().chars().count() >= 2 {
            converted.push(RawComment {
                comment_id: prefixed_id(&item.id),
                text: item.text,
                video_id: video_id.clone(),
                author: author_for(&item.owner_username),
                date: item.timestamp,
                likes: item.likes_count,
                channel: channel_for(&item.owner_username),
                source: Source::Instagram,
            });
        }
        for reply in item.replies {
            if reply.text.trim().chars().count() < 2 {
                continue;
            }
            converted.push(RawComment {
                comment_id: prefixed_id(&reply.id),
                text: reply.text,
                video_id: video_id.clone(),
                author: author_for(&reply.owner_username),
                date: reply.timestamp,
                likes: reply.likes_count,
                channel: channel_for(&reply.owner_username),
                source: Source::Instagram,
            });
        }
    }
    converted
}

fn read(path: &Path) -> Result<Vec<RawComment>, Error> {
    let file = File::open(path)?;
    let items: Vec<InstagramComment> = serde_json::from_reader(BufReader::new(file))?;
    Ok(convert(items))
}

/// Load and convert the Instagram dump. Never fatal.
pub fn load(path: &Path) -> Vec<RawComment> {
    if !path.exists() {
        warn!("instagram dump not found at {:?}, skipping", path);
        return Vec::new();
    }
    match read(path) {
        Ok(comments) => {
            info!("{} instagram comments loaded", comments.len());
            comments
        }
        Err(e) => {
            warn!("could not load instagram dump {:?}: {}", path, e);
            Vec::new()
        }
    }
}
