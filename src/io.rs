//! Bulk JSON reading and writing.
//!
//! Input and output collections are JSON arrays, read and written in
//! one scoped operation per file. A missing or malformed primary
//! input is fatal for the run; writers create parent directories as
//! needed. Output is pretty-printed UTF-8 with non-ASCII characters
//! preserved verbatim.
use std::fs::{create_dir_all, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::Serialize;

use crate::error::Error;
use crate::sources::RawComment;

/// Read a raw comment collection. Structural problems (missing file,
/// malformed JSON) surface immediately.
pub fn read_comments(path: &Path) -> Result<Vec<RawComment>, Error> {
    let file = File::open(path)?;
    let comments = serde_json::from_reader(BufReader::new(file))?;
    Ok(comments)
}

/// Write a record collection as an indented JSON array.
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), records)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::Source;

    #[test]
    fn roundtrip_preserves_arabic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("comments.json");
        let comments = vec![RawComment {
            comment_id: "c1".into(),
            text: "واش هاد الفيديو زوين".into(),
            video_id: "v".into(),
            author: "a".into(),
            date: "2025-01-01T00:00:00Z".into(),
            likes: 1,
            channel: "ch".into(),
            source: Source::Youtube,
        }];

        write_records(&path, &comments).unwrap();

        // bytes on disk carry the Arabic verbatim, unescaped
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("واش هاد الفيديو زوين"));
        assert!(!on_disk.contains("\\u"));

        let back = read_comments(&path).unwrap();
        assert_eq!(back, comments);
    }

    #[test]
    fn missing_input_is_fatal() {
        assert!(read_comments(Path::new("/nonexistent/comments.json")).is_err());
    }

    #[test]
    fn malformed_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(read_comments(&path).is_err());
    }
}
