//! Wire models for the bNyan search API
//!
//! Listing responses carry their records as raw JSON values and each record
//! is validated individually at the parse boundary, so one malformed record
//! is skipped without aborting the rest of the batch.

use std::collections::HashMap;

use serde::Deserialize;

/// One category row from `search/get_categories`
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub tag: String,
    pub tag_id: i64,
}

/// The three URL groups published for one file
#[derive(Debug, Clone, Deserialize)]
pub struct StaticUrls {
    pub content: Vec<String>,
    pub thumbs: Vec<String>,
    pub subs: Vec<String>,
}

/// One file row from `search/get_files`
#[derive(Debug, Clone, Deserialize)]
pub struct FileRecord {
    pub hash_id: i64,
    /// Content hash, doubling as the default display filename
    pub hash: String,
    pub size: i64,
    /// MIME-class code; the hundreds digit encodes the coarse media type
    pub mime: i64,
    pub width: i64,
    pub height: i64,
    pub duration: f64,
    pub has_audio: bool,
    pub date_added: String,
    pub static_url: StaticUrls,
}

/// Envelope around a file listing response
#[derive(Debug, Clone, Deserialize)]
pub struct FileListing {
    /// Raw records, validated one by one with [`FileRecord::from_value`]
    pub content: Vec<serde_json::Value>,
}

/// One tag row from `search/get_file_tags`
#[derive(Debug, Clone, Deserialize)]
pub struct TagRecord {
    pub namespace: String,
    pub tag: String,
}

/// Tag responses are keyed by the stringified file id
pub type TagResponse = HashMap<String, Vec<serde_json::Value>>;

impl Category {
    /// Validate one raw category record
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}

impl FileRecord {
    /// Validate one raw listing record
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}

impl TagRecord {
    /// Validate one raw tag record
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn a_complete_record_parses() {
        let raw = json!({
            "hash_id": 1,
            "hash": "abc",
            "size": 10,
            "mime": 150,
            "width": 1,
            "height": 1,
            "duration": 0,
            "has_audio": false,
            "date_added": "2020-01-01",
            "static_url": {
                "content": ["http://x/abc.jpg"],
                "thumbs": ["http://x/t.jpg"],
                "subs": []
            }
        });

        let record = FileRecord::from_value(&raw).expect("record should parse");
        assert_eq!(record.hash_id, 1);
        assert_eq!(record.hash, "abc");
        assert_eq!(record.static_url.content, vec!["http://x/abc.jpg"]);
    }

    #[test]
    fn a_record_missing_hash_id_is_invalid() {
        let raw = json!({
            "hash": "abc",
            "size": 10,
            "mime": 150,
            "width": 1,
            "height": 1,
            "duration": 0,
            "has_audio": false,
            "date_added": "2020-01-01",
            "static_url": { "content": [], "thumbs": [], "subs": [] }
        });

        assert!(FileRecord::from_value(&raw).is_err());
    }

    #[test]
    fn a_tag_record_missing_namespace_is_invalid() {
        assert!(TagRecord::from_value(&json!({ "tag": "foo" })).is_err());
        assert!(TagRecord::from_value(&json!({ "namespace": "x" })).is_err());
        assert!(TagRecord::from_value(&json!({ "namespace": "x", "tag": "foo" })).is_ok());
    }
}
