//! Tag resolution for one file
//!
//! bNyan scopes tags to a file as (namespace, tag) pairs. The `filename`
//! namespace overrides the display filename; every pair also renders into
//! the display-tags list as `namespace:tag`, or the bare tag when the
//! namespace is empty.

use tracing::warn;

use crate::api::ApiRoutes;
use crate::error::FetchResult;
use crate::fetch::Fetcher;
use crate::models::{TagRecord, TagResponse};

/// Outcome of resolving one file's tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTags {
    /// Filename override from the `filename` namespace, last record wins
    pub filename: Option<String>,
    /// Every valid tag, rendered for display
    pub display: Vec<String>,
}

/// Resolves tags through the `get_file_tags` endpoint
#[derive(Debug, Clone)]
pub struct TagResolver {
    fetcher: Fetcher,
    routes: ApiRoutes,
}

impl TagResolver {
    /// Create a new tag resolver
    pub fn new(fetcher: Fetcher, routes: ApiRoutes) -> Self {
        Self { fetcher, routes }
    }

    /// Fetch and fold the tags for `file_id`.
    ///
    /// An absent file-id key, a 404 or any other non-200 all resolve to the
    /// empty default. Individual malformed tag records are skipped.
    pub async fn resolve(&self, file_id: i64) -> FetchResult<ResolvedTags> {
        let url = self.routes.file_tags(file_id);
        let response: Option<TagResponse> = self.fetcher.fetch_json(&url).await?;

        let records = response
            .and_then(|mut map| map.remove(&file_id.to_string()))
            .unwrap_or_default();

        Ok(fold_tag_records(&records))
    }
}

fn fold_tag_records(records: &[serde_json::Value]) -> ResolvedTags {
    let mut resolved = ResolvedTags::default();

    for raw in records {
        let record = match TagRecord::from_value(raw) {
            Ok(record) => record,
            Err(e) => {
                warn!("Key error while getting tag information {}", e);
                warn!("Response json {}", raw);
                continue;
            }
        };

        if record.namespace == "filename" {
            resolved.filename = Some(record.tag.clone());
        }

        if record.namespace.is_empty() {
            resolved.display.push(record.tag);
        } else {
            resolved
                .display
                .push(format!("{}:{}", record.namespace, record.tag));
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filename_namespace_overrides_and_still_displays() {
        let records = vec![
            json!({ "namespace": "filename", "tag": "foo" }),
            json!({ "namespace": "", "tag": "bar" }),
        ];

        let resolved = fold_tag_records(&records);
        assert_eq!(resolved.filename.as_deref(), Some("foo"));
        assert_eq!(resolved.display, vec!["filename:foo", "bar"]);
    }

    #[test]
    fn the_last_filename_record_wins() {
        let records = vec![
            json!({ "namespace": "filename", "tag": "first" }),
            json!({ "namespace": "filename", "tag": "second" }),
        ];

        let resolved = fold_tag_records(&records);
        assert_eq!(resolved.filename.as_deref(), Some("second"));
    }

    #[test]
    fn a_malformed_record_is_skipped_alone() {
        let records = vec![
            json!({ "namespace": "creator" }),
            json!({ "namespace": "creator", "tag": "someone" }),
        ];

        let resolved = fold_tag_records(&records);
        assert_eq!(resolved.filename, None);
        assert_eq!(resolved.display, vec!["creator:someone"]);
    }

    #[test]
    fn no_records_resolve_to_the_empty_default() {
        assert_eq!(fold_tag_records(&[]), ResolvedTags::default());
    }
}
