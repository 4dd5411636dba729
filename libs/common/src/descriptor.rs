//! Media descriptor building
//!
//! Turns raw file records into normalized, playable descriptors: validate
//! the record, resolve its tags, filter the subtitles, classify, compose.
//! One malformed record never aborts the whole listing; a failed tag fetch
//! does, consistent with the fetch policy.

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{error, warn};

use crate::classify::{self, ClassifyError, ContentType};
use crate::error::FetchResult;
use crate::models::{FileListing, FileRecord};
use crate::tags::TagResolver;

/// How many tag fetches may be in flight at once. Results keep listing
/// order.
pub const TAG_FETCH_CONCURRENCY: usize = 4;

/// Normalized, presentable description of one file
#[derive(Debug, Clone, PartialEq)]
pub struct MediaDescriptor {
    pub hash_id: i64,
    pub hash: String,
    /// Display filename: the tag override when present, the hash otherwise
    pub filename: String,
    pub size: i64,
    pub date_added: String,
    pub content_type: ContentType,
    pub content_url: String,
    pub thumb_url: String,
    /// Subtitle URLs the player supports
    pub sub_urls: Vec<String>,
    pub display_tags: Vec<String>,
}

/// Builds descriptors from raw listing records
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    tags: TagResolver,
}

impl DescriptorBuilder {
    /// Create a new descriptor builder
    pub fn new(tags: TagResolver) -> Self {
        Self { tags }
    }

    /// Build zero or one descriptor from one raw record.
    ///
    /// Validation and classification failures skip the record with a log
    /// line; a tag fetch failure aborts the listing.
    pub async fn build(&self, raw: &serde_json::Value) -> FetchResult<Option<MediaDescriptor>> {
        let record = match FileRecord::from_value(raw) {
            Ok(record) => record,
            Err(e) => {
                warn!("Key error while parsing response json {}", e);
                warn!("Response json: {}", raw);
                return Ok(None);
            }
        };

        let resolved = self.tags.resolve(record.hash_id).await?;

        Ok(compose(record, resolved))
    }

    /// Build the descriptors for a whole listing.
    ///
    /// Tag fetches run through an order-preserving buffered stream, so the
    /// output order matches the server's listing order.
    pub async fn build_all(&self, listing: &FileListing) -> FetchResult<Vec<MediaDescriptor>> {
        let built: Vec<Option<MediaDescriptor>> = stream::iter(listing.content.iter())
            .map(|raw| self.build(raw))
            .buffered(TAG_FETCH_CONCURRENCY)
            .try_collect()
            .await?;

        Ok(built.into_iter().flatten().collect())
    }
}

fn compose(record: FileRecord, resolved: crate::tags::ResolvedTags) -> Option<MediaDescriptor> {
    let classification = match classify::classify(
        record.mime,
        &record.static_url.content,
        &record.static_url.thumbs,
    ) {
        Ok(classification) => classification,
        Err(e) => {
            log_rejection(&e, &record);
            return None;
        }
    };

    let filename = resolved.filename.unwrap_or_else(|| record.hash.clone());
    let sub_urls = classify::filter_subtitles(&record.static_url.subs);

    Some(MediaDescriptor {
        hash_id: record.hash_id,
        hash: record.hash,
        filename,
        size: record.size,
        date_added: record.date_added,
        content_type: classification.content_type,
        content_url: classification.content_url,
        thumb_url: classification.thumb_url,
        sub_urls,
        display_tags: resolved.display,
    })
}

fn log_rejection(e: &ClassifyError, record: &FileRecord) {
    match e {
        ClassifyError::NoContentUrls | ClassifyError::NoThumbUrls => warn!(
            "{} < mime: {}, hash_id: {}, hash: {} >",
            e, record.mime, record.hash_id, record.hash
        ),
        ClassifyError::UnsupportedAudio => error!("Unsupported content type audio, ignoring."),
        ClassifyError::UnknownMime(_) => error!(
            "{} < hash_id: {}, hash: {} >",
            e, record.hash_id, record.hash
        ),
    }
}
