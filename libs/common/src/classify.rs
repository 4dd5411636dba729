//! Content classification for bNyan files
//!
//! The server encodes the coarse media type in the hundreds digit of its
//! MIME-class code. Classification also picks the primary content URL and
//! thumbnail from the candidate lists, preferring an HLS master playlist
//! for video so the player can adapt its bitrate.

use thiserror::Error;

/// MIME-class range for images
pub const IMAGE_MIME_RANGE: (i64, i64) = (100, 199);
/// MIME-class range for videos
pub const VIDEO_MIME_RANGE: (i64, i64) = (200, 299);
/// MIME-class range for audio
pub const AUDIO_MIME_RANGE: (i64, i64) = (300, 399);

/// Coarse content type derived from the MIME-class code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Unknown = -1,
    Image = 1,
    Video = 2,
    Audio = 3,
}

impl ContentType {
    /// Classify a MIME-class code
    pub fn from_mime(mime: i64) -> Self {
        if in_range(mime, IMAGE_MIME_RANGE) {
            ContentType::Image
        } else if in_range(mime, VIDEO_MIME_RANGE) {
            ContentType::Video
        } else if in_range(mime, AUDIO_MIME_RANGE) {
            ContentType::Audio
        } else {
            ContentType::Unknown
        }
    }

    /// Integer code carried in the play navigation URL
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Reverse of [`ContentType::code`], for the play side of the router
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => ContentType::Image,
            2 => ContentType::Video,
            3 => ContentType::Audio,
            _ => ContentType::Unknown,
        }
    }
}

fn in_range(item: i64, (min, max): (i64, i64)) -> bool {
    item >= min && item <= max
}

/// Why a file cannot be presented
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    /// The record published no content URLs
    #[error("the response file has 0 content urls")]
    NoContentUrls,

    /// The record published no thumbnail URLs
    #[error("the response file has 0 thumb urls")]
    NoThumbUrls,

    /// 4Nyan doesn't do audio yet
    #[error("unsupported content type audio")]
    UnsupportedAudio,

    /// MIME-class code outside every known range
    #[error("invalid content type returned for mime {0}")]
    UnknownMime(i64),
}

/// A presentable classification: what the file is and which URLs to use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub content_type: ContentType,
    pub content_url: String,
    pub thumb_url: String,
}

/// Classify one file and choose its primary URLs.
///
/// Files with no content or thumbnail URLs, audio files and files with an
/// unknown MIME-class code are rejected; the caller skips them.
pub fn classify(
    mime: i64,
    content_urls: &[String],
    thumb_urls: &[String],
) -> Result<Classification, ClassifyError> {
    if content_urls.is_empty() {
        return Err(ClassifyError::NoContentUrls);
    }

    if thumb_urls.is_empty() {
        return Err(ClassifyError::NoThumbUrls);
    }

    let thumb_url = thumb_urls[0].clone();

    match ContentType::from_mime(mime) {
        ContentType::Image => Ok(Classification {
            content_type: ContentType::Image,
            content_url: content_urls[0].clone(),
            thumb_url,
        }),
        ContentType::Video => {
            // An HLS master playlist enables adaptive bitrate; prefer it.
            let content_url = content_urls
                .iter()
                .find(|url| url.ends_with("master.m3u8"))
                .unwrap_or(&content_urls[0])
                .clone();

            Ok(Classification {
                content_type: ContentType::Video,
                content_url,
                thumb_url,
            })
        }
        ContentType::Audio => Err(ClassifyError::UnsupportedAudio),
        ContentType::Unknown => Err(ClassifyError::UnknownMime(mime)),
    }
}

/// Keep only the subtitle URLs the player supports (`.srt`).
pub fn filter_subtitles(urls: &[String]) -> Vec<String> {
    urls.iter()
        .filter(|url| url.ends_with(".srt"))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn mime_ranges_map_onto_content_types() {
        let cases = [
            (99, ContentType::Unknown),
            (100, ContentType::Image),
            (150, ContentType::Image),
            (199, ContentType::Image),
            (200, ContentType::Video),
            (250, ContentType::Video),
            (299, ContentType::Video),
            (300, ContentType::Audio),
            (399, ContentType::Audio),
            (400, ContentType::Unknown),
            (-5, ContentType::Unknown),
        ];

        for (mime, expected) in cases {
            assert_eq!(ContentType::from_mime(mime), expected, "mime {}", mime);
        }
    }

    #[test]
    fn codes_round_trip() {
        for content_type in [ContentType::Image, ContentType::Video, ContentType::Audio] {
            assert_eq!(ContentType::from_code(content_type.code()), content_type);
        }
        assert_eq!(ContentType::from_code(-1), ContentType::Unknown);
        assert_eq!(ContentType::from_code(17), ContentType::Unknown);
    }

    #[test]
    fn empty_url_lists_reject_regardless_of_mime() {
        for mime in [150, 250, 350, 999] {
            assert_eq!(
                classify(mime, &[], &urls(&["t"])),
                Err(ClassifyError::NoContentUrls)
            );
            assert_eq!(
                classify(mime, &urls(&["c"]), &[]),
                Err(ClassifyError::NoThumbUrls)
            );
        }
    }

    #[test]
    fn images_take_the_first_urls() {
        let classification = classify(
            150,
            &urls(&["http://x/a.jpg", "http://x/b.jpg"]),
            &urls(&["http://x/t1.jpg", "http://x/t2.jpg"]),
        )
        .expect("image should classify");

        assert_eq!(classification.content_type, ContentType::Image);
        assert_eq!(classification.content_url, "http://x/a.jpg");
        assert_eq!(classification.thumb_url, "http://x/t1.jpg");
    }

    #[test]
    fn video_prefers_the_master_playlist() {
        let classification = classify(
            250,
            &urls(&["http://x/v.mp4", "http://x/hls/master.m3u8"]),
            &urls(&["http://x/t.jpg"]),
        )
        .expect("video should classify");

        assert_eq!(classification.content_type, ContentType::Video);
        assert_eq!(classification.content_url, "http://x/hls/master.m3u8");
    }

    #[test]
    fn video_falls_back_to_the_first_content_url() {
        let classification = classify(
            250,
            &urls(&["http://x/v.mp4", "http://x/v2.mp4"]),
            &urls(&["http://x/t.jpg"]),
        )
        .expect("video should classify");

        assert_eq!(classification.content_url, "http://x/v.mp4");
    }

    #[test]
    fn audio_and_unknown_are_rejected() {
        let content = urls(&["c"]);
        let thumbs = urls(&["t"]);

        assert_eq!(
            classify(350, &content, &thumbs),
            Err(ClassifyError::UnsupportedAudio)
        );
        assert_eq!(
            classify(999, &content, &thumbs),
            Err(ClassifyError::UnknownMime(999))
        );
    }

    #[test]
    fn subtitle_filter_is_case_sensitive() {
        let filtered = filter_subtitles(&urls(&["a.srt", "b.vtt", "c.SRT"]));
        assert_eq!(filtered, vec!["a.srt"]);
    }
}
