//! Presentation boundary toward the host GUI
//!
//! The addon core never talks to a GUI. It projects descriptors into
//! directory entries and hands them to a [`Presenter`]; the bundled
//! implementation prints JSON lines for the host collaborator to consume.

use serde::Serialize;
use url::form_urlencoded;

/// Sort hint forwarded when a directory is finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMethod {
    /// Sort by label, ignoring leading articles
    LabelIgnoreThe,
}

/// Structured info attached to an entry, mirroring the host's info labels
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InfoLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_path: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mediatype: Option<String>,
}

/// Art URLs attached to an entry
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArtUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Stable identifiers for the host's library matching
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniqueIds {
    pub hash: String,
    pub hash_id: i64,
}

/// One navigable or playable row of a directory listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryEntry {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label2: Option<String>,
    /// Navigation URL calling the plugin back
    pub url: String,
    pub is_folder: bool,
    pub is_playable: bool,
    /// Whether the host may second-guess the content by probing the URL
    pub content_lookup: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subtitles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_ids: Option<UniqueIds>,
    pub info: InfoLabels,
    pub art: ArtUrls,
}

impl DirectoryEntry {
    /// A folder entry opening a sub-listing
    pub fn folder(label: String, url: String) -> Self {
        Self {
            label,
            label2: None,
            url,
            is_folder: true,
            is_playable: false,
            content_lookup: true,
            date_added: None,
            subtitles: Vec::new(),
            unique_ids: None,
            info: InfoLabels::default(),
            art: ArtUrls::default(),
        }
    }
}

/// Build a navigation URL calling the plugin back with the given pairs.
pub fn nav_url(plugin_url: &str, pairs: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }

    format!("{}?{}", plugin_url, serializer.finish())
}

/// Host-side sink for everything the addons produce
pub trait Presenter {
    /// Begin a directory listing under the given plugin category
    fn open_directory(&mut self, category: &str, content: &str);

    /// Append one entry to the open directory
    fn add_entry(&mut self, entry: DirectoryEntry);

    /// Close the directory, with a sort hint
    fn finish_directory(&mut self, sort: SortMethod);

    /// Resolve a playback request to a concrete URL
    fn resolve_playback(&mut self, url: &str, subtitles: &[String]);

    /// Ask the host to display a picture
    fn show_picture(&mut self, url: &str);
}

/// Presenter writing JSON lines to stdout for the host collaborator
#[derive(Debug)]
pub struct StdoutPresenter {
    handle: i64,
}

impl StdoutPresenter {
    /// Create a presenter bound to the host's plugin handle
    pub fn new(handle: i64) -> Self {
        Self { handle }
    }

    fn emit(&self, message: serde_json::Value) {
        println!("{}", message);
    }
}

impl Presenter for StdoutPresenter {
    fn open_directory(&mut self, category: &str, content: &str) {
        self.emit(serde_json::json!({
            "handle": self.handle,
            "event": "open_directory",
            "category": category,
            "content": content,
        }));
    }

    fn add_entry(&mut self, entry: DirectoryEntry) {
        self.emit(serde_json::json!({
            "handle": self.handle,
            "event": "entry",
            "entry": entry,
        }));
    }

    fn finish_directory(&mut self, sort: SortMethod) {
        self.emit(serde_json::json!({
            "handle": self.handle,
            "event": "end_of_directory",
            "sort": sort,
        }));
    }

    fn resolve_playback(&mut self, url: &str, subtitles: &[String]) {
        self.emit(serde_json::json!({
            "handle": self.handle,
            "event": "resolved",
            "url": url,
            "subtitles": subtitles,
        }));
    }

    fn show_picture(&mut self, url: &str) {
        self.emit(serde_json::json!({
            "handle": self.handle,
            "event": "show_picture",
            "url": url,
        }));
    }
}
