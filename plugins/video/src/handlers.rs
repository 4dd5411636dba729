//! Invocation handlers: category folders, file listings, playback hand-off

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{error, info, warn};

use common::api::ApiRoutes;
use common::classify::ContentType;
use common::config::ServerConfig;
use common::descriptor::{DescriptorBuilder, MediaDescriptor};
use common::directory::{
    ArtUrls, DirectoryEntry, InfoLabels, Presenter, SortMethod, UniqueIds, nav_url,
};
use common::fetch::Fetcher;
use common::models::{Category, FileListing};
use common::tags::TagResolver;

use crate::error::AddonError;
use crate::router::Action;

/// Plugin category shown while browsing the top-level folders
const CATEGORIES_LABEL: &str = "4Nyan Categories";

/// One plugin invocation's working set
pub struct Addon<'a, P: Presenter> {
    fetcher: Fetcher,
    routes: ApiRoutes,
    descriptors: DescriptorBuilder,
    plugin_url: String,
    presenter: &'a mut P,
}

impl<'a, P: Presenter> Addon<'a, P> {
    /// Wire up the pipeline against one configured server
    pub fn new(config: &ServerConfig, plugin_url: String, presenter: &'a mut P) -> Self {
        let fetcher = Fetcher::new();
        let routes = ApiRoutes::new(config);
        let descriptors =
            DescriptorBuilder::new(TagResolver::new(fetcher.clone(), routes.clone()));

        Self {
            fetcher,
            routes,
            descriptors,
            plugin_url,
            presenter,
        }
    }

    /// Dispatch one query string
    pub async fn run(&mut self, query: &str) -> Result<(), AddonError> {
        match Action::from_query(query)? {
            Action::Categories => self.list_categories().await,
            Action::Listing { category, tag_id } => self.list_files(&category, tag_id).await,
            Action::Play {
                content_url,
                sub_urls,
                content_type,
            } => {
                self.play(&content_url, &sub_urls, content_type);
                Ok(())
            }
        }
    }

    /// Show one folder per category tag.
    ///
    /// An empty or unreachable category listing is fatal; a single category
    /// record with missing keys is skipped.
    async fn list_categories(&mut self) -> Result<(), AddonError> {
        let url = self.routes.categories();
        let categories: Vec<serde_json::Value> = self
            .fetcher
            .fetch_json(&url)
            .await?
            .unwrap_or_default();

        if categories.is_empty() {
            error!("Could not fetch categories");
            return Err(AddonError::NoCategories(self.routes.host().to_string()));
        }

        self.presenter.open_directory(CATEGORIES_LABEL, "videos");

        for raw in &categories {
            let category = match Category::from_value(raw) {
                Ok(category) => category,
                Err(e) => {
                    info!("Key error from category response {}", e);
                    info!("Response content {}", raw);
                    continue;
                }
            };

            let url = nav_url(
                &self.plugin_url,
                &[
                    ("action", "listing"),
                    ("category", &category.tag),
                    ("tag_id", &category.tag_id.to_string()),
                ],
            );

            self.presenter
                .add_entry(DirectoryEntry::folder(category.tag, url));
        }

        self.presenter
            .finish_directory(SortMethod::LabelIgnoreThe);

        Ok(())
    }

    /// Show the playable files carrying one tag
    async fn list_files(&mut self, category: &str, tag_id: i64) -> Result<(), AddonError> {
        let url = self.routes.files(tag_id);
        info!("{}", url);

        let listing: Option<FileListing> = self.fetcher.fetch_json(&url).await?;
        let Some(listing) = listing else {
            error!("Response from {} did not return any content", url);
            return Err(AddonError::EmptyListing(url));
        };

        self.presenter.open_directory(category, "videos");

        for descriptor in self.descriptors.build_all(&listing).await? {
            let entry = self.file_entry(descriptor);
            self.presenter.add_entry(entry);
        }

        self.presenter
            .finish_directory(SortMethod::LabelIgnoreThe);

        Ok(())
    }

    /// Hand one file to the player.
    ///
    /// Anything that is neither an image nor a video is logged and dropped;
    /// nothing will be played.
    fn play(&mut self, content_url: &str, sub_urls: &[String], content_type: i64) {
        match ContentType::from_code(content_type) {
            ContentType::Image => {
                info!("Showing image: {}", content_url);
                self.presenter.show_picture(content_url);
            }
            ContentType::Video => {
                info!("Playing video: {}", content_url);
                self.presenter.resolve_playback(content_url, sub_urls);
            }
            other => {
                error!(
                    "Content type {:?} is not image or video, nothing will be played",
                    other
                );
            }
        }
    }

    fn file_entry(&self, descriptor: MediaDescriptor) -> DirectoryEntry {
        let url = nav_url(
            &self.plugin_url,
            &[
                ("action", "play"),
                ("content_url", &descriptor.content_url),
                ("sub_urls", &descriptor.sub_urls.join(" ")),
                ("content_type", &descriptor.content_type.code().to_string()),
            ],
        );

        let info = match descriptor.content_type {
            ContentType::Image => InfoLabels {
                count: Some(descriptor.hash_id),
                date: Some(descriptor.date_added.clone()),
                size: Some(descriptor.size),
                picture_path: Some(descriptor.filename.clone()),
                ..InfoLabels::default()
            },
            _ => InfoLabels {
                count: Some(descriptor.hash_id),
                date: Some(descriptor.date_added.clone()),
                size: Some(descriptor.size),
                tags: descriptor.display_tags,
                mediatype: Some("video".to_string()),
                ..InfoLabels::default()
            },
        };

        DirectoryEntry {
            label: descriptor.filename,
            label2: Some(descriptor.hash.clone()),
            url,
            is_folder: false,
            is_playable: true,
            content_lookup: false,
            date_added: validated_date(&descriptor.date_added),
            subtitles: descriptor.sub_urls,
            unique_ids: Some(UniqueIds {
                hash: descriptor.hash,
                hash_id: descriptor.hash_id,
            }),
            info,
            art: ArtUrls {
                thumb: Some(descriptor.thumb_url.clone()),
                icon: Some(descriptor.thumb_url),
            },
        }
    }
}

// The host rejects malformed datetimes, so the field is dropped rather
// than passed through unchecked.
fn validated_date(raw: &str) -> Option<String> {
    let parses = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok();

    if !parses {
        warn!("'{}' is not a usable date-added value", raw);
        return None;
    }

    Some(raw.to_string())
}
