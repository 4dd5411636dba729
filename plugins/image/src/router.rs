//! Query-string routing for the image addon
//!
//! Unlike the video addon, an empty query string or an unrecognized action
//! is a quiet no-op here; this addon only ever shows pictures.

use std::collections::HashMap;

use tracing::info;
use url::form_urlencoded;

/// The single action this addon serves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Display one picture
    ShowImage { picture_url: String },
}

impl Action {
    /// Parse the plugin query string
    pub fn from_query(query: &str) -> Option<Self> {
        let params: HashMap<String, String> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        if params.is_empty() {
            return None;
        }

        match params.get("action").map(String::as_str) {
            Some("show_image") => {
                let picture_url = params.get("picture_url")?.clone();
                Some(Action::ShowImage { picture_url })
            }
            other => {
                info!("No handler for action {:?}", other);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_empty_query_is_a_no_op() {
        assert_eq!(Action::from_query(""), None);
    }

    #[test]
    fn show_image_extracts_the_picture_url() {
        let action = Action::from_query("action=show_image&picture_url=http%3A%2F%2Fx%2Fa.jpg");

        assert_eq!(
            action,
            Some(Action::ShowImage {
                picture_url: "http://x/a.jpg".to_string(),
            })
        );
    }

    #[test]
    fn show_image_without_a_url_is_ignored() {
        assert_eq!(Action::from_query("action=show_image"), None);
    }

    #[test]
    fn unknown_actions_are_ignored() {
        assert_eq!(Action::from_query("action=play&content_url=u"), None);
    }
}
