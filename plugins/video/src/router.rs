//! Query-string routing
//!
//! The host calls the plugin back with a URL-encoded query string whose
//! `action` field names the handler. The supported actions form an enum and
//! dispatch is an exhaustive match, so an unhandled action is a gap the
//! compiler sees rather than a runtime lookup failure. Unknown actions and
//! missing parameters are fatal to the invocation.

use std::collections::HashMap;

use thiserror::Error;
use url::form_urlencoded;

/// Everything this addon can be asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No parameters: show the category folders
    Categories,
    /// Show the files carrying one tag
    Listing { category: String, tag_id: i64 },
    /// Hand one file to the player
    Play {
        content_url: String,
        /// Space-joined in the navigation URL
        sub_urls: Vec<String>,
        content_type: i64,
    },
}

/// A query string this addon cannot serve
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("invalid paramstring: '{0}'")]
    UnknownAction(String),

    #[error("missing '{0}' parameter")]
    MissingParam(&'static str),

    #[error("'{value}' is not a valid {name}")]
    InvalidParam { name: &'static str, value: String },
}

impl Action {
    /// Parse the plugin query string.
    pub fn from_query(query: &str) -> Result<Self, RouteError> {
        let params: HashMap<String, String> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        if params.is_empty() {
            return Ok(Action::Categories);
        }

        let action = params
            .get("action")
            .ok_or(RouteError::MissingParam("action"))?;

        match action.as_str() {
            "listing" => {
                let category = require(&params, "category")?.to_string();
                let tag_id = parse_int(require(&params, "tag_id")?, "tag_id")?;

                Ok(Action::Listing { category, tag_id })
            }
            "play" => {
                let content_url = require(&params, "content_url")?.to_string();
                let sub_urls = params
                    .get("sub_urls")
                    .map(|joined| joined.split_whitespace().map(str::to_string).collect())
                    .unwrap_or_default();
                let content_type = match params.get("content_type") {
                    Some(value) => parse_int(value, "content_type")?,
                    None => -1,
                };

                Ok(Action::Play {
                    content_url,
                    sub_urls,
                    content_type,
                })
            }
            _ => Err(RouteError::UnknownAction(query.to_string())),
        }
    }
}

fn require<'a>(
    params: &'a HashMap<String, String>,
    name: &'static str,
) -> Result<&'a str, RouteError> {
    params
        .get(name)
        .map(String::as_str)
        .ok_or(RouteError::MissingParam(name))
}

fn parse_int(value: &str, name: &'static str) -> Result<i64, RouteError> {
    value.parse().map_err(|_| RouteError::InvalidParam {
        name,
        value: value.to_string(),
    })
}
