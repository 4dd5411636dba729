//! HTTP fetcher for the bNyan server
//!
//! One GET per call, a five second timeout, TLS verification on, no
//! retries. A 404 or any other non-200 status is an empty result rather
//! than an error; transport and decode failures propagate and abort the
//! listing in progress (see DESIGN.md for the policy choice).

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{error, info};

use crate::api::ApiRoutes;
use crate::error::{FetchError, FetchResult};

/// Request timeout shared by every call
pub const TIMEOUT: Duration = Duration::from_secs(5);

/// Thin wrapper around a reqwest client pinned to the addon fetch policy
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher with the default timeout
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// GET `url` and decode the JSON body.
    ///
    /// Returns `Ok(None)` for 404 and any other non-200 status.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<Option<T>> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("request to '{}' failed: {}", url, e);
                return Err(FetchError::Transport {
                    url: url.to_string(),
                    source: e,
                });
            }
        };

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            info!("Request to '{}' 404'd", url);
            return Ok(None);
        }

        if status != StatusCode::OK {
            info!("Request to '{}' returned unknown status: '{}'", url, status);
            return Ok(None);
        }

        match response.json().await {
            Ok(body) => Ok(Some(body)),
            Err(e) => {
                error!("Bad response, cannot decode json from '{}': {}", url, e);
                Err(FetchError::Decode {
                    url: url.to_string(),
                    source: e,
                })
            }
        }
    }

    /// Probe the server liveness endpoint; true on a 200.
    pub async fn heartbeat(&self, routes: &ApiRoutes) -> FetchResult<bool> {
        let url = routes.heartbeat();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.clone(),
                source: e,
            })?;

        Ok(response.status() == StatusCode::OK)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
