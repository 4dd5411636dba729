//! Endpoint table for the bNyan HTTP API

use url::form_urlencoded;

use crate::config::ServerConfig;

/// The bNyan endpoints the addons call, resolved against one server
#[derive(Debug, Clone)]
pub struct ApiRoutes {
    base: String,
}

impl ApiRoutes {
    /// Build the endpoint table from the server configuration
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            base: config.base_url(),
        }
    }

    /// Base URL of the configured server
    pub fn host(&self) -> &str {
        &self.base
    }

    /// `search/get_categories`: every known category tag
    pub fn categories(&self) -> String {
        format!("{}search/get_categories", self.base)
    }

    /// `search/get_files?tid=<tag_id>`: the files carrying one tag
    pub fn files(&self, tag_id: i64) -> String {
        let query: String = form_urlencoded::Serializer::new(String::new())
            .append_pair("tid", &tag_id.to_string())
            .finish();
        format!("{}search/get_files?{}", self.base, query)
    }

    /// `search/get_file_tags?fid=<file_id>`: the tags scoped to one file
    pub fn file_tags(&self, file_id: i64) -> String {
        let query: String = form_urlencoded::Serializer::new(String::new())
            .append_pair("fid", &file_id.to_string())
            .finish();
        format!("{}search/get_file_tags?{}", self.base, query)
    }

    /// `heartbeat`: server liveness probe
    pub fn heartbeat(&self) -> String {
        format!("{}heartbeat", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes() -> ApiRoutes {
        ApiRoutes::new(&ServerConfig {
            server_ip: "192.168.1.20".to_string(),
            port: 8000,
        })
    }

    #[test]
    fn endpoints_resolve_against_the_configured_host() {
        let routes = routes();

        assert_eq!(
            routes.categories(),
            "http://192.168.1.20:8000/search/get_categories"
        );
        assert_eq!(
            routes.files(5),
            "http://192.168.1.20:8000/search/get_files?tid=5"
        );
        assert_eq!(
            routes.file_tags(42),
            "http://192.168.1.20:8000/search/get_file_tags?fid=42"
        );
        assert_eq!(routes.heartbeat(), "http://192.168.1.20:8000/heartbeat");
    }
}
