//! Server configuration for the bNyan client
//!
//! Both addons need the same two settings: the server address and port.
//! They come either from a JSON config file shipped with the addon or from
//! environment variables (the addon-settings analog). Either source must
//! provide both; startup fails otherwise.

use std::path::Path;

use crate::error::ConfigError;

/// Environment variable naming the server address
pub const ENV_SERVER_IP: &str = "BNYAN_SERVER_IP";
/// Environment variable naming the server port
pub const ENV_PORT: &str = "BNYAN_PORT";

/// Connection settings for the bNyan server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server address, e.g. "192.168.1.20"
    pub server_ip: String,
    /// Server port
    pub port: u16,
}

impl ServerConfig {
    /// Load the configuration from a JSON file.
    ///
    /// The file must contain both `server_ip` and `port`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();

        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: display.clone(),
            source: e,
        })?;

        let raw: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| ConfigError::Parse {
                path: display,
                source: e,
            })?;

        let server_ip = raw
            .get("server_ip")
            .and_then(serde_json::Value::as_str)
            .ok_or(ConfigError::Missing("server_ip"))?
            .to_string();

        let port = match raw.get("port") {
            Some(value) => parse_port(value)?,
            None => return Err(ConfigError::Missing("port")),
        };

        Ok(Self { server_ip, port })
    }

    /// Load the configuration from `BNYAN_SERVER_IP` and `BNYAN_PORT`.
    ///
    /// Both variables are required; no defaults are invented.
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_ip =
            std::env::var(ENV_SERVER_IP).map_err(|_| ConfigError::Missing("server_ip"))?;
        let port_text = std::env::var(ENV_PORT).map_err(|_| ConfigError::Missing("port"))?;
        let port = port_text
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port_text))?;

        Ok(Self { server_ip, port })
    }

    /// Base URL every bNyan endpoint hangs off, with a trailing slash
    pub fn base_url(&self) -> String {
        format!("http://{}:{}/", self.server_ip, self.port)
    }
}

// Config files have historically carried the port as a number or a string.
fn parse_port(value: &serde_json::Value) -> Result<u16, ConfigError> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| ConfigError::InvalidPort(value.to_string()))
}
