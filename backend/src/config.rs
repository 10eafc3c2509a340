//! Server settings, read from the environment.
//!
//! | variable                  | default       |
//! |---------------------------|---------------|
//! | `SITE_ADMIN_HOST`         | `127.0.0.1`   |
//! | `SITE_ADMIN_PORT`         | `8080`        |
//! | `SITE_ROOT`               | `./site`      |
//! | `SITE_DATA_FILE`          | `site-data`   |
//! | `SITE_ADMIN_OPEN_BROWSER` | `true`        |
//!
//! `SITE_DATA_FILE` is resolved against `SITE_ROOT` unless it is absolute.

use log::warn;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory of the public marketing site.
    pub site_root: PathBuf,
    /// The JSON data file the public site and the admin panel read.
    pub data_file: PathBuf,
    pub open_browser: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("SITE_ADMIN_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("SITE_ADMIN_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("SITE_ADMIN_PORT '{}' is not a port number, using 8080", raw);
                8080
            }),
            None => 8080,
        };

        let site_root = PathBuf::from(lookup("SITE_ROOT").unwrap_or_else(|| "./site".to_string()));
        let data_file = site_root.join(lookup("SITE_DATA_FILE").unwrap_or_else(|| "site-data".to_string()));

        let open_browser = lookup("SITE_ADMIN_OPEN_BROWSER")
            .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        Self {
            host,
            port,
            site_root,
            data_file,
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
