//! Admin panel configuration.

use serde::{Deserialize, Serialize};

/// Where the admin panel reads, caches and writes site data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// URL of the data file. The admin panel lives under `/admin/`, the data
    /// file at the site root.
    pub data_url: String,
    /// localStorage slot holding the last saved document.
    pub cache_key: String,
    /// Download name of the exported file. The trailing dot keeps most
    /// browsers from appending an extension.
    pub export_file_name: String,
    /// Upper bound for the initial fetch of `data_url`.
    pub fetch_timeout_ms: u32,
    /// Server endpoint that overwrites the data file, if one is deployed.
    pub publish_url: Option<String>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            data_url: "/site-data".to_string(),
            cache_key: "websiteData".to_string(),
            export_file_name: "site-data.".to_string(),
            fetch_timeout_ms: 8000,
            publish_url: Some("/api/site-data/save".to_string()),
        }
    }
}
