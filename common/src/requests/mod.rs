use serde::{Deserialize, Serialize};

/// Response body of `POST /api/site-data/save`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveSiteDataResponse {
    /// MD5 hex digest of the file as written; also served as its `ETag`.
    pub revision: String,
}
