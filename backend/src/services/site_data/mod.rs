//! # Site Data Service Module
//!
//! Serves the JSON data file the public site is built from, and lets the admin
//! panel overwrite it.
//!
//! ## Sub-modules:
//! - `get`: streams the current data file with an MD5 `ETag`.
//! - `save`: normalizes a submitted document and writes it over the data file.

mod get;
mod save;

use actix_web::web::{get, post, scope, ServiceConfig};

/// The base path for the write API.
const API_PATH: &str = "/api/site-data";

/// Public path of the data file, the same relative URL the site pages fetch.
const DATA_PATH: &str = "/site-data";

/// Registers the site data routes.
///
/// # Registered Routes:
///
/// *   **`GET /site-data`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns the data file as `application/json`, or `404`
///       when it has not been written yet.
///
/// *   **`POST /api/site-data/save`**:
///     - **Handler**: `save::process`
///     - **Description**: Accepts a JSON object shaped as a site document (legacy
///       field names allowed), normalizes it, and replaces the data file with its
///       pretty-printed form. Returns `{"revision": "<md5>"}`.
pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route(DATA_PATH, get().to(get::process))
        .service(scope(API_PATH).route("/save", post().to(save::process)));
}
