//! Save path: cache the collected document, then hand it to the exporter.
//!
//! Both steps are best-effort. A failing step is logged and recorded in the
//! [`SaveReport`]; it never aborts the other step.

use log::{error, info};

use crate::model::site::SiteDocument;
use crate::storage::KeyValueStore;

/// Offers a serialized document to the user, e.g. as a file download.
pub trait Exporter {
    fn export(&self, file_name: &str, contents: &str) -> Result<(), String>;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub cache_error: Option<String>,
    pub export_error: Option<String>,
}

impl SaveReport {
    pub fn is_clean(&self) -> bool {
        self.cache_error.is_none() && self.export_error.is_none()
    }
}

/// Pretty-printed JSON with two-space indentation, the shape of the exported
/// `site-data` file.
pub fn to_export_json(doc: &SiteDocument) -> Result<String, String> {
    serde_json::to_string_pretty(doc).map_err(|e| e.to_string())
}

pub fn save_document(
    doc: &SiteDocument,
    cache: &dyn KeyValueStore,
    cache_key: &str,
    exporter: &dyn Exporter,
    file_name: &str,
) -> SaveReport {
    let mut report = SaveReport::default();

    let cached = serde_json::to_string(doc)
        .map_err(|e| e.to_string())
        .and_then(|json| cache.set(cache_key, &json));
    if let Err(e) = cached {
        error!("could not cache site data: {}", e);
        report.cache_error = Some(e);
    }

    let exported = to_export_json(doc).and_then(|json| exporter.export(file_name, &json));
    match exported {
        Ok(()) => info!("site data exported as {}", file_name),
        Err(e) => {
            error!("could not export site data: {}", e);
            report.export_error = Some(e);
        }
    }

    report
}
