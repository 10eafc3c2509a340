//! Shared access to the site data file.
//!
//! `SiteStore` is created in `main.rs` and injected into the Actix application
//! as `web::Data`. Reads go straight to disk; writes are serialized through a
//! mutex and land via a temp file in the same directory followed by a rename,
//! so the public site never serves a half-written file.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::NamedTempFile;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct SiteStore {
    /// Location of the data file served as `/site-data`.
    pub path: PathBuf,

    /// Held for the duration of a write.
    write_lock: Arc<Mutex<()>>,
}

impl SiteStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// `Ok(None)` when the file does not exist yet.
    pub fn read(&self) -> Result<Option<Vec<u8>>, String> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.to_string()),
        }
    }

    /// Replaces the file contents and returns the new revision.
    pub async fn write(&self, contents: &str) -> Result<String, String> {
        let _guard = self.write_lock.lock().await;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| e.to_string())?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| e.to_string())?;
        tmp.write_all(contents.as_bytes())
            .map_err(|e| e.to_string())?;
        tmp.persist(&self.path).map_err(|e| e.to_string())?;

        Ok(revision(contents.as_bytes()))
    }
}

/// MD5 hex digest used as the file's revision and `ETag`.
pub fn revision(bytes: &[u8]) -> String {
    format!("{:x}", md5::compute(bytes))
}
