//! Resolves the site document from an ordered chain of sources.
//!
//! Each [`DocumentSource`] either yields the raw JSON text or a reason it
//! could not. [`resolve_document`] tries them in order and stops at the first
//! one whose text parses; if all fail, the built-in document is returned. The
//! chain never fails outward.
//!
//! The remote fetch is asynchronous and is awaited by the caller before the
//! chain runs; its outcome enters the chain as a [`FetchedSource`]. Later
//! sources are only read when every earlier one failed.

use std::fmt;

use log::{info, warn};

use crate::model::defaults::builtin_document;
use crate::model::site::SiteDocument;
use crate::normalize::normalize_str;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Remote,
    LocalCache,
    BuiltIn,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Remote => "remote data file",
            SourceKind::LocalCache => "local cache",
            SourceKind::BuiltIn => "built-in defaults",
        };
        f.write_str(name)
    }
}

/// A fallible provider of raw site data.
pub trait DocumentSource {
    fn kind(&self) -> SourceKind;

    /// Returns the raw JSON text, or why it is unavailable.
    fn read(&self) -> Result<String, String>;
}

/// Outcome of an already-awaited remote fetch.
pub struct FetchedSource(pub Result<String, String>);

impl DocumentSource for FetchedSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Remote
    }

    fn read(&self) -> Result<String, String> {
        self.0.clone()
    }
}

/// The cached document slot of a key-value store.
pub struct CachedSource<'a, S: KeyValueStore + ?Sized> {
    pub store: &'a S,
    pub key: &'a str,
}

impl<S: KeyValueStore + ?Sized> DocumentSource for CachedSource<'_, S> {
    fn kind(&self) -> SourceKind {
        SourceKind::LocalCache
    }

    fn read(&self) -> Result<String, String> {
        self.store
            .get(self.key)?
            .ok_or_else(|| format!("no cached entry under '{}'", self.key))
    }
}

/// Why a source was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub source: SourceKind,
    pub reason: String,
}

impl fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.reason)
    }
}

/// The resolved document together with how it was obtained.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub document: SiteDocument,
    pub source: SourceKind,
    pub failures: Vec<SourceFailure>,
}

pub fn resolve_document(sources: &[&dyn DocumentSource]) -> Resolution {
    let mut failures = Vec::new();

    for source in sources {
        let attempt = source.read().and_then(|text| normalize_str(&text));
        match attempt {
            Ok(document) => {
                info!("site data loaded from {}", source.kind());
                return Resolution {
                    document,
                    source: source.kind(),
                    failures,
                };
            }
            Err(reason) => {
                warn!("could not load site data from {}: {}", source.kind(), reason);
                failures.push(SourceFailure {
                    source: source.kind(),
                    reason,
                });
            }
        }
    }

    info!("site data falling back to {}", SourceKind::BuiltIn);
    Resolution {
        document: builtin_document(),
        source: SourceKind::BuiltIn,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::cell::Cell;

    struct CountingSource<'a> {
        reads: &'a Cell<u32>,
    }

    impl DocumentSource for CountingSource<'_> {
        fn kind(&self) -> SourceKind {
            SourceKind::LocalCache
        }

        fn read(&self) -> Result<String, String> {
            self.reads.set(self.reads.get() + 1);
            Ok("{}".to_string())
        }
    }

    #[test]
    fn remote_success_short_circuits() {
        let reads = Cell::new(0);
        let remote = FetchedSource(Ok(r#"{"companyName":"Remote"}"#.to_string()));
        let cache = CountingSource { reads: &reads };

        let resolution = resolve_document(&[&remote, &cache]);

        assert_eq!(resolution.source, SourceKind::Remote);
        assert_eq!(resolution.document.company_name, "Remote");
        assert!(resolution.failures.is_empty());
        assert_eq!(reads.get(), 0);
    }

    #[test]
    fn malformed_remote_body_falls_through_to_cache() {
        let store = MemoryStore::default();
        store.set("websiteData", r#"{"companyName":"Cached"}"#).unwrap();
        let remote = FetchedSource(Ok("<html>not json</html>".to_string()));
        let cache = CachedSource {
            store: &store,
            key: "websiteData",
        };

        let resolution = resolve_document(&[&remote, &cache]);

        assert_eq!(resolution.source, SourceKind::LocalCache);
        assert_eq!(resolution.document.company_name, "Cached");
        assert_eq!(resolution.failures.len(), 1);
        assert_eq!(resolution.failures[0].source, SourceKind::Remote);
    }

    #[test]
    fn corrupt_cache_falls_back_to_builtin() {
        let store = MemoryStore::default();
        store.set("websiteData", "{ truncated").unwrap();
        let remote = FetchedSource(Err("network error".to_string()));
        let cache = CachedSource {
            store: &store,
            key: "websiteData",
        };

        let resolution = resolve_document(&[&remote, &cache]);

        assert_eq!(resolution.source, SourceKind::BuiltIn);
        assert_eq!(resolution.failures.len(), 2);
        assert_eq!(resolution.document, builtin_document());
    }

    #[test]
    fn empty_chain_resolves_to_builtin() {
        let resolution = resolve_document(&[]);
        assert_eq!(resolution.source, SourceKind::BuiltIn);
        assert!(resolution.failures.is_empty());
    }
}
