//! End-to-end flows across loader, binder and save path.

use site_admin_common::binder::{ListKind, SiteForm};
use site_admin_common::config::AdminConfig;
use site_admin_common::loader::{CachedSource, FetchedSource, SourceKind, resolve_document};
use site_admin_common::model::defaults::builtin_document;
use site_admin_common::model::field::ScalarField;
use site_admin_common::save::{Exporter, save_document};
use site_admin_common::storage::{KeyValueStore, MemoryStore};

struct NullExporter;

impl Exporter for NullExporter {
    fn export(&self, _file_name: &str, _contents: &str) -> Result<(), String> {
        Ok(())
    }
}

fn cache_two_products(store: &MemoryStore, config: &AdminConfig) {
    let mut doc = builtin_document();
    doc.products.truncate(2);
    doc.company_name = "Cached Co".to_string();
    store
        .set(&config.cache_key, &serde_json::to_string(&doc).unwrap())
        .unwrap();
}

#[test]
fn not_found_remote_uses_the_cached_document() {
    let config = AdminConfig::default();
    let store = MemoryStore::default();
    cache_two_products(&store, &config);

    let remote = FetchedSource(Err("404 Not Found".to_string()));
    let cache = CachedSource {
        store: &store,
        key: &config.cache_key,
    };
    let resolution = resolve_document(&[&remote, &cache]);

    assert_eq!(resolution.source, SourceKind::LocalCache);
    assert_eq!(resolution.document.products.len(), 2);
    assert_eq!(resolution.document.company_name, "Cached Co");
}

#[test]
fn nothing_available_uses_the_builtin_document() {
    let config = AdminConfig::default();
    let store = MemoryStore::default();

    let remote = FetchedSource(Err("network error".to_string()));
    let cache = CachedSource {
        store: &store,
        key: &config.cache_key,
    };
    let resolution = resolve_document(&[&remote, &cache]);

    assert_eq!(resolution.source, SourceKind::BuiltIn);
    assert_eq!(resolution.document.products.len(), 3);
    assert_eq!(resolution.document.news.len(), 3);
    assert_eq!(resolution.failures.len(), 2);
}

#[test]
fn edits_saved_offline_are_loaded_next_time() {
    let config = AdminConfig::default();
    let store = MemoryStore::default();

    let first = resolve_document(&[&FetchedSource(Err("offline".to_string()))]);
    let mut form = SiteForm::new();
    form.render(&first.document);
    form.set_field(ScalarField::CompanyPhone, "020-5550000".to_string());
    form.delete_item(ListKind::Products, 3).unwrap();
    form.add_item(ListKind::News, "2024-02-29");

    let report = save_document(
        &form.collect(),
        &store,
        &config.cache_key,
        &NullExporter,
        &config.export_file_name,
    );
    assert!(report.is_clean());

    let cache = CachedSource {
        store: &store,
        key: &config.cache_key,
    };
    let second = resolve_document(&[&FetchedSource(Err("offline".to_string())), &cache]);

    assert_eq!(second.source, SourceKind::LocalCache);
    assert_eq!(second.document.company_phone, "020-5550000");
    assert_eq!(second.document.products.len(), 2);
    assert_eq!(second.document.news.len(), 4);
    assert_eq!(second.document.news[3].date, "2024-02-29");
}

#[test]
fn legacy_remote_document_fills_the_form() {
    let remote = FetchedSource(Ok(
        r#"{"siteName":"Acme","contactInfo":{"phone":"123"},"products":[{"name":"P"}]}"#
            .to_string(),
    ));
    let resolution = resolve_document(&[&remote]);

    let mut form = SiteForm::new();
    form.render(&resolution.document);
    let doc = form.collect();

    assert_eq!(doc.company_name, "Acme");
    assert_eq!(doc.company_phone, "123");
    assert_eq!(doc.company_email, "");
    assert_eq!(doc.products.len(), 1);
    assert!(doc.news.is_empty());
}
