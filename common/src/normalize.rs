//! Maps a raw, possibly legacy-shaped JSON object onto [`SiteDocument`].
//!
//! Lookup rule for every scalar: the canonical key, then each known legacy
//! location in order, then a neutral default. A value that is empty, `null`,
//! an array or an object does not count as present, so the next candidate is
//! tried. Numbers and booleans are stringified.
//!
//! Legacy shapes accepted:
//! - `siteName` for both `siteTitle` and `companyName`
//! - `contactInfo.{address,phone,email}` for the contact fields
//! - `socialMedia.{wechatQrCode,wechat,weibo,linkedin}` for the social fields
//! - `thermalConductivity` and `imageUrl` inside list entries
//!
//! Contact fields fall back one at a time: a `contactInfo` object without a
//! `phone` still takes the flat `companyPhone`, rather than blanking it.

use log::warn;
use serde_json::Value;

use crate::model::news::NewsItem;
use crate::model::product::Product;
use crate::model::site::{DEFAULT_SOCIAL_LINK, SiteDocument, SocialLinks, Theme};

pub fn normalize(raw: &Value) -> SiteDocument {
    SiteDocument {
        site_title: text(raw, &[&["siteTitle"], &["siteName"]]),
        company_name: text(raw, &[&["companyName"], &["siteName"]]),
        company_description: text(raw, &[&["companyDescription"]]),
        company_address: text(raw, &[&["contactInfo", "address"], &["companyAddress"]]),
        company_phone: text(raw, &[&["contactInfo", "phone"], &["companyPhone"]]),
        company_email: text(raw, &[&["contactInfo", "email"], &["companyEmail"]]),
        work_hours: text(raw, &[&["workHours"]]),
        wechat_qr_code: text(raw, &[&["wechatQrCode"], &["socialMedia", "wechatQrCode"]]),
        social_links: SocialLinks {
            wechat_link: text_or(
                raw,
                &[&["wechatLink"], &["socialMedia", "wechat"]],
                DEFAULT_SOCIAL_LINK,
            ),
            weibo_link: text_or(
                raw,
                &[&["weiboLink"], &["socialMedia", "weibo"]],
                DEFAULT_SOCIAL_LINK,
            ),
            linkedin_link: text_or(
                raw,
                &[&["linkedinLink"], &["socialMedia", "linkedin"]],
                DEFAULT_SOCIAL_LINK,
            ),
        },
        theme: Theme {
            primary_color: text_or(raw, &[&["primaryColor"]], Theme::DEFAULT_PRIMARY),
            accent_color: text_or(raw, &[&["accentColor"]], Theme::DEFAULT_ACCENT),
            dark_color: text_or(raw, &[&["darkColor"]], Theme::DEFAULT_DARK),
            light_color: text_or(raw, &[&["lightColor"]], Theme::DEFAULT_LIGHT),
        },
        products: list(raw, "products", product),
        news: list(raw, "news", news_item),
    }
}

/// Parses `text` as JSON and normalizes it.
pub fn normalize_str(text: &str) -> Result<SiteDocument, String> {
    let raw: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    if !raw.is_object() {
        return Err("site data must be a JSON object".to_string());
    }
    Ok(normalize(&raw))
}

fn text(raw: &Value, candidates: &[&[&str]]) -> String {
    lookup(raw, candidates).unwrap_or_default()
}

fn text_or(raw: &Value, candidates: &[&[&str]], default: &str) -> String {
    lookup(raw, candidates).unwrap_or_else(|| default.to_string())
}

/// Each candidate is a key path into the raw document.
fn lookup(raw: &Value, candidates: &[&[&str]]) -> Option<String> {
    candidates.iter().find_map(|path| {
        let value = path.iter().try_fold(raw, |node, key| node.get(*key))?;
        scalar(value)
    })
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Entries that are not objects are skipped; an absent or empty array yields
/// an empty list, which the binder reads as "leave the current list alone".
/// Every object entry is kept, its sub-fields read with the scalar rule.
fn list<T>(raw: &Value, key: &str, build: fn(&Value) -> T) -> Vec<T> {
    let Some(items) = raw.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if item.is_object() {
                Some(build(item))
            } else {
                warn!("skipping {} entry {}: not an object", key, index + 1);
                None
            }
        })
        .collect()
}

fn product(item: &Value) -> Product {
    Product {
        name: text(item, &[&["name"]]),
        thermal_conductivity: text(item, &[&["thermal"], &["thermalConductivity"]]),
        description: text(item, &[&["description"]]),
        image_url: text(item, &[&["image"], &["imageUrl"]]),
    }
}

fn news_item(item: &Value) -> NewsItem {
    NewsItem {
        title: text(item, &[&["title"]]),
        date: text(item, &[&["date"]]),
        category: text(item, &[&["category"]]),
        image_url: text(item, &[&["image"], &["imageUrl"]]),
        summary: text(item, &[&["summary"]]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::ScalarField;
    use serde_json::json;

    #[test]
    fn legacy_site_name_and_contact_info() {
        let doc = normalize(&json!({
            "siteName": "Acme",
            "contactInfo": { "phone": "123" }
        }));

        assert_eq!(doc.company_name, "Acme");
        assert_eq!(doc.site_title, "Acme");
        assert_eq!(doc.company_phone, "123");
        assert_eq!(doc.company_address, "");
        assert_eq!(doc.company_email, "");
        assert_eq!(doc.company_description, "");
        assert_eq!(doc.work_hours, "");
        assert_eq!(doc.wechat_qr_code, "");
        assert!(doc.products.is_empty());
        assert!(doc.news.is_empty());
    }

    #[test]
    fn canonical_keys_win_over_legacy() {
        let doc = normalize(&json!({
            "siteTitle": "Title",
            "companyName": "Company",
            "siteName": "Legacy",
            "companyPhone": "flat",
        }));

        assert_eq!(doc.site_title, "Title");
        assert_eq!(doc.company_name, "Company");
        assert_eq!(doc.company_phone, "flat");
    }

    #[test]
    fn empty_canonical_value_falls_back_to_alias() {
        let doc = normalize(&json!({ "companyName": "", "siteName": "Acme" }));
        assert_eq!(doc.company_name, "Acme");
    }

    #[test]
    fn contact_info_sub_field_beats_flat_field() {
        let doc = normalize(&json!({
            "contactInfo": { "email": "nested@acme.test" },
            "companyEmail": "flat@acme.test",
            "companyAddress": "Flat street 1",
        }));

        assert_eq!(doc.company_email, "nested@acme.test");
        assert_eq!(doc.company_address, "Flat street 1");
    }

    #[test]
    fn social_media_object_and_neutral_defaults() {
        let doc = normalize(&json!({
            "socialMedia": { "weibo": "https://weibo.test/acme", "wechatQrCode": "qr.png" }
        }));

        assert_eq!(doc.social_links.weibo_link, "https://weibo.test/acme");
        assert_eq!(doc.social_links.wechat_link, "#");
        assert_eq!(doc.social_links.linkedin_link, "#");
        assert_eq!(doc.wechat_qr_code, "qr.png");
        assert_eq!(doc.theme, Theme::default());
    }

    #[test]
    fn non_string_scalars_are_stringified_or_ignored() {
        let doc = normalize(&json!({
            "companyPhone": 5551234,
            "workHours": null,
            "companyDescription": ["not", "text"],
        }));

        assert_eq!(doc.company_phone, "5551234");
        assert_eq!(doc.work_hours, "");
        assert_eq!(doc.company_description, "");
        for field in ScalarField::ALL {
            let _: &str = field.get(&doc);
        }
    }

    #[test]
    fn list_entries_that_are_not_objects_are_skipped() {
        let doc = normalize(&json!({
            "products": [ { "name": "A", "thermal": "1 W/m·K" }, "junk", 7 ],
            "news": []
        }));

        assert_eq!(doc.products.len(), 1);
        assert_eq!(doc.products[0].name, "A");
        assert_eq!(doc.products[0].image_url, "");
        assert!(doc.news.is_empty());
    }

    #[test]
    fn null_item_fields_do_not_drop_the_entry() {
        let doc = normalize_str(
            r#"{"products":[{"name":"A","thermal":"1 W/m·K","description":"d","image":null},{"name":"B"}]}"#,
        )
        .unwrap();

        let names: Vec<&str> = doc.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(doc.products[0].image_url, "");
        assert_eq!(doc.products[0].thermal_conductivity, "1 W/m·K");
    }

    #[test]
    fn canonical_and_alias_keys_together_keep_the_entry() {
        let doc = normalize(&json!({
            "products": [
                { "name": "A", "thermal": "2 W/m·K", "thermalConductivity": "9 W/m·K",
                  "image": "", "imageUrl": "a.png" },
                { "name": "B", "thermalConductivity": "3 W/m·K" }
            ]
        }));

        assert_eq!(doc.products.len(), 2);
        assert_eq!(doc.products[0].thermal_conductivity, "2 W/m·K");
        assert_eq!(doc.products[0].image_url, "a.png");
        assert_eq!(doc.products[1].thermal_conductivity, "3 W/m·K");
    }

    #[test]
    fn numeric_news_fields_are_stringified() {
        let doc = normalize(&json!({
            "news": [
                { "title": 2024, "date": "2024-01-01", "category": true, "imageUrl": "n.png" },
                { "title": "B" }
            ]
        }));

        assert_eq!(doc.news.len(), 2);
        assert_eq!(doc.news[0].title, "2024");
        assert_eq!(doc.news[0].category, "true");
        assert_eq!(doc.news[0].image_url, "n.png");
        assert_eq!(doc.news[0].summary, "");
        assert_eq!(doc.news[1].title, "B");
    }

    #[test]
    fn normalize_str_rejects_malformed_and_non_object_json() {
        assert!(normalize_str("{ not json").is_err());
        assert!(normalize_str("[1, 2]").is_err());
        assert!(normalize_str(r#"{"companyName":"X"}"#).is_ok());
    }
}
