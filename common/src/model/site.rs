use serde::{Deserialize, Serialize};

use crate::model::news::NewsItem;
use crate::model::product::Product;

/// Default social link value used by the public site for "no link".
pub const DEFAULT_SOCIAL_LINK: &str = "#";

/// Canonical representation of every editable piece of site copy.
///
/// The field names serialize to the camelCase keys the public site reads from
/// its `site-data` file. Social links and theme colors are grouped in their own
/// structs but flattened on the wire, so the exported file keeps the flat shape.
///
/// Legacy shapes (`siteName`, `contactInfo`, `socialMedia`) are never produced
/// here; they are only accepted on input by [`crate::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteDocument {
    pub site_title: String,
    pub company_name: String,
    pub company_description: String,
    pub company_address: String,
    pub company_phone: String,
    pub company_email: String,
    pub work_hours: String,

    /// Image URL of the messaging-app QR code.
    pub wechat_qr_code: String,

    #[serde(flatten)]
    pub social_links: SocialLinks,

    #[serde(flatten)]
    pub theme: Theme,

    pub products: Vec<Product>,
    pub news: Vec<NewsItem>,
}

impl Default for SiteDocument {
    fn default() -> Self {
        Self {
            site_title: String::new(),
            company_name: String::new(),
            company_description: String::new(),
            company_address: String::new(),
            company_phone: String::new(),
            company_email: String::new(),
            work_hours: String::new(),
            wechat_qr_code: String::new(),
            social_links: SocialLinks::default(),
            theme: Theme::default(),
            products: Vec::new(),
            news: Vec::new(),
        }
    }
}

/// Named social-link URLs. One field per network keeps the keys unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinks {
    pub wechat_link: String,
    pub weibo_link: String,
    pub linkedin_link: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            wechat_link: DEFAULT_SOCIAL_LINK.to_string(),
            weibo_link: DEFAULT_SOCIAL_LINK.to_string(),
            linkedin_link: DEFAULT_SOCIAL_LINK.to_string(),
        }
    }
}

/// The four theme colors of the public site, as CSS color strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub primary_color: String,
    pub accent_color: String,
    pub dark_color: String,
    pub light_color: String,
}

impl Theme {
    pub const DEFAULT_PRIMARY: &'static str = "#0F3460";
    pub const DEFAULT_ACCENT: &'static str = "#E94560";
    pub const DEFAULT_DARK: &'static str = "#16213E";
    pub const DEFAULT_LIGHT: &'static str = "#F5F5F5";
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: Self::DEFAULT_PRIMARY.to_string(),
            accent_color: Self::DEFAULT_ACCENT.to_string(),
            dark_color: Self::DEFAULT_DARK.to_string(),
            light_color: Self::DEFAULT_LIGHT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_flat_camel_case_keys() {
        let doc = SiteDocument {
            company_name: "PinSai".to_string(),
            ..SiteDocument::default()
        };
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["companyName"], "PinSai");
        assert_eq!(value["wechatLink"], "#");
        assert_eq!(value["primaryColor"], Theme::DEFAULT_PRIMARY);
        assert!(value.get("socialLinks").is_none());
        assert!(value.get("theme").is_none());
        assert!(value["products"].as_array().unwrap().is_empty());
    }
}
