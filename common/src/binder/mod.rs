//! Form binder: the editable projection of a [`SiteDocument`].
//!
//! [`SiteForm`] owns the current value of every scalar control and the two
//! variable-length list sections. Data flows one way per operation:
//! [`SiteForm::render`] overwrites the form from a document,
//! [`SiteForm::collect`] builds a document from the form, and list mutations
//! operate on the owned entry sequence. Nothing is read back from the DOM.

mod list;

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::model::field::ScalarField;
use crate::model::news::{NewsField, NewsItem};
use crate::model::product::{Product, ProductField};
use crate::model::site::SiteDocument;
use crate::normalize::normalize;

pub use list::{ItemId, ItemList, ListEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Products,
    News,
}

impl ListKind {
    fn id_prefix(self) -> &'static str {
        match self {
            ListKind::Products => "product",
            ListKind::News => "news",
        }
    }

    /// Element id of section `id` on the admin page.
    pub fn section_id(self) -> &'static str {
        match self {
            ListKind::Products => "products",
            ListKind::News => "news",
        }
    }

    /// Positional control id, e.g. `product2Name` or `news1Summary`.
    pub fn control_id(self, position: usize, suffix: &str) -> String {
        format!("{}{}{}", self.id_prefix(), position, suffix)
    }

    pub fn heading(self, position: usize) -> String {
        match self {
            ListKind::Products => format!("产品{}", position),
            ListKind::News => format!("新闻{}", position),
        }
    }

    pub fn section_title(self) -> &'static str {
        match self {
            ListKind::Products => "产品管理",
            ListKind::News => "新闻管理",
        }
    }

    pub fn add_label(self) -> &'static str {
        match self {
            ListKind::Products => "添加产品",
            ListKind::News => "添加新闻",
        }
    }

    pub fn delete_label(self) -> &'static str {
        match self {
            ListKind::Products => "删除产品",
            ListKind::News => "删除新闻",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section_id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    NoSuchPosition {
        kind: ListKind,
        position: usize,
        len: usize,
    },
    NoSuchItem {
        kind: ListKind,
    },
    LastItem {
        kind: ListKind,
    },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::NoSuchPosition {
                kind,
                position,
                len,
            } => write!(f, "{} has no position {} (length {})", kind, position, len),
            BindError::NoSuchItem { kind } => write!(f, "item not found in {}", kind),
            BindError::LastItem { kind } => {
                write!(f, "{} must keep at least one entry", kind)
            }
        }
    }
}

impl std::error::Error for BindError {}

#[derive(Debug, Clone)]
pub struct SiteForm {
    values: BTreeMap<ScalarField, String>,
    products: ItemList<Product>,
    news: ItemList<NewsItem>,
}

impl Default for SiteForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteForm {
    /// A form holding the neutral defaults and two empty list sections.
    pub fn new() -> Self {
        let blank = SiteDocument::default();
        Self {
            values: ScalarField::ALL
                .into_iter()
                .map(|field| (field, field.get(&blank).to_string()))
                .collect(),
            products: ItemList::new(ListKind::Products),
            news: ItemList::new(ListKind::News),
        }
    }

    /// Overwrites every scalar control from `doc`. A list section is rebuilt
    /// only when the document's list is non-empty.
    pub fn render(&mut self, doc: &SiteDocument) {
        for field in ScalarField::ALL {
            self.values.insert(field, field.get(doc).to_string());
        }
        if !doc.products.is_empty() {
            self.products.replace(doc.products.clone());
        }
        if !doc.news.is_empty() {
            self.news.replace(doc.news.clone());
        }
    }

    /// Renders a raw document that may still use legacy field names.
    pub fn render_value(&mut self, raw: &Value) {
        self.render(&normalize(raw));
    }

    pub fn collect(&self) -> SiteDocument {
        let mut doc = SiteDocument::default();
        for field in ScalarField::ALL {
            field.set(&mut doc, self.value(field).to_string());
        }
        doc.products = self.products.items();
        doc.news = self.news.items();
        doc
    }

    pub fn value(&self, field: ScalarField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set_field(&mut self, field: ScalarField, value: String) {
        self.values.insert(field, value);
    }

    pub fn products(&self) -> &ItemList<Product> {
        &self.products
    }

    pub fn news(&self) -> &ItemList<NewsItem> {
        &self.news
    }

    pub fn len(&self, kind: ListKind) -> usize {
        match kind {
            ListKind::Products => self.products.len(),
            ListKind::News => self.news.len(),
        }
    }

    pub fn set_product_field(
        &mut self,
        id: ItemId,
        field: ProductField,
        value: String,
    ) -> Result<(), BindError> {
        field.set(self.products.get_mut(id)?, value);
        Ok(())
    }

    pub fn set_news_field(
        &mut self,
        id: ItemId,
        field: NewsField,
        value: String,
    ) -> Result<(), BindError> {
        field.set(self.news.get_mut(id)?, value);
        Ok(())
    }

    /// Appends a placeholder entry at the end of the list. News placeholders
    /// are dated `today` (`YYYY-MM-DD`).
    pub fn add_item(&mut self, kind: ListKind, today: &str) -> ItemId {
        match kind {
            ListKind::Products => self.products.push(Product::placeholder()),
            ListKind::News => self.news.push(NewsItem::placeholder(today)),
        }
    }

    /// Removes the entry at 1-based `position`; later entries move up by one.
    pub fn delete_item(&mut self, kind: ListKind, position: usize) -> Result<(), BindError> {
        match kind {
            ListKind::Products => self.products.remove_at(position).map(drop),
            ListKind::News => self.news.remove_at(position).map(drop),
        }
    }

    pub fn delete_item_by_id(&mut self, kind: ListKind, id: ItemId) -> Result<(), BindError> {
        match kind {
            ListKind::Products => self.products.remove(id).map(drop),
            ListKind::News => self.news.remove(id).map(drop),
        }
    }

    /// The first entry of a section never gets a delete control.
    pub fn shows_delete_control(position: usize) -> bool {
        position > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::defaults::builtin_document;
    use crate::model::site::{SocialLinks, Theme};
    use serde_json::json;

    fn small_document() -> SiteDocument {
        SiteDocument {
            site_title: "Acme Thermal".to_string(),
            company_name: "Acme".to_string(),
            company_description: "Pads and gels.".to_string(),
            company_address: "1 Main St".to_string(),
            company_phone: "555-0100".to_string(),
            company_email: "info@acme.test".to_string(),
            work_hours: "9-17".to_string(),
            wechat_qr_code: "qr.png".to_string(),
            social_links: SocialLinks {
                wechat_link: "https://wechat.test/acme".to_string(),
                weibo_link: "#".to_string(),
                linkedin_link: "https://linkedin.test/acme".to_string(),
            },
            theme: Theme {
                primary_color: "#112233".to_string(),
                accent_color: "#445566".to_string(),
                dark_color: "#000000".to_string(),
                light_color: "#FFFFFF".to_string(),
            },
            products: vec![Product {
                name: "Gel".to_string(),
                thermal_conductivity: "3 W/m·K".to_string(),
                description: "Soft".to_string(),
                image_url: "gel.png".to_string(),
            }],
            news: vec![NewsItem {
                title: "Launch".to_string(),
                date: "2024-03-01".to_string(),
                category: "Company".to_string(),
                image_url: "launch.png".to_string(),
                summary: "We launched.".to_string(),
            }],
        }
    }

    fn rendered(doc: &SiteDocument) -> SiteForm {
        let mut form = SiteForm::new();
        form.render(doc);
        form
    }

    #[test]
    fn collect_after_render_reproduces_the_document() {
        let doc = builtin_document();
        assert_eq!(rendered(&doc).collect(), doc);
    }

    #[test]
    fn rendering_twice_collects_the_same_result() {
        let doc = builtin_document();
        let mut form = rendered(&doc);
        let first = form.collect();
        form.render(&doc);
        assert_eq!(form.collect(), first);
    }

    #[test]
    fn hand_built_document_survives_render_and_collect() {
        let doc = small_document();
        let mut form = rendered(&doc);
        assert_eq!(form.value(ScalarField::PrimaryColor), "#112233");
        assert_eq!(form.collect(), doc);

        form.render(&doc);
        assert_eq!(form.collect(), doc);
        assert_eq!(form.len(ListKind::Products), 1);
        assert_eq!(form.len(ListKind::News), 1);
    }

    #[test]
    fn empty_lists_leave_current_sections_untouched() {
        let mut form = rendered(&builtin_document());
        let incoming = SiteDocument {
            company_name: "Other".to_string(),
            ..SiteDocument::default()
        };

        form.render(&incoming);
        let collected = form.collect();

        assert_eq!(collected.company_name, "Other");
        assert_eq!(collected.products.len(), 3);
        assert_eq!(collected.news.len(), 3);
    }

    #[test]
    fn render_value_accepts_legacy_shapes() {
        let mut form = SiteForm::new();
        form.render_value(&json!({ "siteName": "Acme", "contactInfo": { "phone": "123" } }));

        assert_eq!(form.value(ScalarField::CompanyName), "Acme");
        assert_eq!(form.value(ScalarField::SiteTitle), "Acme");
        assert_eq!(form.value(ScalarField::CompanyPhone), "123");
    }

    #[test]
    fn add_appends_placeholder_at_the_end() {
        let mut form = rendered(&builtin_document());
        let first = form.products().entries()[0].clone();

        let id = form.add_item(ListKind::Products, "2024-01-01");

        assert_eq!(form.len(ListKind::Products), 4);
        assert_eq!(form.products().position_of(id), Some(4));
        assert_eq!(form.products().entries()[0], first);
        assert_eq!(form.collect().products[3], Product::placeholder());
    }

    #[test]
    fn added_news_is_dated_today() {
        let mut form = rendered(&builtin_document());
        form.add_item(ListKind::News, "2024-06-30");

        let news = form.collect().news;
        assert_eq!(news.len(), 4);
        assert_eq!(news[3], NewsItem::placeholder("2024-06-30"));
    }

    #[test]
    fn delete_removes_exactly_one_position_and_shifts_the_rest() {
        let doc = builtin_document();
        let mut form = rendered(&doc);

        form.delete_item(ListKind::News, 2).unwrap();

        let news = form.collect().news;
        assert_eq!(news, vec![doc.news[0].clone(), doc.news[2].clone()]);
    }

    #[test]
    fn first_position_is_deletable_only_with_more_than_one_entry() {
        let doc = builtin_document();
        let mut form = rendered(&doc);

        form.delete_item(ListKind::Products, 1).unwrap();
        form.delete_item(ListKind::Products, 1).unwrap();
        assert_eq!(form.collect().products, vec![doc.products[2].clone()]);

        assert_eq!(
            form.delete_item(ListKind::Products, 1),
            Err(BindError::LastItem {
                kind: ListKind::Products
            })
        );
        assert_eq!(form.len(ListKind::Products), 1);
    }

    #[test]
    fn edits_follow_the_item_not_the_position() {
        let mut form = rendered(&builtin_document());
        let third = form.products().entries()[2].id;

        form.delete_item(ListKind::Products, 1).unwrap();
        form.set_product_field(third, ProductField::Name, "Renamed".to_string())
            .unwrap();

        assert_eq!(form.collect().products[1].name, "Renamed");
    }

    #[test]
    fn editing_a_deleted_item_is_an_error() {
        let mut form = rendered(&builtin_document());
        let second = form.news().entries()[1].id;
        form.delete_item_by_id(ListKind::News, second).unwrap();

        assert_eq!(
            form.set_news_field(second, NewsField::Title, "x".to_string()),
            Err(BindError::NoSuchItem {
                kind: ListKind::News
            })
        );
    }

    #[test]
    fn positional_control_ids() {
        assert_eq!(
            ListKind::Products.control_id(2, ProductField::Description.control_suffix()),
            "product2Desc"
        );
        assert_eq!(
            ListKind::News.control_id(1, NewsField::Summary.control_suffix()),
            "news1Summary"
        );
        assert!(!SiteForm::shows_delete_control(1));
        assert!(SiteForm::shows_delete_control(2));
    }
}
