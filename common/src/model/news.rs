use serde::{Deserialize, Serialize};

/// A news entry on the public site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    pub title: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub category: String,
    #[serde(rename = "image", alias = "imageUrl")]
    pub image_url: String,
    pub summary: String,
}

impl NewsItem {
    /// Values given to a news item added from the editor, dated `today`.
    pub fn placeholder(today: &str) -> Self {
        Self {
            title: "新闻标题".to_string(),
            date: today.to_string(),
            category: "新闻分类".to_string(),
            image_url: "https://picsum.photos/id/1/600/400".to_string(),
            summary: "新闻摘要".to_string(),
        }
    }
}

/// Editable sub-fields of a [`NewsItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewsField {
    Title,
    Date,
    Category,
    Image,
    Summary,
}

impl NewsField {
    pub const ALL: [NewsField; 5] = [
        NewsField::Title,
        NewsField::Date,
        NewsField::Category,
        NewsField::Image,
        NewsField::Summary,
    ];

    /// Suffix used in positional control ids (`news{n}{suffix}`).
    pub fn control_suffix(self) -> &'static str {
        match self {
            NewsField::Title => "Title",
            NewsField::Date => "Date",
            NewsField::Category => "Category",
            NewsField::Image => "Image",
            NewsField::Summary => "Summary",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NewsField::Title => "新闻标题",
            NewsField::Date => "发布日期",
            NewsField::Category => "新闻分类",
            NewsField::Image => "新闻图片URL",
            NewsField::Summary => "新闻摘要",
        }
    }

    pub fn get(self, item: &NewsItem) -> &str {
        match self {
            NewsField::Title => &item.title,
            NewsField::Date => &item.date,
            NewsField::Category => &item.category,
            NewsField::Image => &item.image_url,
            NewsField::Summary => &item.summary,
        }
    }

    pub fn set(self, item: &mut NewsItem, value: String) {
        match self {
            NewsField::Title => item.title = value,
            NewsField::Date => item.date = value,
            NewsField::Category => item.category = value,
            NewsField::Image => item.image_url = value,
            NewsField::Summary => item.summary = value,
        }
    }
}
