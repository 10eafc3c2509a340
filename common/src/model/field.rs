//! Fixed-id scalar controls of the admin form.
//!
//! Every scalar of [`SiteDocument`] has exactly one control, addressed by the
//! element id the admin page uses (which is also the field's wire key).

use crate::model::site::SiteDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarField {
    SiteTitle,
    CompanyName,
    CompanyDescription,
    CompanyAddress,
    CompanyPhone,
    CompanyEmail,
    WorkHours,
    WechatQrCode,
    WechatLink,
    WeiboLink,
    LinkedinLink,
    PrimaryColor,
    AccentColor,
    DarkColor,
    LightColor,
}

/// How a control is presented. The binder treats all of them as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    TextArea,
    Color,
}

impl ScalarField {
    pub const ALL: [ScalarField; 15] = [
        ScalarField::SiteTitle,
        ScalarField::CompanyName,
        ScalarField::CompanyDescription,
        ScalarField::CompanyAddress,
        ScalarField::CompanyPhone,
        ScalarField::CompanyEmail,
        ScalarField::WorkHours,
        ScalarField::WechatQrCode,
        ScalarField::WechatLink,
        ScalarField::WeiboLink,
        ScalarField::LinkedinLink,
        ScalarField::PrimaryColor,
        ScalarField::AccentColor,
        ScalarField::DarkColor,
        ScalarField::LightColor,
    ];

    pub fn control_id(self) -> &'static str {
        match self {
            ScalarField::SiteTitle => "siteTitle",
            ScalarField::CompanyName => "companyName",
            ScalarField::CompanyDescription => "companyDescription",
            ScalarField::CompanyAddress => "companyAddress",
            ScalarField::CompanyPhone => "companyPhone",
            ScalarField::CompanyEmail => "companyEmail",
            ScalarField::WorkHours => "workHours",
            ScalarField::WechatQrCode => "wechatQrCode",
            ScalarField::WechatLink => "wechatLink",
            ScalarField::WeiboLink => "weiboLink",
            ScalarField::LinkedinLink => "linkedinLink",
            ScalarField::PrimaryColor => "primaryColor",
            ScalarField::AccentColor => "accentColor",
            ScalarField::DarkColor => "darkColor",
            ScalarField::LightColor => "lightColor",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScalarField::SiteTitle => "网站标题",
            ScalarField::CompanyName => "公司名称",
            ScalarField::CompanyDescription => "公司简介",
            ScalarField::CompanyAddress => "公司地址",
            ScalarField::CompanyPhone => "联系电话",
            ScalarField::CompanyEmail => "电子邮箱",
            ScalarField::WorkHours => "工作时间",
            ScalarField::WechatQrCode => "微信二维码URL",
            ScalarField::WechatLink => "微信链接",
            ScalarField::WeiboLink => "微博链接",
            ScalarField::LinkedinLink => "LinkedIn链接",
            ScalarField::PrimaryColor => "主色调",
            ScalarField::AccentColor => "强调色",
            ScalarField::DarkColor => "深色",
            ScalarField::LightColor => "浅色",
        }
    }

    pub fn control_kind(self) -> ControlKind {
        match self {
            ScalarField::CompanyDescription => ControlKind::TextArea,
            ScalarField::PrimaryColor
            | ScalarField::AccentColor
            | ScalarField::DarkColor
            | ScalarField::LightColor => ControlKind::Color,
            _ => ControlKind::Text,
        }
    }

    pub fn get(self, doc: &SiteDocument) -> &str {
        match self {
            ScalarField::SiteTitle => &doc.site_title,
            ScalarField::CompanyName => &doc.company_name,
            ScalarField::CompanyDescription => &doc.company_description,
            ScalarField::CompanyAddress => &doc.company_address,
            ScalarField::CompanyPhone => &doc.company_phone,
            ScalarField::CompanyEmail => &doc.company_email,
            ScalarField::WorkHours => &doc.work_hours,
            ScalarField::WechatQrCode => &doc.wechat_qr_code,
            ScalarField::WechatLink => &doc.social_links.wechat_link,
            ScalarField::WeiboLink => &doc.social_links.weibo_link,
            ScalarField::LinkedinLink => &doc.social_links.linkedin_link,
            ScalarField::PrimaryColor => &doc.theme.primary_color,
            ScalarField::AccentColor => &doc.theme.accent_color,
            ScalarField::DarkColor => &doc.theme.dark_color,
            ScalarField::LightColor => &doc.theme.light_color,
        }
    }

    pub fn set(self, doc: &mut SiteDocument, value: String) {
        let slot = match self {
            ScalarField::SiteTitle => &mut doc.site_title,
            ScalarField::CompanyName => &mut doc.company_name,
            ScalarField::CompanyDescription => &mut doc.company_description,
            ScalarField::CompanyAddress => &mut doc.company_address,
            ScalarField::CompanyPhone => &mut doc.company_phone,
            ScalarField::CompanyEmail => &mut doc.company_email,
            ScalarField::WorkHours => &mut doc.work_hours,
            ScalarField::WechatQrCode => &mut doc.wechat_qr_code,
            ScalarField::WechatLink => &mut doc.social_links.wechat_link,
            ScalarField::WeiboLink => &mut doc.social_links.weibo_link,
            ScalarField::LinkedinLink => &mut doc.social_links.linkedin_link,
            ScalarField::PrimaryColor => &mut doc.theme.primary_color,
            ScalarField::AccentColor => &mut doc.theme.accent_color,
            ScalarField::DarkColor => &mut doc.theme.dark_color,
            ScalarField::LightColor => &mut doc.theme.light_color,
        };
        *slot = value;
    }
}
