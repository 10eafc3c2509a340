//! Built-in document used when neither the remote file nor the local cache
//! yields anything usable.

use crate::model::news::NewsItem;
use crate::model::product::Product;
use crate::model::site::{SiteDocument, SocialLinks, Theme};

pub fn builtin_document() -> SiteDocument {
    SiteDocument {
        site_title: "PinSai导热硅脂 - 专业导热解决方案提供商".to_string(),
        company_name: "PinSai".to_string(),
        company_description:
            "15年专注导热材料研发与生产，国家高新技术企业，为全球客户提供高品质的导热解决方案。"
                .to_string(),
        company_address: "广东省深圳市南山区科技园南区".to_string(),
        company_phone: "0755-12345678".to_string(),
        company_email: "info@pinsai.com".to_string(),
        work_hours: "周一至周五: 9:00 - 18:00".to_string(),
        wechat_qr_code: "https://picsum.photos/id/237/120/120".to_string(),
        social_links: SocialLinks::default(),
        theme: Theme::default(),
        products: vec![
            product(
                "HC-900 高导热硅脂",
                "8.5 W/m·K",
                "超高导热系数，适用于CPU、GPU等高性能电子元件的散热需求，长期使用稳定性好。",
                "https://picsum.photos/id/1/500/300",
            ),
            product(
                "HC-700 通用导热硅脂",
                "6.8 W/m·K",
                "高性价比的通用型导热硅脂，适用于大多数电子设备的散热需求，施工性能优良。",
                "https://picsum.photos/id/2/500/300",
            ),
            product(
                "HC-500 经济型导热硅脂",
                "4.5 W/m·K",
                "经济型导热硅脂，适用于一般电子设备的散热需求，性价比高。",
                "https://picsum.photos/id/3/500/300",
            ),
        ],
        news: vec![
            news(
                "PinSai新生产基地正式投产，年产能提升至1000吨",
                "2023-05-28",
                "公司新闻",
                "https://picsum.photos/id/180/600/400",
                "我司位于惠州的新生产基地正式投产，占地面积20000平方米，引入多条自动化生产线，年产能提升至1000吨，将更好地满足客户需求。",
            ),
            news(
                "PinSai荣获2023年度导热材料行业最佳供应商奖",
                "2023-04-15",
                "公司新闻",
                "https://picsum.photos/id/200/600/400",
                "在2023年度导热材料行业评选中，PinSai凭借卓越的产品质量和完善的服务体系，荣获'最佳供应商'奖项。",
            ),
            news(
                "新能源汽车导热解决方案市场需求激增，PinSai推出定制化产品",
                "2023-03-10",
                "行业动态",
                "https://picsum.photos/id/111/600/400",
                "随着新能源汽车市场的快速发展，导热材料需求激增。PinSai针对新能源汽车领域推出了系列定制化导热解决方案，获得市场广泛认可。",
            ),
        ],
    }
}

fn product(name: &str, thermal: &str, description: &str, image: &str) -> Product {
    Product {
        name: name.to_string(),
        thermal_conductivity: thermal.to_string(),
        description: description.to_string(),
        image_url: image.to_string(),
    }
}

fn news(title: &str, date: &str, category: &str, image: &str, summary: &str) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        date: date.to_string(),
        category: category.to_string(),
        image_url: image.to_string(),
        summary: summary.to_string(),
    }
}
