//! Static marketing page handlers (about, certificates, contact page).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use tracing::instrument;

use pjy_core::Locale;

use crate::filters;
use crate::state::AppState;

use super::LangQuery;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub lang: &'static str,
    pub title: String,
    pub heading: String,
    pub paragraphs: Vec<String>,
}

/// A certificate shown in the gallery.
#[derive(Clone)]
pub struct CertificateView {
    pub name: String,
    pub image: String,
    pub description: String,
}

/// Certificates page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/certificates.html")]
pub struct CertificatesTemplate {
    pub lang: &'static str,
    pub title: String,
    pub heading: String,
    pub intro: String,
    pub certificates: Vec<CertificateView>,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub lang: &'static str,
    pub title: String,
    pub heading: String,
    pub intro: String,
    pub address: String,
    pub name_label: String,
    pub email_label: String,
    pub company_label: String,
    pub message_label: String,
    pub submit_label: String,
    pub email_enabled: bool,
    pub disabled_notice: String,
}

/// Display the about page.
#[instrument]
pub async fn about(Query(query): Query<LangQuery>) -> impl IntoResponse {
    let locale = query.locale();

    let (title, heading, paragraphs) = match locale {
        Locale::En => (
            "About Us",
            "About PJY",
            vec![
                "PJY Touchscreen Manufacturing has specialized in capacitive and \
                 resistive touch technology for over a decade, serving industrial, \
                 retail, and education customers worldwide."
                    .to_string(),
                "Our factory in Shenzhen's Guangming District covers the full \
                 production chain: lamination, bonding, calibration, and final \
                 assembly of complete touch display units."
                    .to_string(),
            ],
        ),
        Locale::Zh => (
            "关于我们",
            "关于PJY",
            vec![
                "PJY触摸屏制造十多年来专注于电容式和电阻式触控技术，服务于全球工业、零售和教育客户。".to_string(),
                "我们位于深圳光明区的工厂覆盖完整的生产链：贴合、绑定、校准以及整机触摸显示单元的总装。".to_string(),
            ],
        ),
    };

    AboutTemplate {
        lang: locale.as_str(),
        title: title.to_string(),
        heading: heading.to_string(),
        paragraphs,
    }
}

/// Display the certificates page.
#[instrument]
pub async fn certificates(Query(query): Query<LangQuery>) -> impl IntoResponse {
    let locale = query.locale();

    let certificates = match locale {
        Locale::En => vec![
            CertificateView {
                name: "CE".to_string(),
                image: "/images/certificates/ce.jpg".to_string(),
                description: "European Conformity for display and touch products".to_string(),
            },
            CertificateView {
                name: "FCC".to_string(),
                image: "/images/certificates/fcc.jpg".to_string(),
                description: "US electromagnetic compatibility certification".to_string(),
            },
            CertificateView {
                name: "RoHS".to_string(),
                image: "/images/certificates/rohs.jpg".to_string(),
                description: "Restriction of hazardous substances compliance".to_string(),
            },
            CertificateView {
                name: "ISO 9001".to_string(),
                image: "/images/certificates/iso9001.jpg".to_string(),
                description: "Quality management system certification".to_string(),
            },
        ],
        Locale::Zh => vec![
            CertificateView {
                name: "CE".to_string(),
                image: "/images/certificates/ce.jpg".to_string(),
                description: "显示和触控产品的欧洲合格认证".to_string(),
            },
            CertificateView {
                name: "FCC".to_string(),
                image: "/images/certificates/fcc.jpg".to_string(),
                description: "美国电磁兼容认证".to_string(),
            },
            CertificateView {
                name: "RoHS".to_string(),
                image: "/images/certificates/rohs.jpg".to_string(),
                description: "有害物质限制合规".to_string(),
            },
            CertificateView {
                name: "ISO 9001".to_string(),
                image: "/images/certificates/iso9001.jpg".to_string(),
                description: "质量管理体系认证".to_string(),
            },
        ],
    };

    let (title, heading, intro) = match locale {
        Locale::En => (
            "Certificates",
            "Certifications & Compliance",
            "Our products are certified for the major global markets.",
        ),
        Locale::Zh => ("证书", "认证与合规", "我们的产品已获得主要全球市场的认证。"),
    };

    CertificatesTemplate {
        lang: locale.as_str(),
        title: title.to_string(),
        heading: heading.to_string(),
        intro: intro.to_string(),
        certificates,
    }
}

/// Display the contact page.
#[instrument(skip(state))]
pub async fn contact_page(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> impl IntoResponse {
    let locale = query.locale();

    let (title, heading, intro, address, labels, disabled_notice) = match locale {
        Locale::En => (
            "Contact Us",
            "Contact Us",
            "Have questions about our products or services? Our team is here to help.",
            "Tianliao community, Yutang Street, Guangming District, Shenzhen, China",
            ("Name", "Email", "Company", "Message", "Send Message"),
            "The contact form is temporarily unavailable. Please email us directly.",
        ),
        Locale::Zh => (
            "联系我们",
            "联系我们",
            "对我们的产品或服务有疑问？我们的团队随时为您提供帮助。",
            "中国深圳市光明区玉塘街道田寮社区",
            ("姓名", "电子邮件", "公司", "留言", "发送留言"),
            "联系表单暂时不可用。请直接给我们发送电子邮件。",
        ),
    };

    ContactTemplate {
        lang: locale.as_str(),
        title: title.to_string(),
        heading: heading.to_string(),
        intro: intro.to_string(),
        address: address.to_string(),
        name_label: labels.0.to_string(),
        email_label: labels.1.to_string(),
        company_label: labels.2.to_string(),
        message_label: labels.3.to_string(),
        submit_label: labels.4.to_string(),
        email_enabled: state.email().is_some(),
        disabled_notice: disabled_notice.to_string(),
    }
}
