//! Contact form route handlers.
//!
//! Forwards submissions to the transactional email service. Dispatch is
//! best-effort: failures come back to the visitor as a status message and
//! never affect catalog state.

use axum::{Form, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use pjy_core::Locale;

use crate::services::ContactMessage;
use crate::state::AppState;

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    pub message: String,
    #[serde(default)]
    pub lang: Option<String>,
}

/// Response for form submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Submit the contact form.
///
/// POST /contact
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> impl IntoResponse {
    let locale = form.lang.as_deref().map(Locale::parse).unwrap_or_default();
    let email = form.email.trim().to_lowercase();

    // Basic email validation
    if !is_valid_email(&email) {
        return (
            StatusCode::BAD_REQUEST,
            axum::Json(ContactResponse {
                success: false,
                message: Some(localized(
                    locale,
                    "Please enter a valid email address.",
                    "请输入有效的电子邮件地址。",
                )),
            }),
        );
    }

    // Validate required fields
    if form.name.trim().is_empty() || form.message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            axum::Json(ContactResponse {
                success: false,
                message: Some(localized(
                    locale,
                    "Name and message are required.",
                    "姓名和留言为必填项。",
                )),
            }),
        );
    }

    let Some(client) = state.email() else {
        tracing::error!("Email service not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(ContactResponse {
                success: false,
                message: Some(localized(
                    locale,
                    "Service temporarily unavailable.",
                    "服务暂时不可用。",
                )),
            }),
        );
    };

    let contact = ContactMessage {
        name: form.name.trim().to_string(),
        email,
        company: form
            .company
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(ToString::to_string),
        message: form.message.trim().to_string(),
    };

    match client.send_contact_message(&contact).await {
        Ok(()) => {
            tracing::info!(email = %contact.email, "Contact message sent");
            (
                StatusCode::OK,
                axum::Json(ContactResponse {
                    success: true,
                    message: Some(localized(
                        locale,
                        "Thank you for your message. We will contact you soon!",
                        "感谢您的留言。我们将尽快与您联系！",
                    )),
                }),
            )
        }
        Err(e) => {
            tracing::error!(email = %contact.email, error = %e, "Failed to send contact message");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(ContactResponse {
                    success: false,
                    message: Some(localized(
                        locale,
                        "Sorry, there was an error sending your message. Please try again later.",
                        "抱歉，发送您的消息时出错。请稍后再试。",
                    )),
                }),
            )
        }
    }
}

/// Pick the message for the requested locale.
fn localized(locale: Locale, en: &str, zh: &str) -> String {
    match locale {
        Locale::En => en.to_string(),
        Locale::Zh => zh.to_string(),
    }
}

/// Basic email validation.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}
