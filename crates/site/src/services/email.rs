//! Transactional email client for the contact form.
//!
//! Talks to an EmailJS-compatible REST endpoint. Dispatch is best-effort:
//! a failure is surfaced to the visitor as a status message and never
//! touches catalog state.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use thiserror::Error;

use crate::config::EmailConfig;

/// Email service endpoint.
const SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Errors that can occur when dispatching email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// A contact-form submission to forward to the sales inbox.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

/// Template parameters in the shape the email template expects.
#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    company: &'a str,
    message: &'a str,
    reply_to: &'a str,
}

/// Request body for the send endpoint.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Transactional email client.
#[derive(Clone)]
pub struct EmailClient {
    client: reqwest::Client,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailClient {
    /// Create a new email client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &EmailConfig) -> Result<Self, EmailError> {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.expose_secret().to_string(),
        })
    }

    /// Send a contact-form message.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or returns a non-success
    /// status.
    pub async fn send_contact_message(&self, contact: &ContactMessage) -> Result<(), EmailError> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams {
                name: &contact.name,
                email: &contact.email,
                company: contact.company.as_deref().unwrap_or("Not specified"),
                message: &contact.message,
                reply_to: &contact.email,
            },
        };

        let response = self.client.post(SEND_URL).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmailError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
