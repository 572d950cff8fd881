//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CONTENTFUL_SPACE_ID` - Contentful space identifier
//! - `CONTENTFUL_ACCESS_TOKEN` - Content Delivery API access token
//! - `ADMIN_PREVIEW_TOKEN` - Token gating the admin content-QA pages (min 16 chars, high entropy)
//!
//! ## Optional
//! - `SITE_HOST` - Bind address (default: 127.0.0.1)
//! - `SITE_PORT` - Listen port (default: 3000)
//! - `SITE_BASE_URL` - Public URL for the site (default: http://localhost:3000)
//! - `CONTENTFUL_ENVIRONMENT` - Contentful environment (default: master)
//! - `CONTENTFUL_CONTENT_TYPE` - Product content-type id (default: product)
//! - `CATALOG_TTL_SECS` - Catalog cache revalidation window (default: 300)
//! - `EMAILJS_SERVICE_ID` / `EMAILJS_TEMPLATE_ID` / `EMAILJS_PUBLIC_KEY` -
//!   Transactional email service; the contact form is disabled when unset
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_ADMIN_TOKEN_LENGTH: usize = 16;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Contentful Content Delivery API configuration
    pub contentful: ContentfulConfig,
    /// Token gating the admin content-QA pages
    pub admin_preview_token: SecretString,
    /// Catalog cache revalidation window in seconds
    pub catalog_ttl_secs: u64,
    /// Transactional email configuration; contact form is disabled when unset
    pub email: Option<EmailConfig>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Contentful Content Delivery API configuration.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct ContentfulConfig {
    /// Contentful space identifier
    pub space_id: String,
    /// Contentful environment (e.g., master)
    pub environment: String,
    /// Content-type id for product entries
    pub content_type: String,
    /// Content Delivery API access token (server-side only)
    pub access_token: SecretString,
}

impl std::fmt::Debug for ContentfulConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentfulConfig")
            .field("space_id", &self.space_id)
            .field("environment", &self.environment)
            .field("content_type", &self.content_type)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// Transactional email service configuration (EmailJS-compatible).
#[derive(Clone)]
pub struct EmailConfig {
    /// Email service identifier
    pub service_id: String,
    /// Message template identifier
    pub template_id: String,
    /// API public key
    pub public_key: SecretString,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("public_key", &"[REDACTED]")
            .finish()
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if secrets fail validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SITE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SITE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("SITE_BASE_URL", "http://localhost:3000");
        url::Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("SITE_BASE_URL".to_string(), e.to_string())
        })?;
        let catalog_ttl_secs = get_env_or_default("CATALOG_TTL_SECS", "300")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CATALOG_TTL_SECS".to_string(), e.to_string())
            })?;

        let admin_preview_token = get_validated_secret("ADMIN_PREVIEW_TOKEN")?;
        validate_admin_token(&admin_preview_token, "ADMIN_PREVIEW_TOKEN")?;

        let contentful = ContentfulConfig::from_env()?;
        let email = EmailConfig::from_env();
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            base_url,
            contentful,
            admin_preview_token,
            catalog_ttl_secs,
            email,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl ContentfulConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            space_id: get_required_env("CONTENTFUL_SPACE_ID")?,
            environment: get_env_or_default("CONTENTFUL_ENVIRONMENT", "master"),
            content_type: get_env_or_default("CONTENTFUL_CONTENT_TYPE", "product"),
            access_token: get_required_secret("CONTENTFUL_ACCESS_TOKEN")?,
        })
    }
}

impl EmailConfig {
    /// All three variables must be present for the contact form to be wired
    /// up; a partial configuration is treated as absent and logged.
    fn from_env() -> Option<Self> {
        let service_id = get_optional_env("EMAILJS_SERVICE_ID");
        let template_id = get_optional_env("EMAILJS_TEMPLATE_ID");
        let public_key = get_optional_env("EMAILJS_PUBLIC_KEY");

        match (service_id, template_id, public_key) {
            (Some(service_id), Some(template_id), Some(public_key)) => Some(Self {
                service_id,
                template_id,
                public_key: SecretString::from(public_key),
            }),
            (None, None, None) => None,
            _ => {
                tracing::warn!(
                    "Partial EMAILJS_* configuration; contact form email is disabled"
                );
                None
            }
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that the admin token meets minimum length requirements.
fn validate_admin_token(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_ADMIN_TOKEN_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_ADMIN_TOKEN_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    // Check blocklist
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // Check entropy (real secrets like API keys have high entropy)
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use a randomly generated secret."
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_single_char() {
        // All same character = 0 entropy
        assert!((shannon_entropy("aaaaaaa") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_high() {
        // Random-looking string should have high entropy
        let entropy = shannon_entropy("aB3$xY9!mK2@nL5#");
        assert!(entropy > 3.3);
    }

    #[test]
    fn test_validate_secret_strength_placeholder() {
        let result = validate_secret_strength("your-admin-token-here", "TEST_VAR");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_secret_strength_low_entropy() {
        let result = validate_secret_strength("aaaaaaaaaaaaaaaaaaaaaaaaa", "TEST_VAR");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_secret_strength_valid() {
        // High-entropy random string
        let result = validate_secret_strength("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6", "TEST_VAR");
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_admin_token_too_short() {
        let secret = SecretString::from("short");
        let result = validate_admin_token(&secret, "TEST_TOKEN");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_admin_token_valid_length() {
        let secret = SecretString::from("k9Qx2mB7vN4pL8wZ");
        let result = validate_admin_token(&secret, "TEST_TOKEN");
        assert!(result.is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = SiteConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            contentful: ContentfulConfig {
                space_id: "space123".to_string(),
                environment: "master".to_string(),
                content_type: "product".to_string(),
                access_token: SecretString::from("token"),
            },
            admin_preview_token: SecretString::from("k9Qx2mB7vN4pL8wZ"),
            catalog_ttl_secs: 300,
            email: None,
            sentry_dsn: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_contentful_config_debug_redacts_token() {
        let config = ContentfulConfig {
            space_id: "space123".to_string(),
            environment: "master".to_string(),
            content_type: "product".to_string(),
            access_token: SecretString::from("super_secret_delivery_token"),
        };

        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("space123"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_delivery_token"));
    }
}
