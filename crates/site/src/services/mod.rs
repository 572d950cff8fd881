//! External service clients.

pub mod email;

pub use email::{ContactMessage, EmailClient, EmailError};
