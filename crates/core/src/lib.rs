//! PJY Core - Shared types library.
//!
//! This crate provides common types used across all PJY site components:
//! - `site` - Public-facing catalog website and JSON API
//! - `cli` - Command-line tools for content QA and catalog inspection
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no CMS
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Locales, bilingual text pairs, category labels, and the
//!   canonical [`types::Product`] record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
