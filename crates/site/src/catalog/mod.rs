//! Catalog normalization and retrieval.
//!
//! # Architecture
//!
//! - [`normalizer`] turns raw CMS entries into canonical
//!   [`pjy_core::Product`] records - pure transformation, no I/O
//! - [`images`] resolves slugs to local asset paths (the CMS does not hold
//!   the binary assets)
//! - [`repository`] fetches, normalizes, and memoizes the catalog via
//!   `moka` for the lifetime of the revalidation window

pub mod images;
pub mod normalizer;
pub mod repository;

pub use normalizer::normalize;
pub use repository::{ProductRepository, ProductSource};
