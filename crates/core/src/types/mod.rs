//! Core types for the PJY catalog.
//!
//! This module provides the canonical, fully-normalized representations of
//! catalog content. Raw CMS entries never leave the site crate's Contentful
//! boundary; everything downstream works with these types.

pub mod category;
pub mod locale;
pub mod product;
pub mod text;

pub use category::{CATEGORY_EQUIVALENTS, bilingual_equivalent, labels_equivalent};
pub use locale::Locale;
pub use product::{GalleryImage, Product};
pub use text::{BilingualList, BilingualText};
