//! Slug-to-local-image resolution.
//!
//! Product photography lives on disk under `/images/products`, not in the
//! CMS, so every product image resolves locally: an explicit slug mapping
//! first, then a conventional path derived from the slug, then the
//! placeholder. The resolved path is never a remote reference.

use pjy_core::GalleryImage;

/// Fallback image shown when nothing else resolves.
pub const PLACEHOLDER_IMAGE: &str = "/images/products/placeholder-product.jpg";

/// Explicit slug -> local image mappings.
///
/// Product families share photography, so many slugs map onto the same
/// asset. Slugs absent from this table fall through to the conventional
/// `/images/products/<slug>.jpg` path.
const PRODUCT_IMAGE_MAP: &[(&str, &str)] = &[
    // Embedded touch displays
    (
        "10-1-inch-embedded-capacitive-touch-display-screen",
        "/images/products/10.1ecapacity.jpg",
    ),
    (
        "15-inch-embedded-capacitive-touch-display-screen",
        "/images/products/10.1ecapacity.jpg",
    ),
    (
        "15-6-inch-embedded-capacitive-touch-display-screen",
        "/images/products/10.1ecapacity.jpg",
    ),
    (
        "17-3-inch-embedded-capacitive-touch-display-screen",
        "/images/products/10.1ecapacity.jpg",
    ),
    (
        "19-inch-embedded-capacitive-touch-display-screen",
        "/images/products/10.1ecapacity.jpg",
    ),
    (
        "21-5-inch-embedded-capacitive-touch-display-screen",
        "/images/products/10.1ecapacity.jpg",
    ),
    (
        "27-inch-embedded-capacitive-touch-display-screen",
        "/images/products/10.1ecapacity.jpg",
    ),
    (
        "32-inch-embedded-capacitive-touch-display-screen",
        "/images/products/10.1ecapacity.jpg",
    ),
    (
        "43-inch-embedded-capacitive-touch-display-screen",
        "/images/products/10.1ecapacity.jpg",
    ),
    // Open frame touch displays
    (
        "10-1-inch-open-frame-capacitive-touch-display-screen",
        "/images/products/10.1ecapacity.jpg",
    ),
    (
        "15-6-inch-open-frame-capacitive-touch-display-screen",
        "/images/products/10.1ecapacity.jpg",
    ),
    (
        "21-5-inch-open-frame-capacitive-touch-display-screen",
        "/images/products/10.1ecapacity.jpg",
    ),
    // Touch all-in-one machines
    (
        "32-inch-all-in-one-touch-screen-machine",
        "/images/products/all-in-one.jpg",
    ),
    (
        "43-inch-all-in-one-touch-screen-machine",
        "/images/products/all-in-one.jpg",
    ),
    (
        "55-inch-all-in-one-touch-screen-machine",
        "/images/products/all-in-one.jpg",
    ),
    (
        "65-inch-all-in-one-touch-screen-machine",
        "/images/products/all-in-one.jpg",
    ),
    // Advertising machines
    (
        "32-inch-advertising-all-in-one-machine",
        "/images/products/all-in-one.jpg",
    ),
    (
        "55-inch-advertising-all-in-one-machine",
        "/images/products/all-in-one.jpg",
    ),
    // Outdoor display cabinets
    (
        "55-inch-semi-outdoor-display-cabinet-unit",
        "/images/products/outdoor-display.png",
    ),
    (
        "65-inch-semi-outdoor-display-cabinet-unit",
        "/images/products/outdoor-display.png",
    ),
    (
        "75-inch-semi-outdoor-display-cabinet-unit",
        "/images/products/outdoor-display.png",
    ),
    // Line screens
    (
        "21-5-inch-single-sided-line-screen-advertising-machine",
        "/images/products/line-screen.png",
    ),
    (
        "24-inch-double-sided-line-screen-advertising-machine",
        "/images/products/line-screen.png",
    ),
    (
        "43-inch-suspended-double-sided-poster-screen",
        "/images/products/suspended-poster-screen.png",
    ),
    // Infrared all-in-one machines
    (
        "55-inch-infrared-liquid-crystal-all-in-one-machine",
        "/images/products/infrared-liquid-crystal.png",
    ),
    (
        "65-inch-infrared-liquid-crystal-all-in-one-machine",
        "/images/products/infrared-liquid-crystal.png",
    ),
    (
        "75-inch-infrared-liquid-crystal-all-in-one-machine",
        "/images/products/infrared-liquid-crystal.png",
    ),
    (
        "86-inch-infrared-liquid-crystal-all-in-one-machine",
        "/images/products/infrared-liquid-crystal.png",
    ),
    (
        "98-inch-infrared-liquid-crystal-all-in-one-machine",
        "/images/products/infrared-liquid-crystal.png",
    ),
    // Cameras
    (
        "3-5-inch-sound-and-light-warning-spherical-camera",
        "/images/products/3.5camera.jpg",
    ),
    (
        "low-power-consumption-wifi-4g-solar-powered-camera",
        "/images/products/solar-camera.png",
    ),
    (
        "1080p-high-definition-infrared-riot-control-camera",
        "/images/products/infrared-camera.png",
    ),
];

/// Explicit slug -> gallery mappings. Empty today; products fall back to a
/// single-image gallery built from the main image.
const GALLERY_IMAGE_MAP: &[(&str, &[&str])] = &[];

/// Resolve the local image path for a product slug.
#[must_use]
pub fn product_image(slug: &str) -> String {
    if slug.is_empty() {
        return PLACEHOLDER_IMAGE.to_string();
    }

    for (mapped_slug, path) in PRODUCT_IMAGE_MAP {
        if *mapped_slug == slug {
            return (*path).to_string();
        }
    }

    // No mapping - use the conventional naming pattern so newly-added
    // photography matches automatically.
    format!("/images/products/{slug}.jpg")
}

/// Resolve the gallery for a product slug.
///
/// An explicit gallery mapping wins; otherwise the main image becomes a
/// single-entry gallery, unless only the placeholder resolved (an empty
/// gallery reads better than a gallery of placeholders).
#[must_use]
pub fn product_gallery(slug: &str, title: &str) -> Vec<GalleryImage> {
    if slug.is_empty() {
        return Vec::new();
    }

    let display_title = if title.is_empty() { "Product" } else { title };

    for (mapped_slug, paths) in GALLERY_IMAGE_MAP {
        if *mapped_slug == slug {
            return paths
                .iter()
                .enumerate()
                .map(|(index, path)| GalleryImage {
                    url: (*path).to_string(),
                    alt: format!("{display_title} view {}", index + 1),
                })
                .collect();
        }
    }

    let main_image = product_image(slug);
    if main_image == PLACEHOLDER_IMAGE {
        return Vec::new();
    }

    vec![GalleryImage {
        url: main_image,
        alt: format!("{display_title} main view"),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_slug_resolves_from_table() {
        assert_eq!(
            product_image("3-5-inch-sound-and-light-warning-spherical-camera"),
            "/images/products/3.5camera.jpg"
        );
    }

    #[test]
    fn unmapped_slug_uses_conventional_path() {
        assert_eq!(
            product_image("7-inch-resistive-touchscreen"),
            "/images/products/7-inch-resistive-touchscreen.jpg"
        );
    }

    #[test]
    fn empty_slug_gets_placeholder() {
        assert_eq!(product_image(""), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn gallery_wraps_main_image() {
        let gallery = product_gallery("55-inch-all-in-one-touch-screen-machine", "55\" Kiosk");
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery[0].url, "/images/products/all-in-one.jpg");
        assert_eq!(gallery[0].alt, "55\" Kiosk main view");
    }

    #[test]
    fn gallery_is_empty_for_empty_slug() {
        assert!(product_gallery("", "Anything").is_empty());
    }

    #[test]
    fn gallery_alt_defaults_when_title_missing() {
        let gallery = product_gallery("55-inch-all-in-one-touch-screen-machine", "");
        assert_eq!(gallery[0].alt, "Product main view");
    }
}
