//! Product image source selection.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// Shown when a product has no image or its image fails to load.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/400x400/1e293b/94a3b8?text=Image+Not+Found";

/// Source to render first. Products without an image go straight to the placeholder.
#[must_use]
pub fn initial_src(image_url: &str) -> String {
    if image_url.trim().is_empty() {
        PLACEHOLDER_IMAGE_URL.to_owned()
    } else {
        image_url.to_owned()
    }
}

/// Source to switch to after `current` failed to load.
///
/// Returns `None` once the placeholder itself is showing, so a failing
/// placeholder never retriggers.
#[must_use]
pub fn fallback_src(current: &str) -> Option<&'static str> {
    (current != PLACEHOLDER_IMAGE_URL).then_some(PLACEHOLDER_IMAGE_URL)
}
