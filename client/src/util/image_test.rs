use super::*;

#[test]
fn initial_src_keeps_product_image() {
    assert_eq!(initial_src("https://cdn.example/chair.jpg"), "https://cdn.example/chair.jpg");
}

#[test]
fn initial_src_uses_placeholder_for_missing_image() {
    assert_eq!(initial_src(""), PLACEHOLDER_IMAGE_URL);
    assert_eq!(initial_src("   "), PLACEHOLDER_IMAGE_URL);
}

#[test]
fn fallback_swaps_to_placeholder_once() {
    let first = fallback_src("https://cdn.example/broken.jpg");
    assert_eq!(first, Some(PLACEHOLDER_IMAGE_URL));
    assert_eq!(fallback_src(PLACEHOLDER_IMAGE_URL), None);
}
