use image::RgbImage;
use pwa_icons::{IconGenerator, PixelBox, dumbbell};
use std::path::PathBuf;

/// Renders an icon with a quiet generator, panicking on failure.
pub fn render(size: u32) -> RgbImage {
    IconGenerator::new()
        .generate(size)
        .expect("Failed to generate icon")
}

/// Inclusive pixel boxes of the glyph's shapes at `size`
pub fn glyph_regions(size: u32) -> Vec<PixelBox> {
    dumbbell(size)
        .iter()
        .map(|shape| shape.bbox().to_pixels())
        .collect()
}

/// Creates a temp directory and returns it along with a not-yet-existing
/// `site/public` path inside it. Keep the `TempDir` alive for the test.
pub fn missing_public_dir() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let public = dir.path().join("site").join("public");
    (dir, public)
}
