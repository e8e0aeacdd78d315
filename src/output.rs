use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::icon::IconGenerator;

/// Pixel sizes written by [`run`], in order
pub const ICON_SIZES: [u32; 2] = [192, 512];

/// `public/` next to the crate's `src/` directory
pub fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
}

/// Create `path` and any missing parents. Existing directories are fine.
pub fn ensure_output_directory(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("Failed to create output directory: {}", path.display()))
}

/// e.g. `icon-192x192.png`
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{}x{}.png", size, size)
}

/// Encode as PNG in memory
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .context("Failed to encode PNG")?;
    Ok(bytes)
}

/// Write `img` to `path` as PNG, replacing any existing file
pub fn save_png(img: &RgbImage, path: &Path) -> Result<()> {
    let bytes = encode_png(img)?;
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to save icon: {}", path.display()))
}

/// Generate every size in [`ICON_SIZES`] into `out_dir`.
///
/// Sizes are written one after another; the first failure aborts the run,
/// leaving files already written in place. Returns the written paths.
pub fn run(generator: &IconGenerator, out_dir: &Path) -> Result<Vec<PathBuf>> {
    if generator.verbose {
        println!("Output directory: {}", out_dir.display());
    }
    ensure_output_directory(out_dir)?;

    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let img = generator.generate(size)?;
        let icon_path = out_dir.join(icon_file_name(size));
        save_png(&img, &icon_path)?;
        println!("✅ Generated: {}", icon_path.display());
        written.push(icon_path);
    }

    println!("\n✨ PWA icons generated successfully!");

    Ok(written)
}
