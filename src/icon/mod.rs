pub mod canvas;

use anyhow::{Result, bail};
use image::{Rgb, RgbImage};

use crate::models::dumbbell;

/// Icon background, `#2563EB`
pub const BACKGROUND: Rgb<u8> = Rgb([37, 99, 235]);

/// Glyph color
pub const FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Largest side length `generate` accepts
pub const MAX_ICON_SIZE: u32 = 16384;

/// Renders the dumbbell icon at a given pixel size
pub struct IconGenerator {
    pub verbose: bool,
}

impl IconGenerator {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Draw the icon onto a fresh `size`×`size` canvas.
    ///
    /// The three shapes are disjoint apart from where the bar meets the
    /// plates, and all of them are white, so drawing order has no effect
    /// on the result.
    pub fn generate(&self, size: u32) -> Result<RgbImage> {
        if size == 0 {
            bail!("icon size must be positive");
        }
        let side = size as usize;
        let buffer_len = side.checked_mul(side).and_then(|n| n.checked_mul(3));
        if size > MAX_ICON_SIZE || buffer_len.is_none() {
            bail!("icon size {} exceeds the maximum of {}", size, MAX_ICON_SIZE);
        }

        if self.verbose {
            println!("Rendering {}x{} icon...", size, size);
        }

        let mut img = canvas::new_canvas(size, BACKGROUND);

        for shape in dumbbell(size).iter() {
            if self.verbose {
                let px = shape.bbox().to_pixels();
                println!(
                    "  {} at ({}, {})-({}, {})",
                    shape.name(),
                    px.min_x,
                    px.min_y,
                    px.max_x,
                    px.max_y
                );
            }
            canvas::fill_shape(&mut img, shape, FOREGROUND);
        }

        Ok(img)
    }
}

impl Default for IconGenerator {
    fn default() -> Self {
        Self::new()
    }
}
