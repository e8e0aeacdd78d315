use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

use crate::models::{BoundingBox, Shape};

/// Allocate a `size`×`size` RGB canvas filled with `color`
pub fn new_canvas(size: u32, color: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(size, size, color)
}

/// Fill the ellipse inscribed in `bbox`. Never touches a pixel outside
/// `bbox.to_pixels()`.
pub fn fill_ellipse(canvas: &mut RgbImage, bbox: &BoundingBox, color: Rgb<u8>) {
    let pixels = bbox.to_pixels();
    let width_radius = (pixels.max_x - pixels.min_x).max(0) / 2;
    let height_radius = (pixels.max_y - pixels.min_y).max(0) / 2;
    draw_filled_ellipse_mut(canvas, pixels.center(), width_radius, height_radius, color);
}

/// Fill every pixel covered by `bbox`, edges included
pub fn fill_rect(canvas: &mut RgbImage, bbox: &BoundingBox, color: Rgb<u8>) {
    let pixels = bbox.to_pixels();
    let rect = Rect::at(pixels.min_x, pixels.min_y).of_size(pixels.width(), pixels.height());
    draw_filled_rect_mut(canvas, rect, color);
}

pub fn fill_shape(canvas: &mut RgbImage, shape: &Shape, color: Rgb<u8>) {
    match shape {
        Shape::Ellipse(bbox) => fill_ellipse(canvas, bbox, color),
        Shape::Rectangle(bbox) => fill_rect(canvas, bbox, color),
    }
}
