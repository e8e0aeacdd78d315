/// Axis-aligned box in canvas coordinates, `(x0, y0)` top-left to `(x1, y1)`
/// bottom-right. Coordinates are fractional until rasterized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl BoundingBox {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Multiply every coordinate by `factor`
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            x0: self.x0 * factor,
            y0: self.y0 * factor,
            x1: self.x1 * factor,
            y1: self.y1 * factor,
        }
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    pub fn center(&self) -> (f32, f32) {
        ((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// Snap to whole pixels. Both corners are inclusive.
    pub fn to_pixels(&self) -> PixelBox {
        PixelBox {
            min_x: self.x0.round() as i32,
            min_y: self.y0.round() as i32,
            max_x: self.x1.round() as i32,
            max_y: self.y1.round() as i32,
        }
    }
}

/// Rasterized bounding box (inclusive on all sides)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl PixelBox {
    pub fn width(&self) -> u32 {
        (self.max_x - self.min_x + 1).max(1) as u32
    }

    pub fn height(&self) -> u32 {
        (self.max_y - self.min_y + 1).max(1) as u32
    }

    pub fn center(&self) -> (i32, i32) {
        ((self.min_x + self.max_x) / 2, (self.min_y + self.max_y) / 2)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// A filled primitive of the icon glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Ellipse inscribed in the box
    Ellipse(BoundingBox),
    /// Rectangle occupying the box
    Rectangle(BoundingBox),
}

impl Shape {
    pub fn bbox(&self) -> &BoundingBox {
        match self {
            Shape::Ellipse(bbox) | Shape::Rectangle(bbox) => bbox,
        }
    }

    pub fn scaled(&self, factor: f32) -> Self {
        match self {
            Shape::Ellipse(bbox) => Shape::Ellipse(bbox.scaled(factor)),
            Shape::Rectangle(bbox) => Shape::Rectangle(bbox.scaled(factor)),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Shape::Ellipse(_) => "ellipse",
            Shape::Rectangle(_) => "rectangle",
        }
    }
}

/// Dumbbell glyph on a unit canvas, in drawing order:
/// left plate, bar, right plate.
pub const DUMBBELL: [Shape; 3] = [
    Shape::Ellipse(BoundingBox::new(0.13, 0.38, 0.37, 0.62)),
    Shape::Rectangle(BoundingBox::new(0.35, 0.45, 0.65, 0.55)),
    Shape::Ellipse(BoundingBox::new(0.63, 0.38, 0.87, 0.62)),
];

/// The dumbbell glyph scaled to a `size`×`size` canvas
pub fn dumbbell(size: u32) -> [Shape; 3] {
    DUMBBELL.map(|shape| shape.scaled(size as f32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_box_keeps_proportions() {
        let bbox = BoundingBox::new(0.25, 0.5, 0.75, 1.0).scaled(200.0);
        assert_eq!(bbox, BoundingBox::new(50.0, 100.0, 150.0, 200.0));
        assert_eq!(bbox.center(), (100.0, 150.0));
        assert_eq!(bbox.width(), 100.0);
    }

    #[test]
    fn pixel_box_rounds_to_nearest() {
        let pixels = BoundingBox::new(67.2, 86.4, 124.8, 105.6).to_pixels();
        assert_eq!(pixels, PixelBox { min_x: 67, min_y: 86, max_x: 125, max_y: 106 });
        assert_eq!(pixels.width(), 59);
        assert_eq!(pixels.height(), 21);
        assert!(pixels.contains(67, 106));
        assert!(!pixels.contains(126, 90));
    }

    #[test]
    fn degenerate_pixel_box_is_one_pixel() {
        let pixels = BoundingBox::new(0.35, 0.1, 0.4, 0.2).to_pixels();
        assert_eq!(pixels.width(), 1);
        assert_eq!(pixels.height(), 1);
    }

    #[test]
    fn dumbbell_is_horizontally_symmetric() {
        let [left, bar, right] = dumbbell(100);
        assert!(matches!(left, Shape::Ellipse(_)));
        assert!(matches!(bar, Shape::Rectangle(_)));
        assert!((left.bbox().x0 + right.bbox().x1 - 100.0).abs() < 1e-3);
        assert!((bar.bbox().center().0 - 50.0).abs() < 1e-3);
    }
}
