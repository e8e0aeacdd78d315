mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from pwa_icons for tests
pub use pwa_icons::{
    BACKGROUND, BoundingBox, FOREGROUND, ICON_SIZES, IconGenerator, MAX_ICON_SIZE, PixelBox, Shape,
    dumbbell,
};
