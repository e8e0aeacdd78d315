pub mod icon;
pub mod models;
pub mod output;

pub use icon::{BACKGROUND, FOREGROUND, IconGenerator, MAX_ICON_SIZE};
pub use models::{BoundingBox, DUMBBELL, PixelBox, Shape, dumbbell};
pub use output::{
    ICON_SIZES, default_output_dir, encode_png, ensure_output_directory, icon_file_name, run,
    save_png,
};
