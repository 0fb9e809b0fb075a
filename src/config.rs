use image::Rgba;

// Window settings
pub const WINDOW_TITLE: &str = "Recipe List";
pub const WINDOW_WIDTH: f32 = 420.0;
pub const WINDOW_HEIGHT: f32 = 720.0;

// Layout
pub const SCREEN_PADDING: f32 = 16.0;
pub const FIELD_SPACING: f32 = 8.0;
pub const SECTION_SPACING: f32 = 16.0;
pub const ROW_PADDING: f32 = 8.0;
pub const THUMBNAIL_SIZE: f32 = 64.0;

// Placeholder graphic
pub const PLACEHOLDER_SIZE: u32 = 64;
pub const PLACEHOLDER_BACKGROUND: Rgba<u8> = Rgba([70, 70, 70, 255]);
pub const PLACEHOLDER_FOREGROUND: Rgba<u8> = Rgba([200, 100, 100, 255]);

// Timings, seconds
pub const NOTICE_SECONDS: f64 = 2.0;
pub const FADE_SECONDS: f32 = 0.3;

// Text
pub const HEADING: &str = "Recipe List";
pub const NAME_HINT: &str = "Recipe Name";
pub const IMAGE_HINT: &str = "Image URL";
pub const ADD_BUTTON: &str = "Add Recipe";

pub const DEFAULT_LOG_FILTER: &str = "recipe_list=info";
