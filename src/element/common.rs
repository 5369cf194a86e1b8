// Slider bounds used by the property panel. The model itself never rejects values outside them.
pub const FONT_SIZE_MIN: u32 = 10;
pub const FONT_SIZE_MAX: u32 = 100;

pub const SHAPE_SIZE_MIN: u32 = 10;
pub const SHAPE_SIZE_MAX: u32 = 500;

/// Offset applied to both axes when an element is duplicated
pub const DUPLICATE_OFFSET: i32 = 20;

pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";

// Factory defaults
pub const TEXT_DEFAULT_CONTENT: &str = "New Text";
pub const TEXT_DEFAULT_POSITION: (i32, i32) = (100, 100);
pub const TEXT_DEFAULT_FONT_SIZE: u32 = 24;
pub const TEXT_DEFAULT_COLOR: &str = "#000000";

pub const SHAPE_DEFAULT_POSITION: (i32, i32) = (150, 150);
pub const SHAPE_DEFAULT_SIZE: u32 = 100;
pub const SHAPE_DEFAULT_COLOR: &str = "#4F46E5";
pub const SHAPE_DEFAULT_BORDER_COLOR: &str = "#000000";

/// Swatches offered for text, shape and background colours
pub const COLOR_PALETTE: [&str; 25] = [
    "#000000", "#FFFFFF", "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF",
    "#FFA500", "#800080", "#FFC0CB", "#A52A2A", "#808080", "#000080", "#008080", "#4F46E5",
    "#7C3AED", "#EC4899", "#F59E0B", "#10B981", "#EF4444", "#8B5CF6", "#06B6D4", "#84CC16",
    "#F97316",
];

/// Background gradients offered by the property panel
pub const GRADIENT_PALETTE: [&str; 6] = [
    "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
    "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
    "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
    "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
    "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)",
];
