/// Visual and behavioral constants.

// --- Visual colors (hex) ---
pub const BG_COLOR: u32 = 0x0D1117;
pub const DIAMOND_FILL: u32 = 0x34C759;
pub const ORNAMENT_STROKE: u32 = 0x8E8E93;
pub const LABEL_BASE: u32 = 0x000000;
pub const LABEL_PULSE: u32 = 0x8E8E93;

// --- Ornament geometry ---
pub const LINE_SPACING: f64 = 25.0;
pub const CORNER_TOLERANCE: f64 = 4.0;
pub const TRIANGLE_SIZE: f64 = 20.0;
pub const ARROW_LENGTH_FACTOR: f64 = 1.5;

// --- Stroke widths ---
pub const BORDER_STROKE_WIDTH: f64 = 1.0;
pub const TRIANGLE_STROKE_WIDTH: f64 = 2.0;
pub const ARROW_STROKE_WIDTH: f64 = 1.0;

// --- Label ---
pub const LABEL_TEXT: &str = "Connect";
pub const LABEL_FONT_SIZE: f64 = 16.0;

// --- Animation ---
pub const TICK_INTERVAL_MS: f64 = 1000.0;
pub const COLOR_FADE_MS: f64 = 1000.0;
