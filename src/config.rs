/// Configuration constants for the endurance efficiency visualizer

// ============================================================================
// INPUT RANGES & DEFAULTS
// ============================================================================

/// Lowest selectable endurance level
pub const ENDURANCE_LEVEL_MIN: u8 = 0;

/// Highest selectable endurance level
pub const ENDURANCE_LEVEL_MAX: u8 = 13;

/// Endurance level selected at startup
pub const DEFAULT_ENDURANCE_LEVEL: u8 = 8;

/// Lowest selectable control / complexity value
pub const ATTRIBUTE_MIN: u8 = 0;

/// Highest selectable control / complexity value
pub const ATTRIBUTE_MAX: u8 = 13;

pub const DEFAULT_CONTROL: u8 = 11;

pub const DEFAULT_COMPLEXITY: u8 = 0;

/// Lowest selectable stat level (output axis must start at 1)
pub const STAT_LEVEL_MIN: u8 = 1;

/// Highest selectable stat level
pub const STAT_LEVEL_MAX: u8 = 13;

pub const DEFAULT_STAT_LEVEL: u8 = 13;

// ============================================================================
// ENDURANCE POOL
// ============================================================================

/// Pool at endurance level 0
pub const MIN_ENDURANCE_POOL: f64 = 20.0;

/// Pool at the highest endurance level
pub const MAX_ENDURANCE_POOL: f64 = 520.0;

/// Number of points on the endurance scale (one per level, 0..=13)
pub const ENDURANCE_STEPS: usize = 14;

// ============================================================================
// OUTPUT SAMPLING
// ============================================================================

/// First value of the output-power axis
pub const MIN_OUTPUT: f64 = 1.0;

/// Number of evenly spaced output samples per curve
pub const OUTPUT_SAMPLE_COUNT: usize = 300;

/// Fraction of the stat level at which the burst marker sits
pub const BURST_THRESHOLD: f64 = 0.95;

/// Fraction of the stat level at which the fade marker sits
pub const FADE_THRESHOLD: f64 = 0.05;

// ============================================================================
// CHART
// ============================================================================

/// Fixed x-axis range, independent of the stat level
pub const X_AXIS_MIN: f64 = 0.0;
pub const X_AXIS_MAX: f64 = 13.0;

/// Headroom above the tallest point of the curve
pub const Y_HEADROOM: f64 = 1.1;

/// Smallest y-axis limit so small usage counts stay legible
pub const MIN_VISUAL_Y: f64 = 20.0;

/// Summary box anchor, x in plot units
pub const SUMMARY_BOX_X: f64 = 1.0;

/// Summary box anchor, as a fraction of the y-axis limit
pub const SUMMARY_BOX_Y_FRACTION: f64 = 0.85;

/// Stroke width of the uses curve
pub const CURVE_WIDTH: f32 = 2.0;

/// Radius of the burst / mid / fade markers
pub const MARKER_RADIUS: f32 = 5.0;

// ============================================================================
// WINDOW
// ============================================================================

pub const WINDOW_TITLE: &str = "Endurance Efficiency Visualizer";

pub const WINDOW_WIDTH: f32 = 1280.0;

pub const WINDOW_HEIGHT: f32 = 720.0;

/// Width of the slider side panel
pub const SIDE_PANEL_WIDTH: f32 = 260.0;
