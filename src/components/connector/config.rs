//! Static presentation constants for connector rendering.

/// Highlight color for active, selected, or hovered lines.
pub const ACTIVE_COLOR: &str = "#1F8CEC";
/// Default line color when the record carries no explicit color.
pub const NORMAL_COLOR: &str = "#AAB7C4";

/// Height of the arrowhead triangle, in canvas pixels.
pub const TRIANGLE_WIDTH: f64 = 9.0;
/// Width of the invisible hit-target stroke. Wide so thin lines stay easy to
/// click regardless of visual state.
pub const TRIGGER_WIDTH: f64 = 14.0;
pub const STROKE_WIDTH: f64 = 2.0;
pub const STROKE_LARGE_WIDTH: f64 = 4.0;

/// CSS transition applied to color/width changes outside linking mode.
pub const TRANSITION: &str = "all 0.2s ease";

/// `data-type` marker the host's endpoint-drag handler reads off the
/// arrowhead element.
pub const EDIT_END: &str = "EDIT_END";
