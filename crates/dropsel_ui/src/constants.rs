//! Centralized constants for dropsel_ui
//!
//! All magic numbers and repeated constants are defined here for consistency
//! and easy maintenance.

// =============================================================================
// Placement
// =============================================================================

/// Assumed height of the floating option list, used both for the open-upward
/// decision and for the upward anchor offset.
///
/// Not measured from the rendered rows: lists taller or shorter than this
/// overlap or leave a gap when opened upward.
pub const ASSUMED_LIST_HEIGHT: f32 = 200.0;

// =============================================================================
// Dropdown
// =============================================================================

/// Header text when nothing is selected and no placeholder was configured
pub const DEFAULT_PLACEHOLDER: &str = "Select an option";

/// Default header width
pub const DROPDOWN_WIDTH: f32 = 160.0;

/// Header height
pub const DROPDOWN_HEADER_HEIGHT: f32 = 24.0;

/// Height of each option row in the floating panel
pub const DROPDOWN_OPTION_HEIGHT: f32 = 22.0;

/// Arrow shown in the header while closed
pub const ARROW_DOWN: &str = "▼";

/// Arrow shown in the header while open
pub const ARROW_UP: &str = "▲";
