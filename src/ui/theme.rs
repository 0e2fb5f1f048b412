//! Color theme constants for the newsdeck UI
//!
//! Dark palette with an emerald accent.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for the active view, current page and selection
pub const COLOR_ACCENT: Color = Color::Rgb(16, 185, 129); // emerald #10B981

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Body text
pub const COLOR_TEXT: Color = Color::Gray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

// ============================================================================
// Status Colors
// ============================================================================

/// Loading spinner
pub const COLOR_LOADING: Color = Color::Yellow;

/// Success confirmation
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Validation and fetch errors
pub const COLOR_ERROR: Color = Color::Red;

/// Delete marker on the selected card
pub const COLOR_DELETE: Color = Color::LightRed;

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for the feedback dialog
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
