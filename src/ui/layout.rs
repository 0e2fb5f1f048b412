//! Responsive sizing for the views.
//!
//! `LayoutContext` wraps the terminal dimensions and answers the sizing
//! questions the views ask: whether the sidebar fits, how many card columns
//! to use and how wide dialogs may be.

/// Size thresholds, in cells
pub mod breakpoints {
    pub const XS_WIDTH: u16 = 60;
    /// Below this the sidebar is hidden
    pub const SM_WIDTH: u16 = 80;

    pub const XS_HEIGHT: u16 = 16;
}

/// Width of the sidebar when shown
pub const SIDEBAR_WIDTH: u16 = 26;

/// Minimum content width per grid column
pub const MIN_CARD_WIDTH: u16 = 28;

/// Most grid columns ever used
pub const MAX_GRID_COLUMNS: u16 = 3;

/// Current terminal size and the layout decisions derived from it.
///
/// # Example
///
/// ```
/// use newsdeck::ui::LayoutContext;
///
/// let ctx = LayoutContext::new(120, 40);
/// assert!(ctx.show_sidebar());
/// assert_eq!(ctx.grid_columns(94), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// `percentage` of the width, clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 60 columns or 16 rows.
    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// The sidebar is dropped on narrow terminals to leave room for posts.
    pub fn show_sidebar(&self) -> bool {
        !self.is_narrow()
    }

    /// Number of card columns that fit into `content_width`.
    pub fn grid_columns(&self, content_width: u16) -> u16 {
        (content_width / MIN_CARD_WIDTH).clamp(1, MAX_GRID_COLUMNS)
    }
}
