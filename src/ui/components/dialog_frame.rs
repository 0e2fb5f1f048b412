//! Bordered popup box sized to the terminal, used by the feedback modal.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::helpers::centered_rect;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIALOG_BG, COLOR_HEADER};

/// Title, interior height and width bounds of a dialog
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    pub title: &'a str,
    /// Rows inside the border
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 60,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

/// Width for the dialog: nearly full width when extra small, 90% when
/// narrow, 60% otherwise, bounded by the config and the area.
fn calculate_dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig, area_width: u16) -> u16 {
    let width = match (ctx.is_extra_small(), ctx.is_narrow()) {
        (true, _) => area_width.saturating_sub(4).min(config.max_width),
        (false, true) => ctx.bounded_width(90, config.min_width, config.max_width),
        (false, false) => ctx.bounded_width(60, config.min_width, config.max_width),
    };
    width.min(area_width)
}

fn dialog_block(title: &str) -> Block<'static> {
    let title = Span::styled(
        format!(" {} ", title),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    );
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT))
        .style(Style::default().bg(COLOR_DIALOG_BG))
        .title(title)
}

/// Clear a centered box over `area`, draw the frame and return its interior.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
) -> Rect {
    let dialog_area = centered_rect(
        area,
        calculate_dialog_width(ctx, config, area.width),
        config.content_height.saturating_add(2),
    );

    let block = dialog_block(config.title);
    let inner = block.inner(dialog_area);
    frame.render_widget(Clear, dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}
