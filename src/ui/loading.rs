//! Full-screen loading view.

use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use super::components::{render_status_indicator, StatusIndicatorType};
use super::helpers::centered_rect;
use crate::app::App;

/// Ticks per spinner frame (the event loop ticks about every 16ms)
const TICKS_PER_FRAME: u64 = 8;

pub const LOADING_MESSAGE: &str = "Loading news…";

pub fn render_loading(frame: &mut Frame, area: Rect, app: &App) {
    let spinner_frame = (app.tick_count / TICKS_PER_FRAME) as usize;
    let lines = render_status_indicator(&StatusIndicatorType::spinner(
        LOADING_MESSAGE,
        spinner_frame,
    ));
    let target = centered_rect(area, area.width, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines), target);
}
