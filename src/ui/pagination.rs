//! Navigation bar below the posts.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};
use crate::pagination::{page_controls, PageControl};

fn control_span(control: PageControl) -> Span<'static> {
    match control {
        PageControl::Previous { enabled } | PageControl::Next { enabled } => {
            let glyph = if matches!(control, PageControl::Previous { .. }) {
                "‹"
            } else {
                "›"
            };
            let style = if enabled {
                Style::default().fg(COLOR_HEADER)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            Span::styled(glyph, style)
        }
        PageControl::Page {
            number,
            current: true,
        } => Span::styled(
            format!("[{}]", number),
            Style::default()
                .fg(COLOR_HEADER)
                .bg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        PageControl::Page { number, .. } => {
            Span::styled(format!("[{}]", number), Style::default().fg(COLOR_TEXT))
        }
        PageControl::Ellipsis => Span::styled("…", Style::default().fg(COLOR_DIM)),
    }
}

/// Build the navigation bar line: `‹ [1] … [4] [5] [6] … [17] ›`.
pub fn build_pagination_line(current: usize, pages: usize) -> Line<'static> {
    let controls = page_controls(current, pages);
    let mut spans = Vec::with_capacity(controls.len() * 2);
    for (i, control) in controls.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(control_span(control));
    }
    Line::from(spans).centered()
}

pub fn render_pagination(frame: &mut Frame, area: Rect, current: usize, pages: usize) {
    frame.render_widget(
        Paragraph::new(build_pagination_line(current, pages)),
        area,
    );
}
