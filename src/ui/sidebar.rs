//! Sidebar: greeting, view toggle and the feedback entry.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};
use crate::models::ViewMode;

fn toggle_button(label: &'static str, active: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .fg(COLOR_HEADER)
            .bg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_TEXT)
    };
    Span::styled(format!(" {} ", label), style)
}

/// Sidebar text for the given view mode.
pub fn sidebar_lines(view_mode: ViewMode) -> Vec<Line<'static>> {
    let bold = Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(COLOR_DIM);

    vec![
        Line::from(Span::styled("Hi Reader,", bold)),
        Line::from(vec![
            Span::styled("Here's your ", Style::default().fg(COLOR_TEXT)),
            Span::styled(
                "News!",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("View Toggle", bold)),
        Line::from(vec![
            toggle_button("List", view_mode == ViewMode::List),
            Span::raw(" "),
            toggle_button("Grid", view_mode == ViewMode::Grid),
        ]),
        Line::from(Span::styled("press v to switch", dim)),
        Line::from(""),
        Line::from(Span::styled("Have Feedback?", bold)),
        Line::from(Span::styled(
            " We're Listening! ",
            Style::default().fg(COLOR_HEADER).bg(COLOR_ACCENT),
        )),
        Line::from(Span::styled("press f to write", dim)),
    ]
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, view_mode: ViewMode) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let padded = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    frame.render_widget(Paragraph::new(sidebar_lines(view_mode)), padded);
}
