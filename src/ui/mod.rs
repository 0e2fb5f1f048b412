//! UI rendering for newsdeck
//!
//! - Loading screen with a spinner until the load gate resolves
//! - Sidebar with the greeting, view toggle and feedback entry
//! - Posts as grid cards or list rows, with the navigation bar below
//! - Feedback modal overlay
//!
//! Rendering is a pure function of [`App`]; nothing here mutates state.
//! Sizing decisions go through [`LayoutContext`].

pub mod cards;
pub mod components;
mod feedback;
pub mod helpers;
mod layout;
mod loading;
mod pagination;
mod sidebar;
mod theme;

pub use cards::{CARD_HEIGHT, POST_DATE_CAPTION};
pub use feedback::{FEEDBACK_TITLE, THANK_YOU, THANK_YOU_DETAILS};
pub use layout::{breakpoints, LayoutContext, SIDEBAR_WIDTH};
pub use loading::LOADING_MESSAGE;
pub use pagination::build_pagination_line;
pub use sidebar::sidebar_lines;
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::input::{key_hints, InputContext};
use crate::models::ViewMode;
use theme::{COLOR_HEADER, COLOR_TEXT};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen for the current app state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    if app.load_gate.is_loading() {
        loading::render_loading(frame, area, app);
        return;
    }

    let main_area = if ctx.show_sidebar() {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(area);
        sidebar::render_sidebar(frame, chunks[0], app.store.view_mode());
        chunks[1]
    } else {
        area
    };

    render_main(frame, main_area, &ctx, app);

    if let Some(form) = &app.feedback {
        feedback::render_feedback_modal(frame, area, &ctx, form);
    }
}

fn render_main(frame: &mut Frame, area: Rect, ctx: &LayoutContext, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(header_line(app)), chunks[0]);

    let posts = app.visible_posts();
    if posts.is_empty() {
        cards::render_empty(frame, chunks[1]);
    } else {
        match app.store.view_mode() {
            ViewMode::Grid => cards::render_grid(frame, chunks[1], ctx, posts, app.selected),
            ViewMode::List => cards::render_list(frame, chunks[1], posts, app.selected),
        }
    }

    pagination::render_pagination(frame, chunks[2], app.current_page, app.page_count());
    frame.render_widget(Paragraph::new(footer_line(app)), chunks[3]);
}

/// Title plus page position, post count and view mode.
pub fn header_line(app: &App) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            " Latest News",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  Page {} of {} · {} posts · {}",
                app.current_page,
                app.page_count(),
                app.store.total(),
                app.store.view_mode().label()
            ),
            Style::default().fg(COLOR_DIM),
        ),
    ])
}

/// Status message if one is set, otherwise key hints for the current context.
pub fn footer_line(app: &App) -> Line<'static> {
    if let Some(status) = &app.status_message {
        return Line::from(Span::styled(
            format!(" {}", status),
            Style::default().fg(COLOR_TEXT),
        ));
    }

    let context = InputContext::from_app(app);
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in key_hints(context.modal).iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}
