//! Centered one- or three-line notices: the loading spinner, the feedback
//! confirmation and the empty-page message.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_DIM, COLOR_LOADING, COLOR_SUCCESS, COLOR_TEXT};

const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    /// Success indicator with an optional second line
    Success {
        message: String,
        details: Option<String>,
    },
    /// Dimmed neutral notice with optional details
    Notice {
        message: String,
        details: Option<String>,
    },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn success(message: impl Into<String>, details: Option<String>) -> Self {
        Self::Success {
            message: message.into(),
            details,
        }
    }

    pub fn notice(message: impl Into<String>, details: Option<String>) -> Self {
        Self::Notice {
            message: message.into(),
            details,
        }
    }
}

/// Spinner glyph for animation step `frame`.
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

fn headline(glyph: String, text: &str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(glyph, Style::default().fg(color)),
        Span::styled(
            text.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Headline plus, when present, a blank line and a dimmed detail line. All
/// lines are centered.
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Vec<Line<'static>> {
    let (first, details) = match indicator {
        StatusIndicatorType::Spinner { message, frame } => (
            headline(format!("{} ", get_spinner_char(*frame)), message, COLOR_LOADING),
            None,
        ),
        StatusIndicatorType::Success { message, details } => (
            headline("\u{25CF} ".to_string(), message, COLOR_SUCCESS),
            details.as_deref(),
        ),
        StatusIndicatorType::Notice { message, details } => (
            headline("\u{25CB} ".to_string(), message, COLOR_TEXT),
            details.as_deref(),
        ),
    };

    let mut lines = vec![first.centered()];
    if let Some(detail) = details {
        lines.push(Line::default());
        lines.push(Line::styled(detail.to_string(), Style::default().fg(COLOR_DIM)).centered());
    }
    lines
}
