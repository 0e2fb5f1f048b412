//! Labelled single-line text box for the feedback form.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::helpers::truncate_to_width;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

/// What one field shows
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    /// Shown in red under the box
    pub error: Option<&'a str>,
    /// Shown dimmed while the value is empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            error: None,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

const LABEL_ROWS: u16 = 1;
const BOX_ROWS: u16 = 3;
const CURSOR: &str = "\u{2588}";

/// Rows needed: label, bordered box and, with an error, one more.
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    LABEL_ROWS + BOX_ROWS + u16::from(config.error.is_some())
}

/// Text inside the box: the value, or the dimmed placeholder when empty, with
/// a block cursor when focused.
fn content_spans(config: &InputFieldConfig, budget: usize) -> Vec<Span<'static>> {
    let cursor = Span::styled(CURSOR, Style::default().fg(COLOR_ACCENT));

    match config.placeholder {
        Some(placeholder) if config.value.is_empty() => {
            let hint = Span::styled(
                truncate_to_width(placeholder, budget),
                Style::default().fg(COLOR_DIM),
            );
            if config.focused {
                vec![cursor, hint]
            } else {
                vec![hint]
            }
        }
        _ if config.focused => vec![
            Span::styled(
                truncate_tail(config.value, budget),
                Style::default().fg(Color::White),
            ),
            cursor,
        ],
        _ => vec![Span::styled(
            truncate_to_width(config.value, budget),
            Style::default().fg(Color::White),
        )],
    }
}

/// Draw label, box and error line top-down in `area`; rows that do not fit
/// are skipped. Returns the rows used.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    if area.height == 0 {
        return 0;
    }

    let label_color = if config.focused {
        COLOR_ACCENT
    } else {
        Color::Gray
    };
    frame.render_widget(
        Paragraph::new(Span::styled(config.label, Style::default().fg(label_color))),
        Rect { height: LABEL_ROWS, ..area },
    );

    let box_rows = (area.height - LABEL_ROWS).min(BOX_ROWS);
    let border_color = match (config.error.is_some(), config.focused) {
        (true, _) => COLOR_ERROR,
        (false, true) => COLOR_ACCENT,
        (false, false) => COLOR_BORDER,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));
    let budget = area.width.saturating_sub(3) as usize;
    frame.render_widget(
        Paragraph::new(Line::from(content_spans(config, budget))).block(block),
        Rect::new(area.x, area.y + LABEL_ROWS, area.width, box_rows),
    );

    let mut used = LABEL_ROWS + box_rows;
    if let Some(error) = config.error.filter(|_| used < area.height) {
        let line = Line::from(vec![
            Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
            Span::styled(error.to_string(), Style::default().fg(COLOR_ERROR)),
        ]);
        frame.render_widget(
            Paragraph::new(line),
            Rect::new(area.x, area.y + used, area.width, 1),
        );
        used += 1;
    }
    used
}

/// Keep the end of `text` visible while typing past the box width.
fn truncate_tail(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_string();
    }
    text.chars().skip(count - max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_input_field_config_builder() {
        let config = InputFieldConfig::new("Email", "a@b.com")
            .focused(true)
            .error(Some("A valid email is required"))
            .placeholder("example@sample.com");

        assert!(config.focused);
        assert_eq!(config.error, Some("A valid email is required"));
        assert_eq!(config.placeholder, Some("example@sample.com"));
    }

    #[test]
    fn test_calculate_height() {
        let config = InputFieldConfig::new("Label", "Value");
        assert_eq!(calculate_input_field_height(&config), 4);
        let config = config.error(Some("Error"));
        assert_eq!(calculate_input_field_height(&config), 5);
    }

    #[test]
    fn test_truncate_tail_keeps_end() {
        assert_eq!(truncate_tail("abcdef", 3), "def");
        assert_eq!(truncate_tail("ab", 3), "ab");
    }

    #[test]
    fn test_renders_placeholder_and_error() {
        let mut terminal = Terminal::new(TestBackend::new(30, 5)).unwrap();
        terminal
            .draw(|f| {
                let config = InputFieldConfig::new("First Name", "")
                    .placeholder("John")
                    .error(Some("First name is required"));
                let used = render_input_field(f, f.area(), &config);
                assert_eq!(used, 5);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("First Name"));
        assert!(text.contains("John"));
        assert!(text.contains("First name is required"));
    }
}
