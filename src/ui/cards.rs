//! Post rendering in grid and list layouts.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::components::{render_status_indicator, StatusIndicatorType};
use super::helpers::{centered_rect, clamp_lines, pad_horizontal, truncate_to_width};
use super::layout::LayoutContext;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DELETE, COLOR_DIM, COLOR_HEADER, COLOR_TEXT,
};
use crate::models::Post;

/// Publication caption shown on every card
pub const POST_DATE_CAPTION: &str = "Mon, 21 Dec 2020 14:57 GMT";

const TITLE_LINES: usize = 2;
const BODY_LINES: usize = 3;

/// Borders, title, body, date and link rows
pub const CARD_HEIGHT: u16 = 2 + TITLE_LINES as u16 + BODY_LINES as u16 + 2;

/// Rows per post in the list layout, separator included
pub const LIST_ROW_HEIGHT: u16 = 3;

/// Text of one grid card, wrapped to `width` cells.
pub fn card_lines(post: &Post, width: usize) -> Vec<Line<'static>> {
    let title_style = Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD);
    let body_style = Style::default().fg(COLOR_TEXT);
    let dim = Style::default().fg(COLOR_DIM);

    let mut lines = Vec::with_capacity(TITLE_LINES + BODY_LINES + 2);
    lines.extend(
        clamp_lines(&post.title, width, TITLE_LINES)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, title_style))),
    );
    lines.extend(
        clamp_lines(&post.body, width, BODY_LINES)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, body_style))),
    );
    lines.push(Line::from(Span::styled(POST_DATE_CAPTION, dim)));
    lines.push(Line::from(Span::styled(
        truncate_to_width(&post.thumbnail_url(), width),
        dim.add_modifier(Modifier::UNDERLINED),
    )));
    lines
}

fn card_block(post: &Post, selected: bool) -> Block<'static> {
    let border = if selected { COLOR_ACCENT } else { COLOR_BORDER };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" #{} ", post.id),
            Style::default().fg(COLOR_DIM),
        ));
    if selected {
        block = block.title_top(
            Line::from(Span::styled(" d ✕ ", Style::default().fg(COLOR_DELETE))).right_aligned(),
        );
    }
    block
}

/// Lay the page out as a grid of cards.
pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    posts: &[Post],
    selected: usize,
) {
    if posts.is_empty() || area.width == 0 || area.height == 0 {
        return;
    }

    let columns = ctx.grid_columns(area.width).max(1);
    let rows = posts.len().div_ceil(columns as usize) as u16;
    let row_height = CARD_HEIGHT.min((area.height / rows.max(1)).max(3));
    let col_width = area.width / columns;

    for (i, post) in posts.iter().enumerate() {
        let row = i as u16 / columns;
        let col = i as u16 % columns;
        let y = area.y + row * row_height;
        if y >= area.y + area.height {
            break;
        }
        let width = if col == columns - 1 {
            area.width - col * col_width
        } else {
            col_width
        };
        let height = row_height.min(area.y + area.height - y);
        let card_area = Rect::new(area.x + col * col_width, y, width, height);

        let block = card_block(post, i == selected);
        let inner = block.inner(card_area);
        frame.render_widget(block, card_area);

        let padded = pad_horizontal(inner, 1);
        frame.render_widget(
            Paragraph::new(card_lines(post, padded.width as usize)),
            padded,
        );
    }
}

/// Text of one list row: title and a single-line body excerpt.
pub fn list_row_lines(post: &Post, width: usize, selected: bool) -> Vec<Line<'static>> {
    let (marker, title_color) = if selected {
        ("▶ ", COLOR_ACCENT)
    } else {
        ("  ", COLOR_HEADER)
    };
    let text_width = width.saturating_sub(2);
    let excerpt = post.body.split_whitespace().collect::<Vec<_>>().join(" ");

    vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                truncate_to_width(&post.title, text_width),
                Style::default()
                    .fg(title_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                truncate_to_width(&excerpt, text_width),
                Style::default().fg(COLOR_TEXT),
            ),
        ]),
    ]
}

/// Lay the page out as a vertical list.
pub fn render_list(frame: &mut Frame, area: Rect, posts: &[Post], selected: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let mut lines = Vec::with_capacity(posts.len() * LIST_ROW_HEIGHT as usize);
    for (i, post) in posts.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(list_row_lines(post, width, i == selected));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Shown when there are no posts to display.
pub fn render_empty(frame: &mut Frame, area: Rect) {
    let lines = render_status_indicator(&StatusIndicatorType::notice(
        "No news to show",
        Some("Nothing was delivered, or every post was removed.".to_string()),
    ));
    let target = centered_rect(area, area.width, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines), target);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_card_height() {
        assert_eq!(CARD_HEIGHT, 9);
    }

    #[test]
    fn test_card_clamps_title_and_body() {
        let post = Post::new(
            7,
            "a very long title that needs more than two lines to fit",
            "one two three four five six seven eight nine ten eleven twelve",
        );
        let lines = text(&card_lines(&post, 14));
        // 2 title + 3 body + date + link
        assert_eq!(lines.len(), 7);
        assert!(lines[1].ends_with('…'));
        assert!(lines[4].ends_with('…'));
        assert_eq!(lines[5], POST_DATE_CAPTION);
        assert!(lines[6].starts_with("https://"));
    }

    #[test]
    fn test_card_short_text_uses_fewer_lines() {
        let post = Post::new(1, "short", "tiny");
        let lines = text(&card_lines(&post, 40));
        assert_eq!(lines[0], "short");
        assert_eq!(lines[1], "tiny");
        assert_eq!(lines[3], "https://picsum.photos/seed/post1/400/220");
    }

    #[test]
    fn test_list_row_marks_selection() {
        let post = Post::new(3, "Title", "line one\nline two");
        let selected = text(&list_row_lines(&post, 40, true));
        assert_eq!(selected[0], "▶ Title");
        assert_eq!(selected[1], "  line one line two");

        let plain = text(&list_row_lines(&post, 40, false));
        assert_eq!(plain[0], "  Title");
    }

    #[test]
    fn test_empty_state_is_not_an_error() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal.draw(|f| render_empty(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();

        let mut found = false;
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                let cell = &buffer[(x, y)];
                assert_ne!(cell.symbol(), "\u{2717}");
                assert_ne!(cell.fg, crate::ui::theme::COLOR_ERROR);
                found |= cell.symbol() == "\u{25CB}";
            }
        }
        assert!(found, "neutral glyph missing");
    }
}
