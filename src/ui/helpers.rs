//! Helper functions for UI rendering
//!
//! Word wrapping and truncation measured in terminal cells, plus small
//! geometry utilities.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Ellipsis appended to clamped text
pub const ELLIPSIS: &str = "…";

/// Shrink `area` by `cells` on the left and right.
pub fn pad_horizontal(area: Rect, cells: u16) -> Rect {
    let cells = cells.min(area.width / 2);
    Rect {
        x: area.x + cells,
        width: area.width - cells * 2,
        ..area
    }
}

/// Center a `width` x `height` rect inside `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Cut `text` to at most `max_width` cells, ending in an ellipsis if cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - ELLIPSIS.width();
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}

/// Greedy word wrap to `width` cells.
///
/// Runs of whitespace (including newlines) collapse to one space. Words
/// longer than a line are broken mid-word.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width > width {
            for ch in word.chars() {
                let w = ch.width().unwrap_or(0);
                if current_width + w > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += w;
            }
            continue;
        }

        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap `text` and keep at most `max_lines`, marking the cut with an ellipsis.
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_words(text, width);
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let with_room = format!("{}{}", last, ELLIPSIS);
            *last = if with_room.width() <= width {
                with_room
            } else {
                // force the cut so the ellipsis is always visible
                let cut = truncate_to_width(last, width.saturating_sub(1));
                if cut.ends_with(ELLIPSIS) {
                    cut
                } else {
                    format!("{}{}", cut, ELLIPSIS)
                }
            };
        }
    }
    lines
}
