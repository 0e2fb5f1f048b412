//! Feedback modal overlay.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::components::{
    calculate_input_field_height, render_dialog_frame, render_input_field,
    render_status_indicator, DialogFrameConfig, InputFieldConfig, StatusIndicatorType,
};
use super::helpers::pad_horizontal;
use super::layout::LayoutContext;
use super::theme::COLOR_DIM;
use crate::feedback::{FeedbackField, FeedbackForm};

pub const FEEDBACK_TITLE: &str = "Feedback";
pub const THANK_YOU: &str = "Thank you!";
pub const THANK_YOU_DETAILS: &str = "Your feedback has been submitted successfully.";

const HINT: &str = "Tab next field · Enter submit · Esc cancel";

/// Field pairs per row when the dialog is wide enough.
const FIELD_ROWS: [(FeedbackField, FeedbackField); 3] = [
    (FeedbackField::FirstName, FeedbackField::LastName),
    (FeedbackField::Email, FeedbackField::Phone),
    (FeedbackField::Address, FeedbackField::Country),
];

fn field_config<'a>(form: &'a FeedbackForm, field: FeedbackField) -> InputFieldConfig<'a> {
    InputFieldConfig::new(field.label(), form.value(field))
        .placeholder(field.placeholder())
        .focused(form.focus == field)
        .error(form.error(field))
}

/// Height of a row: the taller of its fields.
fn row_height(form: &FeedbackForm, fields: &[FeedbackField]) -> u16 {
    fields
        .iter()
        .map(|f| calculate_input_field_height(&field_config(form, *f)))
        .max()
        .unwrap_or(0)
}

fn form_rows(two_columns: bool) -> Vec<Vec<FeedbackField>> {
    if two_columns {
        FIELD_ROWS.iter().map(|(a, b)| vec![*a, *b]).collect()
    } else {
        FeedbackField::ALL.iter().map(|f| vec![*f]).collect()
    }
}

pub fn render_feedback_modal(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    form: &FeedbackForm,
) {
    if form.submitted {
        let lines = render_status_indicator(&StatusIndicatorType::success(
            THANK_YOU,
            Some(THANK_YOU_DETAILS.to_string()),
        ));
        let config = DialogFrameConfig::new(FEEDBACK_TITLE, lines.len() as u16 + 2);
        let inner = render_dialog_frame(frame, area, ctx, &config);
        let body = Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(1),
            ..inner
        };
        frame.render_widget(Paragraph::new(lines), body);
        return;
    }

    let two_columns = !ctx.is_narrow();
    let rows = form_rows(two_columns);
    let fields_height: u16 = rows.iter().map(|r| row_height(form, r)).sum();
    // blank line above the fields, hint below
    let content_height = fields_height + 2;

    let config = DialogFrameConfig::new(FEEDBACK_TITLE, content_height)
        .min_width(36)
        .max_width(80);
    let inner = render_dialog_frame(frame, area, ctx, &config);
    let inner = pad_horizontal(inner, 1);

    let mut y = inner.y + 1;
    let bottom = inner.y + inner.height.saturating_sub(1);
    for row in &rows {
        if y >= bottom {
            break;
        }
        let height = row_height(form, row).min(bottom - y);
        let columns = row.len() as u16;
        let col_width = inner.width / columns;
        for (i, field) in row.iter().enumerate() {
            let i = i as u16;
            let width = if i == columns - 1 {
                inner.width - i * col_width
            } else {
                col_width.saturating_sub(1)
            };
            let cell = Rect::new(inner.x + i * col_width, y, width, height);
            render_input_field(frame, cell, &field_config(form, *field));
        }
        y += height;
    }

    if inner.height > 0 {
        frame.render_widget(
            Paragraph::new(
                Line::from(Span::styled(HINT, Style::default().fg(COLOR_DIM))).centered(),
            ),
            Rect::new(inner.x, bottom, inner.width, 1),
        );
    }
}
