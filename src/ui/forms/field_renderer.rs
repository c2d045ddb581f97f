//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn field_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block(label: &str, is_active: bool) -> Block<'_> {
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(field_style(is_active))
}

/// Draw a text field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let value = field.as_text();
    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, field_style(is_active)),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    frame.render_widget(content.block(field_block(&field.label, is_active)), area);
}

/// Draw a field picking one value out of several with Left/Right
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
) {
    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Black)
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(value, field_style(is_active)),
        Span::styled(" ▶", arrow_style),
    ]));

    frame.render_widget(content.block(field_block(label, is_active)), area);
}
