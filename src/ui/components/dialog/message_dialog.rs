//! Message dialog component

use super::base::{render_dialog, DialogConfig};
use crate::controllers::ERROR_TITLE;
use crate::services::Message;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render a message box overlay centered on the screen
pub fn render_message_dialog(frame: &mut Frame, message: &Message) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    let color = if message.title == ERROR_TITLE {
        Color::Red
    } else {
        Color::Yellow
    };

    render_dialog(
        frame,
        DialogConfig {
            title: &message.title,
            title_color: color,
            border_color: color,
            message: &message.text,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
