//! Spinner shown while a request is pending

use super::dialog::centered_rect;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER[(tick % SPINNER.len() as u64) as usize]
}

/// Render the busy overlay; `tick` advances the spinner
pub fn render_busy_overlay(frame: &mut Frame, tick: u64) {
    let area = centered_rect(frame.area(), 34, 5);
    frame.render_widget(Clear, area);

    let content = vec![
        Line::from(vec![
            Span::styled(spinner_frame(tick), Style::default().fg(Color::Cyan)),
            Span::styled(
                " Creating team...",
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Esc to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let overlay = Paragraph::new(content)
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(overlay, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_frame_wraps() {
        assert_eq!(spinner_frame(0), "⠋");
        assert_eq!(spinner_frame(10), "⠋");
        assert_eq!(spinner_frame(u64::MAX), SPINNER[(u64::MAX % 10) as usize]);
    }
}
