//! Planning poker session view

use crate::app::App;
use crate::state::TeamMember;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the session of the team the user is in
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let controller = &app.planning_poker;
    let Some(team) = controller.scrum_team() else {
        let empty = Paragraph::new("Not in a team. Press Esc to create one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Session summary
            Constraint::Min(5),    // Participants
            Constraint::Length(4), // Cards
        ])
        .split(area);

    let label_style = Style::default().fg(Color::DarkGray);
    let session_path = controller.session_path().unwrap_or_default();
    let summary = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("You:     ", label_style),
            Span::styled(
                controller.user_name(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" ({})", controller.user_role().label())),
        ]),
        Line::from(vec![
            Span::styled("State:   ", label_style),
            Span::styled(team.state.label(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled("Session: ", label_style),
            Span::styled(session_path, Style::default().fg(Color::Blue)),
        ]),
    ])
    .block(
        Block::default()
            .title(format!(" {} ", team.name))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(summary, chunks[0]);

    let participant_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_members(
        frame,
        participant_chunks[0],
        " Members ",
        &controller.members(),
        &controller.user_name(),
    );
    draw_members(
        frame,
        participant_chunks[1],
        " Observers ",
        &controller.observers(),
        &controller.user_name(),
    );

    let cards: Vec<Span> = controller
        .estimation_labels()
        .into_iter()
        .flat_map(|label| {
            [
                Span::styled(format!("[{label}]"), Style::default().fg(Color::Green)),
                Span::raw(" "),
            ]
        })
        .collect();
    let cards = Paragraph::new(Line::from(cards))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Cards ").borders(Borders::ALL));
    frame.render_widget(cards, chunks[2]);
}

fn draw_members(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    members: &[TeamMember],
    user_name: &str,
) {
    let items: Vec<ListItem> = members
        .iter()
        .map(|member| {
            let style = if member.name == user_name {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(member.name.as_str(), style),
                Span::styled(
                    format!("  {}", member.member_type.label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(list, area);
}
