//! Create team form rendering

use super::field_renderer::{draw_choice_field, draw_field};
use crate::app::App;
use crate::state::{CreateTeamButton, CreateTeamRow};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw create team form with action sidebar
pub fn draw_create_team(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.create_team_form;
    let row = form.active_row();

    let block = Block::default()
        .title(" Create team ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if row == CreateTeamRow::Buttons {
            Color::DarkGray
        } else {
            Color::Cyan
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Team name
            Constraint::Length(3), // Scrum master name
            Constraint::Length(3), // Deck
            Constraint::Length(3), // Help text
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    draw_field(frame, chunks[0], &form.team_name, row == CreateTeamRow::TeamName);
    draw_field(
        frame,
        chunks[1],
        &form.scrum_master_name,
        row == CreateTeamRow::ScrumMasterName,
    );

    let deck_label = app
        .estimation_decks()
        .get(&form.deck)
        .map(|values| format!("{}: {values}", form.deck))
        .unwrap_or_else(|| form.deck.to_string());
    draw_choice_field(
        frame,
        chunks[2],
        "Deck",
        &deck_label,
        row == CreateTeamRow::Deck,
    );

    let help = Paragraph::new(vec![
        Line::from(Span::styled(
            "You become the Scrum Master of the new team.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Other members join with the session path.",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(help, chunks[3]);
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.create_team_form;
    let is_focused = form.is_buttons_row_active();

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Create team (primary)
            Constraint::Length(BUTTON_HEIGHT), // Quit
            Constraint::Min(0),
        ])
        .split(inner_area);

    for (chunk, button, accent) in [
        (button_chunks[0], CreateTeamButton::Create, Color::Green),
        (button_chunks[1], CreateTeamButton::Quit, Color::Gray),
    ] {
        render_button(
            frame,
            chunk,
            button.label(),
            is_focused && form.selected_button == button,
            Some(accent),
        );
    }
}
