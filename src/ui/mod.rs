//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod planning_poker;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match &app.state.current_view {
        View::CreateTeam => forms::draw_create_team(frame, main_area, app),
        View::PlanningPoker => planning_poker::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Overlays, message box on top
    if app.is_busy() {
        components::render_busy_overlay(frame, app.state.tick);
    }
    if let Some(message) = app.message_box.current() {
        components::render_message_dialog(frame, &message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockPlanningPokerClientTrait;
    use crate::config::TuiConfig;
    use crate::services::MessageBoxService;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::with_client(
            TuiConfig::default(),
            None,
            Arc::new(MockPlanningPokerClientTrait::new()),
        )
    }

    #[test]
    fn test_draw_create_team_form() {
        let text = screen_text(&app());
        assert!(text.contains("Team name"));
        assert!(text.contains("Scrum Master name"));
        assert!(text.contains("Standard: 0, 0.5, 1, 2, 3, 5, 8, 13, 20, 40, 100"));
        assert!(text.contains("Create team"));
    }

    #[test]
    fn test_draw_message_dialog() {
        let app = app();
        app.message_box.show_message("Team already exists", "Error");
        let text = screen_text(&app);
        assert!(text.contains("Team already exists"));
        assert!(text.contains("to dismiss"));
    }
}
