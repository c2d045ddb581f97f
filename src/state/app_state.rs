//! Application state definitions

use super::{CreateTeamButton, CreateTeamForm, Form};
use crate::services::Route;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    CreateTeam,
    PlanningPoker,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::CreateTeam => "Create team",
            Self::PlanningPoker => "Planning Poker",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub current_route: Option<Route>,

    // Form state
    pub create_team_form: CreateTeamForm,

    // UI state
    pub status_message: Option<String>,
    /// Frame counter driving the busy spinner
    pub tick: u64,
}

impl AppState {
    /// Switch to the view matching `route`
    pub fn apply_route(&mut self, route: Route) {
        self.current_view = match route {
            Route::Home => View::CreateTeam,
            Route::PlanningPoker { .. } => View::PlanningPoker,
        };
        self.current_route = Some(route);
        self.status_message = None;
    }

    /// Return to an empty create team form, keeping the scrum master name and deck
    pub fn reset_create_team_form(&mut self) {
        let form = &mut self.create_team_form;
        form.team_name.clear();
        form.set_active_field(0);
        form.selected_button = CreateTeamButton::default();
    }

    pub fn advance_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}
