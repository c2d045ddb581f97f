//! Form state management and form structs

use super::field::FormField;
use crate::state::Deck;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    /// Text field under the cursor, `None` on non-text rows
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Row of the create team form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateTeamRow {
    TeamName,
    ScrumMasterName,
    Deck,
    Buttons,
}

/// Button on the buttons row of the create team form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateTeamButton {
    #[default]
    Create,
    Quit,
}

impl CreateTeamButton {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Create => "Create team",
            Self::Quit => "Quit",
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Create => Self::Quit,
            Self::Quit => Self::Create,
        };
    }
}

// Create Team Form
#[derive(Debug, Clone)]
pub struct CreateTeamForm {
    pub team_name: FormField,
    pub scrum_master_name: FormField,
    pub deck: Deck,
    pub active_field_index: usize,
    pub selected_button: CreateTeamButton,
}

impl CreateTeamForm {
    pub fn new() -> Self {
        Self {
            team_name: FormField::text("team_name", "Team name"),
            scrum_master_name: FormField::text("scrum_master_name", "Scrum Master name"),
            deck: Deck::default(),
            active_field_index: 0,
            selected_button: CreateTeamButton::default(),
        }
    }

    /// Form prefilled from the last successful submission
    pub fn with_defaults(scrum_master_name: Option<&str>, deck: Option<Deck>) -> Self {
        let mut form = Self::new();
        if let Some(name) = scrum_master_name {
            form.scrum_master_name.value = name.to_string();
        }
        form.deck = deck.unwrap_or_default();
        form
    }

    pub fn active_row(&self) -> CreateTeamRow {
        match self.active_field_index {
            0 => CreateTeamRow::TeamName,
            1 => CreateTeamRow::ScrumMasterName,
            2 => CreateTeamRow::Deck,
            _ => CreateTeamRow::Buttons,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_row() == CreateTeamRow::Buttons
    }

    pub fn next_deck(&mut self) {
        self.deck = self.deck.next();
    }

    pub fn prev_deck(&mut self) {
        self.deck = self.deck.prev();
    }

    /// Both names are filled in
    pub fn is_complete(&self) -> bool {
        !self.team_name.is_empty() && !self.scrum_master_name.is_empty()
    }
}

impl Default for CreateTeamForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for CreateTeamForm {
    fn field_count(&self) -> usize {
        4 // team name, scrum master name, deck, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_row() {
            CreateTeamRow::TeamName => Some(&mut self.team_name),
            CreateTeamRow::ScrumMasterName => Some(&mut self.scrum_master_name),
            CreateTeamRow::Deck | CreateTeamRow::Buttons => None,
        }
    }
}
