//! Form domain layer
//!
//! Type-safe form handling for the create team view.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{CreateTeamButton, CreateTeamForm, CreateTeamRow, Form};
