//! Application state module

mod app_state;
mod deck;
mod forms;
mod scrum_team;

pub use app_state::*;
pub use deck::*;
pub use forms::*;
pub use scrum_team::*;
