//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `create_team_form`: Create team form

mod create_team_form;
mod field_renderer;

pub use create_team_form::draw_create_team;
