//! Reusable UI components

mod busy_overlay;
mod button;
mod dialog;

pub use busy_overlay::render_busy_overlay;
pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::render_message_dialog;
