//! UI services the controllers talk to
//!
//! Each service is a trait with one TUI-backed implementation; the
//! application draws whatever state the implementations accumulate.

mod busy_indicator;
mod message_box;
mod navigation;

pub use busy_indicator::{BusyIndicatorService, TuiBusyIndicator};
pub use message_box::{Message, MessageBoxService, TuiMessageBox};
pub use navigation::{planning_poker_path, ChannelNavigator, NavigationManager, Route};

#[cfg(test)]
pub use busy_indicator::{BusyIndicator, MockBusyIndicatorService};
#[cfg(test)]
pub use message_box::MockMessageBoxService;
#[cfg(test)]
pub use navigation::MockNavigationManager;
