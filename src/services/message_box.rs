//! Message box used to present errors to the user

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// Presents a message to the user
#[cfg_attr(test, mockall::automock)]
pub trait MessageBoxService: Send + Sync {
    /// Show `message` in a message box titled `title`
    fn show_message(&self, message: &str, title: &str);
}

/// A message waiting to be dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub title: String,
}

/// Message box rendered by the TUI as a dialog
///
/// Messages queue up; the dialog shows the oldest one until it is dismissed.
#[derive(Debug, Clone, Default)]
pub struct TuiMessageBox {
    queue: Arc<Mutex<VecDeque<Message>>>,
}

impl TuiMessageBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// The message currently on screen
    pub fn current(&self) -> Option<Message> {
        self.queue.lock().front().cloned()
    }

    pub fn has_message(&self) -> bool {
        !self.queue.lock().is_empty()
    }

    /// Dismiss the message on screen, returning it
    pub fn dismiss(&self) -> Option<Message> {
        self.queue.lock().pop_front()
    }
}

impl MessageBoxService for TuiMessageBox {
    fn show_message(&self, message: &str, title: &str) {
        self.queue.lock().push_back(Message {
            text: message.to_string(),
            title: title.to_string(),
        });
    }
}
