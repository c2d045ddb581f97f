//! Busy indicator shown while a remote call is outstanding

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shows the busy indicator
#[cfg_attr(test, mockall::automock)]
pub trait BusyIndicatorService: Send + Sync {
    /// Show the indicator until the returned guard is released or dropped
    fn show(&self) -> BusyIndicator;
}

/// Guard returned by [`BusyIndicatorService::show`]
///
/// The release action runs exactly once: on [`BusyIndicator::release`] or,
/// failing that, when the guard is dropped.
#[must_use = "the busy indicator is hidden as soon as the guard is dropped"]
pub struct BusyIndicator {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl BusyIndicator {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Hide the indicator now
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for BusyIndicator {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for BusyIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BusyIndicator")
            .field("released", &self.release.is_none())
            .finish()
    }
}

/// Busy indicator rendered by the TUI as an overlay
///
/// Counts the guards currently alive; the overlay is drawn while the count
/// is non-zero.
#[derive(Debug, Clone, Default)]
pub struct TuiBusyIndicator {
    active: Arc<AtomicUsize>,
}

impl TuiBusyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.active_count() > 0
    }

    pub fn active_count(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

impl BusyIndicatorService for TuiBusyIndicator {
    fn show(&self) -> BusyIndicator {
        self.active.fetch_add(1, Ordering::SeqCst);
        let active = Arc::clone(&self.active);
        BusyIndicator::new(move || {
            active.fetch_sub(1, Ordering::SeqCst);
        })
    }
}
