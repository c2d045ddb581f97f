//! Navigation between views by path

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tokio::sync::mpsc;

/// First path segment of the planning poker session view
const PLANNING_POKER_ROUTE: &str = "PlanningPoker";

/// Everything except the RFC 3986 unreserved characters
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Navigates the application to a path
#[cfg_attr(test, mockall::automock)]
pub trait NavigationManager: Send + Sync {
    fn navigate_to(&self, path: &str);
}

/// Path of the session view of `team_name` as seen by `member_name`
///
/// Both names are percent-encoded, leaving only unreserved characters
/// as they are: a space becomes `%20`, a `/` becomes `%2F`.
pub fn planning_poker_path(team_name: &str, member_name: &str) -> String {
    format!(
        "{PLANNING_POKER_ROUTE}/{}/{}",
        utf8_percent_encode(team_name, SEGMENT),
        utf8_percent_encode(member_name, SEGMENT)
    )
}

/// A view the application can navigate to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The create team form
    Home,
    /// Session view; segments are kept percent-encoded
    PlanningPoker {
        team_segment: String,
        member_segment: String,
    },
}

impl Route {
    /// Parse a navigation path, `None` when no view matches
    ///
    /// Segments are taken literally, `.` and `..` are names, not directions.
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Some(Self::Home),
            [route, team, member] if route.eq_ignore_ascii_case(PLANNING_POKER_ROUTE) => {
                Some(Self::PlanningPoker {
                    team_segment: team.to_string(),
                    member_segment: member.to_string(),
                })
            }
            _ => None,
        }
    }
}

/// Navigator that hands paths to the application loop over a channel
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelNavigator {
    /// Create a navigator and the receiver the application drains
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl NavigationManager for ChannelNavigator {
    fn navigate_to(&self, path: &str) {
        if self.sender.send(path.to_string()).is_err() {
            tracing::warn!("Navigation to {path} dropped, application loop has stopped");
        }
    }
}
