//! State of the planning poker session the user is in

use crate::services::planning_poker_path;
use crate::state::{MemberType, ScrumTeam, TeamMember};
use parking_lot::Mutex;
use std::sync::Arc;

/// Seeds the session state from a freshly created or joined team
#[cfg_attr(test, mockall::automock)]
pub trait PlanningPokerInitializer: Send + Sync {
    fn initialize_team(&self, scrum_team: ScrumTeam, user_name: &str);
}

#[derive(Debug, Default)]
struct Session {
    scrum_team: Option<ScrumTeam>,
    user_name: String,
}

/// Session state shared between the controllers and the planning poker view
#[derive(Debug, Clone, Default)]
pub struct PlanningPokerController {
    session: Arc<Mutex<Session>>,
}

impl PlanningPokerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.session.lock().scrum_team.is_some()
    }

    /// Snapshot of the current team
    pub fn scrum_team(&self) -> Option<ScrumTeam> {
        self.session.lock().scrum_team.clone()
    }

    pub fn team_name(&self) -> Option<String> {
        self.session
            .lock()
            .scrum_team
            .as_ref()
            .map(|team| team.name.clone())
    }

    pub fn user_name(&self) -> String {
        self.session.lock().user_name.clone()
    }

    pub fn is_scrum_master(&self) -> bool {
        let session = self.session.lock();
        session
            .scrum_team
            .as_ref()
            .and_then(|team| team.scrum_master.as_ref())
            .is_some_and(|master| master.name == session.user_name)
    }

    /// Scrum master first, then the other members, without duplicates
    pub fn members(&self) -> Vec<TeamMember> {
        let session = self.session.lock();
        let Some(team) = session.scrum_team.as_ref() else {
            return Vec::new();
        };

        let mut members: Vec<TeamMember> = team.scrum_master.iter().cloned().collect();
        for member in &team.members {
            if !members.iter().any(|m| m.name == member.name) {
                members.push(member.clone());
            }
        }
        members
    }

    pub fn observers(&self) -> Vec<TeamMember> {
        self.session
            .lock()
            .scrum_team
            .as_ref()
            .map(|team| team.observers.clone())
            .unwrap_or_default()
    }

    /// Labels of the cards the team votes with
    pub fn estimation_labels(&self) -> Vec<String> {
        self.session
            .lock()
            .scrum_team
            .as_ref()
            .map(|team| {
                team.available_estimations
                    .iter()
                    .map(|estimation| estimation.label())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Path other participants use to open this session
    pub fn session_path(&self) -> Option<String> {
        let session = self.session.lock();
        session
            .scrum_team
            .as_ref()
            .map(|team| planning_poker_path(&team.name, &session.user_name))
    }

    /// Role of the current user in the team
    pub fn user_role(&self) -> MemberType {
        if self.is_scrum_master() {
            return MemberType::ScrumMaster;
        }
        let is_observer = self
            .observers()
            .iter()
            .any(|observer| observer.name == self.user_name());
        if is_observer {
            MemberType::Observer
        } else {
            MemberType::Member
        }
    }

    /// Leave the session
    pub fn reset(&self) {
        let mut session = self.session.lock();
        session.scrum_team = None;
        session.user_name.clear();
    }
}

impl PlanningPokerInitializer for PlanningPokerController {
    fn initialize_team(&self, scrum_team: ScrumTeam, user_name: &str) {
        tracing::info!("Joined team {} as {user_name}", scrum_team.name);
        let mut session = self.session.lock();
        session.scrum_team = Some(scrum_team);
        session.user_name = user_name.to_string();
    }
}
