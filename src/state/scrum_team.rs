//! Team snapshot returned by the Planning Poker service

use serde::{Deserialize, Serialize};

/// Role of a participant in a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MemberType {
    ScrumMaster,
    #[default]
    Member,
    Observer,
}

impl MemberType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ScrumMaster => "Scrum Master",
            Self::Member => "Member",
            Self::Observer => "Observer",
        }
    }
}

/// A participant of a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(rename = "type", default)]
    pub member_type: MemberType,
    pub name: String,
}

/// Phase of the estimation session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TeamState {
    #[default]
    Initial,
    EstimationInProgress,
    EstimationFinished,
    EstimationCanceled,
}

impl TeamState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Initial => "Waiting for estimation",
            Self::EstimationInProgress => "Estimation in progress",
            Self::EstimationFinished => "Estimation finished",
            Self::EstimationCanceled => "Estimation canceled",
        }
    }
}

/// An estimation card. A missing value is the "?" card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimation {
    #[serde(default)]
    pub value: Option<f64>,
}

impl Estimation {
    pub fn label(&self) -> String {
        match self.value {
            Some(value) if value.is_infinite() => "∞".to_string(),
            Some(value) => value.to_string(),
            None => "?".to_string(),
        }
    }
}

/// Initial state of a newly created team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrumTeam {
    pub name: String,
    #[serde(default)]
    pub scrum_master: Option<TeamMember>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub observers: Vec<TeamMember>,
    #[serde(default)]
    pub state: TeamState,
    #[serde(default)]
    pub available_estimations: Vec<Estimation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_service_json() {
        let json = r#"{
            "name": "Test team",
            "scrumMaster": { "type": "ScrumMaster", "name": "Test Scrum Master" },
            "members": [{ "type": "ScrumMaster", "name": "Test Scrum Master" }],
            "observers": [],
            "state": "Initial",
            "availableEstimations": [{ "value": 0.5 }, { "value": null }]
        }"#;

        let team: ScrumTeam = serde_json::from_str(json).unwrap();

        assert_eq!(team.name, "Test team");
        assert_eq!(
            team.scrum_master,
            Some(TeamMember {
                member_type: MemberType::ScrumMaster,
                name: "Test Scrum Master".to_string(),
            })
        );
        assert_eq!(team.members.len(), 1);
        assert!(team.observers.is_empty());
        assert_eq!(team.state, TeamState::Initial);
        assert_eq!(team.available_estimations.len(), 2);
    }

    #[test]
    fn test_deserialize_minimal_json() {
        let team: ScrumTeam = serde_json::from_str(r#"{"name": "Team"}"#).unwrap();
        assert_eq!(team.name, "Team");
        assert!(team.scrum_master.is_none());
        assert_eq!(team.state, TeamState::Initial);
    }

    #[test]
    fn test_estimation_labels() {
        assert_eq!(Estimation { value: Some(0.5) }.label(), "0.5");
        assert_eq!(Estimation { value: Some(13.0) }.label(), "13");
        assert_eq!(Estimation { value: None }.label(), "?");
        assert_eq!(
            Estimation {
                value: Some(f64::INFINITY)
            }
            .label(),
            "∞"
        );
    }
}
