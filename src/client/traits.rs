//! Trait abstraction for the Planning Poker service client to enable mocking in tests

use super::{CancellationSignal, PlanningPokerError};
use crate::state::{Deck, ScrumTeam};
use async_trait::async_trait;

/// Remote operations of the Planning Poker service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanningPokerClientTrait: Send + Sync {
    /// Create a new team with the given scrum master and return its initial state
    async fn create_team(
        &self,
        team_name: &str,
        scrum_master_name: &str,
        deck: Deck,
        cancellation: CancellationSignal,
    ) -> Result<ScrumTeam, PlanningPokerError>;
}
