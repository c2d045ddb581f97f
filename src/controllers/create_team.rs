//! Controller behind the "Create Team" form

use super::PlanningPokerInitializer;
use crate::client::{CancellationSignal, PlanningPokerClientTrait};
use crate::services::{
    planning_poker_path, BusyIndicatorService, MessageBoxService, NavigationManager,
};
use crate::state::{estimation_decks, Deck};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Title of the message box used for failures
pub const ERROR_TITLE: &str = "Error";

/// Creates a team on the Planning Poker service and opens its session
pub struct CreateTeamController {
    client: Arc<dyn PlanningPokerClientTrait>,
    initializer: Arc<dyn PlanningPokerInitializer>,
    message_box: Arc<dyn MessageBoxService>,
    busy_indicator: Arc<dyn BusyIndicatorService>,
    navigation: Arc<dyn NavigationManager>,
}

impl CreateTeamController {
    pub fn new(
        client: Arc<dyn PlanningPokerClientTrait>,
        initializer: Arc<dyn PlanningPokerInitializer>,
        message_box: Arc<dyn MessageBoxService>,
        busy_indicator: Arc<dyn BusyIndicatorService>,
        navigation: Arc<dyn NavigationManager>,
    ) -> Self {
        Self {
            client,
            initializer,
            message_box,
            busy_indicator,
            navigation,
        }
    }

    /// Decks the user can choose from, with their card values as label
    pub fn estimation_decks(&self) -> &'static BTreeMap<Deck, String> {
        estimation_decks()
    }

    /// Create the team and navigate to its session.
    ///
    /// Returns `false` without doing anything when a name is empty. Failures
    /// of the service are shown in a message box and also yield `false`.
    pub async fn create_team(
        &self,
        team_name: &str,
        scrum_master_name: &str,
        deck: Deck,
        cancellation: CancellationSignal,
    ) -> bool {
        if team_name.is_empty() || scrum_master_name.is_empty() {
            return false;
        }

        tracing::info!("Creating team {team_name} with scrum master {scrum_master_name}");

        // Dropping the guard hides the indicator, also when this future is dropped mid-call
        let busy = self.busy_indicator.show();
        let result = self
            .client
            .create_team(team_name, scrum_master_name, deck, cancellation)
            .await;
        busy.release();

        match result {
            Ok(scrum_team) => {
                self.initializer.initialize_team(scrum_team, scrum_master_name);
                self.navigation
                    .navigate_to(&planning_poker_path(team_name, scrum_master_name));
                true
            }
            Err(err) if err.is_cancelled() => {
                tracing::info!("Creating team {team_name} was cancelled");
                false
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!("Creating team {team_name} failed: {message}");
                self.message_box.show_message(first_line(&message), ERROR_TITLE);
                false
            }
        }
    }
}

/// Text before the first line feed
fn first_line(message: &str) -> &str {
    message.split('\n').next().unwrap_or(message)
}
