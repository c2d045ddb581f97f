//! Controllers orchestrating the UI services and the Planning Poker client

mod create_team;
mod planning_poker;

pub use create_team::{CreateTeamController, ERROR_TITLE};
pub use planning_poker::{PlanningPokerController, PlanningPokerInitializer};

#[cfg(test)]
pub use planning_poker::MockPlanningPokerInitializer;
