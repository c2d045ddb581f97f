//! Client module for the Planning Poker service

mod cancellation;
mod error;
mod http;
mod traits;

pub use cancellation::{CancellationSignal, CancellationSource};
pub use error::PlanningPokerError;
pub use http::PlanningPokerClient;
pub use traits::PlanningPokerClientTrait;

#[cfg(test)]
pub use traits::MockPlanningPokerClientTrait;
