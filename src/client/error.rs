//! Errors reported by the Planning Poker service client

use thiserror::Error;

/// Error returned by [`PlanningPokerClientTrait`](super::PlanningPokerClientTrait) calls
#[derive(Debug, Error)]
pub enum PlanningPokerError {
    /// The service rejected the request; the message comes from the service
    #[error("{0}")]
    Service(String),

    /// The service could not be reached
    #[error("Connection to the Planning Poker service failed.\n{0}")]
    Connection(String),

    /// The service answered with something that is not a team
    #[error("Planning Poker service returned an invalid response.\n{0}")]
    InvalidResponse(String),

    /// The caller cancelled the request
    #[error("Operation was cancelled.")]
    Cancelled,
}

impl PlanningPokerError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_message_is_verbatim() {
        let err = PlanningPokerError::Service("Planning Poker Error\r\nArgumentException".into());
        assert_eq!(err.to_string(), "Planning Poker Error\r\nArgumentException");
    }

    #[test]
    fn test_connection_message_puts_detail_on_second_line() {
        let err = PlanningPokerError::Connection("tcp connect error".into());
        let message = err.to_string();
        let mut lines = message.split('\n');
        assert_eq!(
            lines.next(),
            Some("Connection to the Planning Poker service failed.")
        );
        assert_eq!(lines.next(), Some("tcp connect error"));
    }

    #[test]
    fn test_is_cancelled() {
        assert!(PlanningPokerError::Cancelled.is_cancelled());
        assert!(!PlanningPokerError::Service(String::new()).is_cancelled());
    }
}
