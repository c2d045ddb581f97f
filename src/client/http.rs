//! HTTP client for communicating with the Planning Poker service
//!
//! The service exposes its operations as `GET {base}{Operation}?{query}`
//! endpoints returning JSON. A `400 Bad Request` carries the error message
//! of the service in its body.

use super::{CancellationSignal, PlanningPokerClientTrait, PlanningPokerError};
use crate::state::{Deck, ScrumTeam};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Client for communicating with the Planning Poker service
pub struct PlanningPokerClient {
    /// The HTTP client
    http: Client,
    /// Service base address, always ending with `/`
    base_url: Url,
}

impl PlanningPokerClient {
    /// Create a new client for the service at `address`
    pub fn new(address: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(address)
            .with_context(|| format!("Invalid Planning Poker service address: {address}"))?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn operation_url(&self, operation: &str) -> Result<Url, PlanningPokerError> {
        self.base_url
            .join(operation)
            .map_err(|e| PlanningPokerError::Connection(e.to_string()))
    }

    async fn send_create_team(
        &self,
        team_name: &str,
        scrum_master_name: &str,
        deck: Deck,
    ) -> Result<ScrumTeam, PlanningPokerError> {
        let url = self.operation_url("CreateTeam")?;
        tracing::debug!("GET {url} (team={team_name}, deck={deck})");

        let response = self
            .http
            .get(url)
            .query(&[
                ("teamName", team_name),
                ("scrumMasterName", scrum_master_name),
                ("deck", deck.as_query_value()),
            ])
            .send()
            .await
            .map_err(|e| PlanningPokerError::Connection(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PlanningPokerError::Connection(e.to_string()))?;

        if status.is_success() {
            return serde_json::from_str(&body)
                .map_err(|e| PlanningPokerError::InvalidResponse(e.to_string()));
        }

        Err(service_error(status, body))
    }
}

/// Turn a non-success response into the error shown to the user
fn service_error(status: StatusCode, body: String) -> PlanningPokerError {
    if status == StatusCode::BAD_REQUEST && !body.is_empty() {
        PlanningPokerError::Service(body)
    } else {
        PlanningPokerError::Service(format!(
            "Planning Poker service responded with {status}."
        ))
    }
}

#[async_trait]
impl PlanningPokerClientTrait for PlanningPokerClient {
    async fn create_team(
        &self,
        team_name: &str,
        scrum_master_name: &str,
        deck: Deck,
        mut cancellation: CancellationSignal,
    ) -> Result<ScrumTeam, PlanningPokerError> {
        if cancellation.is_cancelled() {
            return Err(PlanningPokerError::Cancelled);
        }

        tokio::select! {
            result = self.send_create_team(team_name, scrum_master_name, deck) => result,
            _ = cancellation.cancelled() => Err(PlanningPokerError::Cancelled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::CancellationSource;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TEAM_JSON: &str = r#"{
        "name": "Test team",
        "scrumMaster": { "type": "ScrumMaster", "name": "Test Scrum Master" },
        "members": [{ "type": "ScrumMaster", "name": "Test Scrum Master" }],
        "observers": [],
        "state": "Initial",
        "availableEstimations": [{ "value": 0 }, { "value": 0.5 }, { "value": 1 }]
    }"#;

    fn client_for(server: &MockServer) -> PlanningPokerClient {
        let address = format!("{}/api/PlanningPokerService/", server.uri());
        PlanningPokerClient::new(&address, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_address() {
        assert!(PlanningPokerClient::new("not a url", Duration::from_secs(1)).is_err());
    }

    #[tokio::test]
    async fn test_create_team_sends_query_and_parses_team() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/PlanningPokerService/CreateTeam"))
            .and(query_param("teamName", "Test team"))
            .and(query_param("scrumMasterName", "Test Scrum Master"))
            .and(query_param("deck", "Fibonacci"))
            .respond_with(ResponseTemplate::new(200).set_body_string(TEAM_JSON))
            .expect(1)
            .mount(&server)
            .await;

        let team = client_for(&server)
            .create_team(
                "Test team",
                "Test Scrum Master",
                Deck::Fibonacci,
                CancellationSignal::none(),
            )
            .await
            .unwrap();

        assert_eq!(team.name, "Test team");
        assert_eq!(team.available_estimations.len(), 3);
    }

    #[tokio::test]
    async fn test_bad_request_body_becomes_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/PlanningPokerService/CreateTeam"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_string("Team 'Test team' already exists.\r\nArgumentException"),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create_team("Test team", "Master", Deck::Standard, CancellationSignal::none())
            .await
            .unwrap_err();

        assert!(matches!(err, PlanningPokerError::Service(_)));
        assert_eq!(
            err.to_string(),
            "Team 'Test team' already exists.\r\nArgumentException"
        );
    }

    #[tokio::test]
    async fn test_server_error_names_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create_team("Team", "Master", Deck::Standard, CancellationSignal::none())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create_team("Team", "Master", Deck::Standard, CancellationSignal::none())
            .await
            .unwrap_err();

        assert!(matches!(err, PlanningPokerError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_connection_error() {
        // Port 9 (discard) is not expected to accept HTTP connections
        let client =
            PlanningPokerClient::new("http://127.0.0.1:9/api/", Duration::from_secs(2)).unwrap();

        let err = client
            .create_team("Team", "Master", Deck::Standard, CancellationSignal::none())
            .await
            .unwrap_err();

        assert!(matches!(err, PlanningPokerError::Connection(_)));
    }

    #[tokio::test]
    async fn test_cancelled_before_send_skips_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(TEAM_JSON))
            .expect(0)
            .mount(&server)
            .await;
        let source = CancellationSource::new();
        source.cancel();

        let err = client_for(&server)
            .create_team("Team", "Master", Deck::Standard, source.signal())
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancel_while_pending_returns_cancelled() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(TEAM_JSON)
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;
        let client = client_for(&server);
        let source = CancellationSource::new();
        let signal = source.signal();

        let call = client.create_team("Team", "Master", Deck::Standard, signal);
        let cancel = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            source.cancel();
        };
        let (result, ()) = tokio::join!(call, cancel);

        assert!(result.unwrap_err().is_cancelled());
    }
}
