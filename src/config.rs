//! Configuration handling for the TUI

use crate::state::Deck;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the service address
pub const SERVICE_ADDRESS_ENV: &str = "PLANNING_POKER_SERVICE_ADDRESS";

/// Default Planning Poker service address
const DEFAULT_SERVICE_ADDRESS: &str = "http://localhost:5000/api/PlanningPokerService/";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Planning Poker service address
    pub service_address: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// Scrum master name of the last created team
    pub last_scrum_master_name: Option<String>,
    /// Deck of the last created team
    pub last_deck: Option<Deck>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "planning-poker-tui")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("planning-poker-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaults when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to `path`, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Service address: environment, then config file, then default. Always ends with `/`.
    pub fn service_address(&self) -> String {
        let env_address = std::env::var(SERVICE_ADDRESS_ENV).ok();
        self.resolve_service_address(env_address)
    }

    fn resolve_service_address(&self, env_address: Option<String>) -> String {
        let address = env_address
            .filter(|a| !a.trim().is_empty())
            .or_else(|| self.service_address.clone())
            .unwrap_or_else(|| DEFAULT_SERVICE_ADDRESS.to_string());

        let address = address.trim().to_string();
        if address.ends_with('/') {
            address
        } else {
            format!("{address}/")
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    /// Remember the choices of a successful team creation
    pub fn remember_team_creation(&mut self, scrum_master_name: &str, deck: Deck) {
        self.last_scrum_master_name = Some(scrum_master_name.to_string());
        self.last_deck = Some(deck);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.service_address.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert!(config.last_scrum_master_name.is_none());
        assert!(config.last_deck.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            service_address: Some("http://poker.example/api/".to_string()),
            request_timeout_secs: Some(10),
            last_scrum_master_name: Some("Master".to_string()),
            last_deck: Some(Deck::Fibonacci),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.service_address,
            Some("http://poker.example/api/".to_string())
        );
        assert_eq!(parsed.request_timeout_secs, Some(10));
        assert_eq!(parsed.last_scrum_master_name, Some("Master".to_string()));
        assert_eq!(parsed.last_deck, Some(Deck::Fibonacci));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.service_address.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"last_deck": "Standard", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.last_deck, Some(Deck::Standard));
    }

    #[test]
    fn test_service_address_default() {
        let config = TuiConfig::default();
        assert_eq!(
            config.resolve_service_address(None),
            "http://localhost:5000/api/PlanningPokerService/"
        );
    }

    #[test]
    fn test_service_address_from_config_gets_trailing_slash() {
        let config = TuiConfig {
            service_address: Some("http://poker.example/api".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_service_address(None),
            "http://poker.example/api/"
        );
    }

    #[test]
    fn test_service_address_env_wins() {
        let config = TuiConfig {
            service_address: Some("http://config.example/".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_service_address(Some("http://env.example/".to_string())),
            "http://env.example/"
        );
    }

    #[test]
    fn test_blank_env_address_is_ignored() {
        let config = TuiConfig {
            service_address: Some("http://config.example/".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_service_address(Some("  ".to_string())),
            "http://config.example/"
        );
    }

    #[test]
    fn test_request_timeout() {
        assert_eq!(TuiConfig::default().request_timeout(), Duration::from_secs(30));
        let config = TuiConfig {
            request_timeout_secs: Some(5),
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_remember_team_creation() {
        let mut config = TuiConfig::default();
        config.remember_team_creation("Master", Deck::Fibonacci);
        assert_eq!(config.last_scrum_master_name, Some("Master".to_string()));
        assert_eq!(config.last_deck, Some(Deck::Fibonacci));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = TuiConfig::default();
        config.remember_team_creation("Master", Deck::Standard);

        config.save_to(&path).unwrap();
        let loaded = TuiConfig::load_from(&path).unwrap();

        assert_eq!(loaded.last_scrum_master_name, Some("Master".to_string()));
        assert_eq!(loaded.last_deck, Some(Deck::Standard));
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = TuiConfig::load_from(&dir.path().join("missing.json")).unwrap();
        assert!(loaded.last_scrum_master_name.is_none());
    }

    #[test]
    fn test_load_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(TuiConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
        let _log = TuiConfig::log_path();
    }
}
