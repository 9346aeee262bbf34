//! API client for the game catalog backend.
//!
//! Handles all HTTP communication with the RAWG-compatible catalog API.

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::api::models::{GameDetail, GameListResponse, GameSummary};
use crate::config::Config;

/// API errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("No API key configured. Set GAME_SHELF_API_KEY or add one to the config file.")]
    MissingKey,
}

/// Client for the catalog API.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: String,
    page_size: u32,
}

impl ApiClient {
    /// Create a client from the effective configuration.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let api_key = config.api.effective_key();
        if api_key.trim().is_empty() {
            return Err(ApiError::MissingKey);
        }

        Ok(Self::with_settings(
            config.api.effective_base_url(),
            api_key,
            config.api.timeout_seconds,
            config.api.page_size,
        ))
    }

    fn with_settings(
        base_url: String,
        api_key: String,
        timeout_seconds: u64,
        page_size: u32,
    ) -> Self {
        let timeout = Duration::from_secs(timeout_seconds.max(1));
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        ApiClient {
            client,
            base_url: normalize_base_url(&base_url),
            api_key,
            page_size: page_size.clamp(1, 40),
        }
    }

    /// Fetch one page of games, optionally filtered by a search term.
    ///
    /// A missing `results` field deserializes as an empty list; HTTP and
    /// parse failures surface as errors for the caller to swallow or show.
    pub async fn list_games(&self, query: &str) -> Result<Vec<GameSummary>, ApiError> {
        let url = format!("{}/games", self.base_url);
        let mut request = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(&[("page_size", self.page_size)]);

        let query = query.trim();
        if !query.is_empty() {
            request = request.query(&[("search", query)]);
        }

        debug!(query, "fetching game list");
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string()),
            });
        }

        let page: GameListResponse = response.json().await?;
        Ok(page.results)
    }

    /// Fetch full details for one game. Non-success status is a hard failure.
    pub async fn game_details(&self, id: u64) -> Result<GameDetail, ApiError> {
        let url = format!("{}/games/{id}", self.base_url);
        debug!(id, "fetching game details");
        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: format!("Failed to fetch game details (HTTP {})", status.as_u16()),
            });
        }

        Ok(response.json().await?)
    }
}

fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return crate::config::default_api_url();
    }
    trimmed.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://api.rawg.io/api/"),
            "https://api.rawg.io/api"
        );
        assert_eq!(normalize_base_url(""), crate::config::default_api_url());
    }

    #[test]
    fn test_client_rejects_missing_key() {
        let mut config = Config::default();
        config.api.api_key = String::new();
        // An ambient env key would mask the empty config value.
        if std::env::var("GAME_SHELF_API_KEY").is_err() {
            assert!(matches!(ApiClient::new(&config), Err(ApiError::MissingKey)));
        }
    }

    #[test]
    fn test_page_size_clamped() {
        let client =
            ApiClient::with_settings("https://api.example.com".into(), "k".into(), 30, 500);
        assert_eq!(client.page_size, 40);
        assert_eq!(client.base_url, "https://api.example.com");
    }
}
