use crate::app_config::AppConfig;
use crate::core::models::Event;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid GitHub username: {0:?}")]
    InvalidUsername(String),

    #[error("Error fetching data: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Error reading response: {0}")]
    Body(reqwest::Error),

    #[error("GitHub API returned status {}", .0.as_u16())]
    Status(StatusCode),

    #[error("Error parsing JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of a user's public activity feed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn fetch_events(&self, username: &str) -> Result<Vec<Event>, FetchError>;
}

/// GitHub user names are ASCII alphanumerics and hyphens, at most 39
/// characters, never starting with a hyphen.
pub fn validate_username(username: &str) -> Result<(), FetchError> {
    let valid = !username.is_empty()
        && username.len() <= 39
        && !username.starts_with('-')
        && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(FetchError::InvalidUsername(username.to_string()))
    }
}

pub struct GithubClient {
    client: Client,
    events_url: String,
}

impl GithubClient {
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        // GitHub rejects requests without a User-Agent
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            events_url: config.github_events_url.clone(),
        })
    }

    pub fn events_url(&self, username: &str) -> String {
        self.events_url.replace("{username}", username)
    }
}

#[async_trait]
impl EventSource for GithubClient {
    async fn fetch_events(&self, username: &str) -> Result<Vec<Event>, FetchError> {
        validate_username(username)?;
        let url = self.events_url(username);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await.map_err(FetchError::Body)?;
        let events: Vec<Event> = serde_json::from_str(&body)?;
        info!("Fetched {} events for {}", events.len(), username);
        Ok(events)
    }
}
