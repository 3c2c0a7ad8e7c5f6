//! GitHub GraphQL client.

use std::time::Duration;

use async_trait::async_trait;
use chrono::SecondsFormat;

use super::error::{FetchError, FetchResult};
use super::graphql::{flatten_calendar, GraphQlRequest, GraphQlResponse, QueryVariables, CONTRIBUTIONS_QUERY};
use super::source::{ContributionSource, YearWindow};
use crate::config::GitHubSettings;
use crate::models::DayRecord;

pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

const USER_AGENT: &str = concat!("commit-sky/", env!("CARGO_PKG_VERSION"));

/// [`ContributionSource`] backed by the GitHub GraphQL API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl GitHubClient {
    /// Build a client from settings.
    ///
    /// # Errors
    /// [`FetchError::MissingToken`] when no token is configured.
    pub fn from_settings(settings: &GitHubSettings) -> FetchResult<Self> {
        let token = settings
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(FetchError::MissingToken)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: settings.graphql_url.clone(),
            token: token.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContributionSource for GitHubClient {
    async fn fetch_year(&self, username: &str, window: &YearWindow) -> FetchResult<Option<Vec<DayRecord>>> {
        let request = GraphQlRequest {
            query: CONTRIBUTIONS_QUERY,
            variables: QueryVariables {
                username,
                from: window.from.to_rfc3339_opts(SecondsFormat::Secs, true),
                to: window.to.to_rfc3339_opts(SecondsFormat::Secs, true),
            },
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<empty response>".to_string());

        if !status.is_success() {
            log::error!("GitHub API Error for year {}: {}", window.year, body.trim());
            return Err(FetchError::Http {
                status: status.as_u16(),
                year: window.year,
                body,
            });
        }

        let parsed: GraphQlResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::Decode(format!("{} ({})", e, body)))?;

        match parsed.into_calendar(window.year)? {
            Some(calendar) => Ok(Some(flatten_calendar(&calendar)?)),
            None => Ok(None),
        }
    }

    fn name(&self) -> &'static str {
        "github"
    }
}
