use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::warn;

use crate::application::RecipeService;
use crate::domain::{DomainError, RecipeRequest, RecipeResponse};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";
const ASK_PATH: &str = "/api/ask-bedrock";

/// HTTP client for the recipegen API, carrying the caller's session token.
///
/// Implements [`RecipeService`] so the CLI form handler stays decoupled from
/// transport details. Every call sends the token as a bearer credential; an
/// unauthenticated call is rejected by the server before the transform runs.
pub struct HttpRecipeClient {
    client: reqwest::Client,
    /// Full endpoint URL (base + ASK_PATH).
    url: String,
    token: String,
}

impl HttpRecipeClient {
    pub fn new(server_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base: String = server_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), ASK_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            url,
            token: token.into(),
        }
    }
}

#[async_trait]
impl RecipeService for HttpRecipeClient {
    async fn ask(&self, request: &RecipeRequest) -> Result<RecipeResponse, DomainError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                DomainError::model_request(format!("HttpRecipeClient: request failed: {e}"))
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(DomainError::unauthorized(format!(
                "server rejected the session token ({status})"
            )));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("HttpRecipeClient: server returned {status}: {body}");
            return Err(DomainError::model_request(format!(
                "HttpRecipeClient: server returned {status}"
            )));
        }

        response.json::<RecipeResponse>().await.map_err(|e| {
            DomainError::model_response(format!(
                "HttpRecipeClient: failed to parse response: {e}"
            ))
        })
    }
}
