use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::application::ModelInvoker;
use crate::domain::DomainError;

/// Default target: the Bedrock runtime endpoint in us-east-1.
pub const DEFAULT_BASE_URL: &str = "https://bedrock-runtime.us-east-1.amazonaws.com";
pub const DEFAULT_MODEL: &str = "anthropic.claude-3-sonnet-20240229-v1:0";
const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
const MAX_TOKENS: u32 = 1000;

/// Invoke-model request envelope for Anthropic models hosted on Bedrock.
#[derive(Serialize)]
struct InvokeRequest<'a> {
    anthropic_version: &'static str,
    max_tokens: u32,
    messages: Vec<InvokeMessage<'a>>,
}

#[derive(Serialize)]
struct InvokeMessage<'a> {
    role: &'a str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Serialize)]
struct ContentPart<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    text: &'a str,
}

/// Minimal subset of the invoke-model response we care about.
#[derive(Deserialize)]
struct InvokeResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: String,
}

/// Resource path invoking one specific model; nothing else is addressable.
fn invoke_path(model: &str) -> String {
    format!("/model/{model}/invoke")
}

/// Wrap the instruction in the conversational template the model expects.
fn wrap_prompt(prompt: &str) -> String {
    format!("\n\nHuman: {prompt}\n\nAssistant:")
}

fn invoke_body(text: &str) -> InvokeRequest<'_> {
    InvokeRequest {
        anthropic_version: ANTHROPIC_VERSION,
        max_tokens: MAX_TOKENS,
        messages: vec![InvokeMessage {
            role: "user",
            content: vec![ContentPart { kind: "text", text }],
        }],
    }
}

/// Decode a raw invoke-model response body into the first content block's text.
///
/// Malformed JSON, a missing content field, or an empty content sequence each
/// fail with a named [`DomainError::ModelResponse`] rather than producing a
/// truncated or empty value.
fn parse_invoke_response(body: &str) -> Result<String, DomainError> {
    let response: InvokeResponse = serde_json::from_str(body)
        .map_err(|e| DomainError::model_response(format!("malformed response body: {e}")))?;

    response
        .content
        .into_iter()
        .next()
        .map(|block| block.text)
        .ok_or_else(|| DomainError::model_response("response content sequence is empty"))
}

/// Explicitly constructed client configuration, passed in rather than read
/// from a process-wide singleton.
///
/// **Base URL**: defaults to the us-east-1 Bedrock runtime. Override to
/// target any Bedrock-compatible server, e.g. a local gateway or a mock.
///
/// **API key**: optional bearer credential for Bedrock-compatible gateways.
/// Against the real AWS endpoint, request signing is the platform's concern
/// and happens outside this client.
#[derive(Debug, Clone)]
pub struct BedrockConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl BedrockConfig {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Construct from environment variables with cloud defaults:
    ///
    /// | Variable           | Default                      | Purpose                  |
    /// |--------------------|------------------------------|--------------------------|
    /// | `BEDROCK_BASE_URL` | us-east-1 runtime endpoint   | Bedrock-compatible server|
    /// | `BEDROCK_MODEL`    | Claude 3 Sonnet identifier   | The one invocable model  |
    /// | `BEDROCK_API_KEY`  | unset                        | Gateway bearer credential|
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("BEDROCK_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("BEDROCK_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let mut config = Self::new(base_url, model);
        if let Ok(key) = std::env::var("BEDROCK_API_KEY") {
            config = config.with_api_key(key);
        }
        config
    }
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_MODEL)
    }
}

/// HTTP client for the Bedrock invoke-model API.
///
/// Implements [`ModelInvoker`] so higher-level components (e.g.
/// [`crate::application::GenerateRecipeUseCase`]) stay decoupled from
/// transport and serialization details. The client addresses exactly the one
/// model named in its configuration.
pub struct BedrockClient {
    client: reqwest::Client,
    /// Full endpoint URL (base + invoke path for the configured model).
    url: String,
    api_key: Option<String>,
}

impl BedrockClient {
    pub fn new(config: BedrockConfig) -> Self {
        let url = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            invoke_path(&config.model)
        );
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            url,
            api_key: config.api_key,
        }
    }
}

#[async_trait]
impl ModelInvoker for BedrockClient {
    async fn invoke(&self, prompt: &str) -> Result<String, DomainError> {
        let wrapped = wrap_prompt(prompt);
        let body = invoke_body(&wrapped);

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::model_request(format!("BedrockClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("BedrockClient: model endpoint returned {status}: {body}");
            return Err(DomainError::model_request(format!(
                "BedrockClient: model endpoint returned {status}"
            )));
        }

        let raw = response.text().await.map_err(|e| {
            DomainError::model_request(format!("BedrockClient: failed to read response body: {e}"))
        })?;

        parse_invoke_response(&raw)
    }
}
