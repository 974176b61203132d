use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ModelInvoker;
use crate::domain::DomainError;

const DEFAULT_RESPONSE: &str =
    "Mock recipe idea: combine everything in one pan and season to taste.";

/// Deterministic offline stand-in for the hosted model.
///
/// Returns a canned response and records the last prompt it received, which
/// lets `serve --mock-model` run without credentials and lets tests assert
/// on the exact prompt that reached the model seam.
pub struct MockModelInvoker {
    response: String,
    last_prompt: Mutex<Option<String>>,
}

impl MockModelInvoker {
    pub fn new() -> Self {
        Self {
            response: DEFAULT_RESPONSE.to_string(),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            last_prompt: Mutex::new(None),
        }
    }

    /// The most recent prompt passed to [`ModelInvoker::invoke`], if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or(None)
    }
}

impl Default for MockModelInvoker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelInvoker for MockModelInvoker {
    async fn invoke(&self, prompt: &str) -> Result<String, DomainError> {
        debug!("MockModelInvoker received prompt: {prompt}");
        if let Ok(mut guard) = self.last_prompt.lock() {
            *guard = Some(prompt.to_string());
        }
        Ok(self.response.clone())
    }
}
