use std::sync::Arc;

use tracing::debug;

use crate::application::{GenerateRecipeUseCase, ModelInvoker, RecipeService};
use crate::{BedrockClient, BedrockConfig, HttpRecipeClient, MockModelInvoker};

pub struct ContainerConfig {
    /// Base URL of the recipegen API the CLI talks to.
    pub server_url: String,
    /// Session token sent by the client and accepted by the server.
    pub session_token: String,
    /// Swap the Bedrock client for a canned offline model.
    pub mock_model: bool,
    pub bedrock: BedrockConfig,
}

pub struct Container {
    model: Arc<dyn ModelInvoker>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        // Initialize the model invoker
        let model: Arc<dyn ModelInvoker> = if config.mock_model {
            debug!("Using mock model invoker");
            Arc::new(MockModelInvoker::new())
        } else {
            debug!(
                "Using Bedrock model {} at {}",
                config.bedrock.model, config.bedrock.base_url
            );
            Arc::new(BedrockClient::new(config.bedrock.clone()))
        };

        Self { model, config }
    }

    pub fn generate_use_case(&self) -> GenerateRecipeUseCase {
        GenerateRecipeUseCase::new(self.model.clone())
    }

    pub fn recipe_client(&self) -> Arc<dyn RecipeService> {
        Arc::new(HttpRecipeClient::new(
            &self.config.server_url,
            &self.config.session_token,
        ))
    }

    pub fn session_token(&self) -> &str {
        &self.config.session_token
    }

    pub fn server_url(&self) -> &str {
        &self.config.server_url
    }
}
