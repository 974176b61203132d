use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending a single prompt to a hosted model and receiving
/// its text response.
///
/// Implementors encapsulate transport, serialization, and vendor-specific
/// envelope details.  Consumers (e.g. [`crate::application::GenerateRecipeUseCase`])
/// remain decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// Send `prompt` to the model and return the assistant's response text.
    async fn invoke(&self, prompt: &str) -> Result<String, DomainError>;
}
