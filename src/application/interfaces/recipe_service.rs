use async_trait::async_trait;

use crate::domain::{DomainError, RecipeRequest, RecipeResponse};

/// The client-side seam for the remote recipe generation call.
///
/// Implementors carry the session token and the transport; callers (the CLI
/// form handler) see one method with the same shape as the remote operation.
#[async_trait]
pub trait RecipeService: Send + Sync {
    /// Submit a recipe request under an authenticated session and return the
    /// server's response envelope.
    ///
    /// An `Err` means the call itself failed (transport, authentication);
    /// backend-side generation failures arrive as an `Ok` response with the
    /// `error` field populated.
    async fn ask(&self, request: &RecipeRequest) -> Result<RecipeResponse, DomainError>;
}
