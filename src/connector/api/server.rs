use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{DomainError, RecipeRequest, RecipeResponse};

use super::container::Container;

#[derive(Clone)]
struct AppState {
    container: Arc<Container>,
}

/// The recipegen HTTP API.
///
/// One authenticated operation, `POST /api/ask-bedrock`, plus an
/// unauthenticated `GET /healthz` liveness probe. Callers must present the
/// configured session token as a bearer credential; requests without it are
/// rejected before the transform runs. Each request is handled
/// independently, with no retries and no cross-request state.
pub struct RecipeApiServer {
    container: Arc<Container>,
}

impl RecipeApiServer {
    pub fn new(container: Arc<Container>) -> Result<Self, DomainError> {
        if container.session_token().is_empty() {
            return Err(DomainError::configuration(
                "refusing to serve without a session token; pass --token or set RECIPEGEN_SESSION_TOKEN",
            ));
        }
        Ok(Self { container })
    }

    pub fn router(&self) -> Router {
        let state = AppState {
            container: self.container.clone(),
        };

        Router::new()
            .route("/api/ask-bedrock", post(ask_bedrock_handler))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_session_token,
            ))
            .route("/healthz", get(healthz_handler))
            .with_state(state)
    }

    pub async fn serve(&self, addr: SocketAddr) -> Result<(), DomainError> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Recipe API listening on {addr}");
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

async fn healthz_handler() -> &'static str {
    "ok"
}

/// The inbound `askBedrock` operation.
///
/// Every backend-side failure collapses into the response's `error` field;
/// the HTTP status stays 200 so the caller always receives the same envelope.
async fn ask_bedrock_handler(
    State(state): State<AppState>,
    Json(request): Json<RecipeRequest>,
) -> Json<RecipeResponse> {
    let request_id = Uuid::new_v4();
    info!(
        "ask-bedrock {request_id}: {} ingredient(s)",
        request.ingredients().len()
    );

    let use_case = state.container.generate_use_case();
    match use_case.execute(&request).await {
        Ok(response) => Json(response),
        Err(e) => {
            warn!("ask-bedrock {request_id} failed: {e}");
            Json(RecipeResponse::failure(e.to_string()))
        }
    }
}

async fn require_session_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == state.container.session_token());

    if !authorized {
        debug!("Rejecting request without a valid session token");
        return (
            StatusCode::UNAUTHORIZED,
            Json(RecipeResponse::failure("missing or invalid session token")),
        )
            .into_response();
    }

    next.run(request).await
}
