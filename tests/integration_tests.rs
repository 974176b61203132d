//! Integration tests for recipegen.
//!
//! These tests drive the full path: HTTP client -> authenticated API ->
//! generation use case -> model seam.

use std::net::SocketAddr;
use std::sync::Arc;

use recipegen::{
    BedrockConfig, Commands, Container, ContainerConfig, GenerateRecipeUseCase, HttpRecipeClient,
    MockModelInvoker, RecipeApiServer, RecipeRequest, RecipeService, Router,
};

const TEST_TOKEN: &str = "test-session-token";

/// Start an API server on an ephemeral port, backed by the canned model.
async fn start_test_server(container_config: ContainerConfig) -> SocketAddr {
    let container = Arc::new(Container::new(container_config));
    let server = RecipeApiServer::new(container).expect("Failed to build server");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local addr");

    let router = server.router();
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Server stopped unexpectedly");
    });

    addr
}

fn mock_backed_config() -> ContainerConfig {
    ContainerConfig {
        server_url: String::new(),
        session_token: TEST_TOKEN.to_string(),
        mock_model: true,
        bedrock: BedrockConfig::default(),
    }
}

#[tokio::test]
async fn ask_bedrock_round_trip_returns_recipe_body() {
    let addr = start_test_server(mock_backed_config()).await;
    let client = HttpRecipeClient::new(format!("http://{addr}"), TEST_TOKEN);

    let request = RecipeRequest::new(vec!["eggs, flour".to_string()]);
    let response = client.ask(&request).await.expect("Call should succeed");

    assert!(response.body().is_some(), "Expected a recipe body");
    assert!(response.error().is_none(), "Expected no error field");
}

#[tokio::test]
async fn wrong_session_token_is_rejected_before_generation() {
    let addr = start_test_server(mock_backed_config()).await;
    let client = HttpRecipeClient::new(format!("http://{addr}"), "not-the-token");

    let request = RecipeRequest::new(vec!["eggs".to_string()]);
    let err = client.ask(&request).await.unwrap_err();

    assert!(err.is_unauthorized(), "Expected Unauthorized, got {err}");
}

#[tokio::test]
async fn healthz_requires_no_session_token() {
    let addr = start_test_server(mock_backed_config()).await;

    let status = reqwest::get(format!("http://{addr}/healthz"))
        .await
        .expect("Probe should reach the server")
        .status();

    assert!(status.is_success());
}

#[tokio::test]
async fn backend_failure_collapses_into_error_field() {
    // Point the real Bedrock adapter at a closed port: the outbound call
    // fails, and the handler must return a 200 envelope with `error` set
    // instead of surfacing a transport-level fault.
    let config = ContainerConfig {
        server_url: String::new(),
        session_token: TEST_TOKEN.to_string(),
        mock_model: false,
        bedrock: BedrockConfig::new("http://127.0.0.1:9", "test-model"),
    };
    let addr = start_test_server(config).await;
    let client = HttpRecipeClient::new(format!("http://{addr}"), TEST_TOKEN);

    let request = RecipeRequest::new(vec!["eggs".to_string()]);
    let response = client.ask(&request).await.expect("Envelope should arrive");

    assert!(response.body().is_none());
    assert!(response.error().is_some(), "Expected a populated error field");
}

#[tokio::test]
async fn empty_field_submission_reaches_model_with_empty_join() {
    // The form handler submits `[""]` when the field is empty; the model
    // must still receive one well-formed instruction with an empty join.
    let mock = Arc::new(MockModelInvoker::new());
    let use_case = GenerateRecipeUseCase::new(mock.clone());

    let request = RecipeRequest::new(vec![String::new()]);
    use_case.execute(&request).await.expect("Should succeed");

    assert_eq!(
        mock.last_prompt().as_deref(),
        Some("Suggest a recipe idea using these ingredients: .")
    );
}

#[tokio::test]
async fn empty_form_submission_renders_the_recipe_body() {
    let addr = start_test_server(mock_backed_config()).await;

    let client_container = Container::new(ContainerConfig {
        server_url: format!("http://{addr}"),
        session_token: TEST_TOKEN.to_string(),
        mock_model: true,
        bedrock: BedrockConfig::default(),
    });

    let router = Router::new(&client_container);
    let output = router
        .route(Commands::Ask { ingredients: None })
        .await
        .expect("Submission should succeed");

    assert!(
        output.contains("Mock recipe idea"),
        "Expected the canned recipe body, got: {output}"
    );
}

#[tokio::test]
async fn server_refuses_to_start_without_session_token() {
    let config = ContainerConfig {
        server_url: String::new(),
        session_token: String::new(),
        mock_model: true,
        bedrock: BedrockConfig::default(),
    };
    let container = Arc::new(Container::new(config));

    assert!(RecipeApiServer::new(container).is_err());
}
