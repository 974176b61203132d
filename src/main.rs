use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use recipegen::connector::adapter::DEFAULT_SERVER_URL;
use recipegen::{BedrockConfig, Commands, Container, ContainerConfig, RecipeApiServer, Router};

#[derive(Parser)]
#[command(name = "recipegen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the recipe API server (env: RECIPEGEN_SERVER_URL)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Session token presented by the client and accepted by the server
    /// (env: RECIPEGEN_SESSION_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Use a canned offline model instead of the Bedrock runtime
    #[arg(long, global = true)]
    mock_model: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let server_url = cli
        .server
        .or_else(|| std::env::var("RECIPEGEN_SERVER_URL").ok())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
    let session_token = cli
        .token
        .or_else(|| std::env::var("RECIPEGEN_SESSION_TOKEN").ok())
        .unwrap_or_default();

    let config = ContainerConfig {
        server_url,
        session_token,
        mock_model: cli.mock_model,
        bedrock: BedrockConfig::from_env(),
    };
    let container = Container::new(config);

    match cli.command {
        Commands::Serve { port, public } => {
            let host = if public { [0, 0, 0, 0] } else { [127, 0, 0, 1] };
            let addr = SocketAddr::from((host, port));
            let server = RecipeApiServer::new(Arc::new(container))?;
            server.serve(addr).await?;
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{output}");
        }
    }

    Ok(())
}
