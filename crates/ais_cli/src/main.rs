use clap::Parser;
use tracing::info;

use ais_core::Result;
use ais_inference::{create_registry, Config};
use ais_web::{create_app, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about = "Text inference facade with async callback delivery", long_about = None)]
struct Cli {
    /// Address to serve on.
    #[arg(long, default_value = "127.0.0.1:8000")]
    bind: String,
    #[arg(long, default_value = "heuristic", help = "Model backend. Available backends: heuristic (default), remote")]
    model: String,
    /// Base URL of the remote backend, for --model remote.
    #[arg(long)]
    model_url: Option<String>,
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config = Config {
        model_name: Some(cli.model),
        model_url: cli.model_url,
        api_key: cli.api_key,
    };
    let registry = create_registry(Some(config)).await?;
    info!(
        "🧠 Inference pipelines initialized successfully (using {})",
        registry.sentiment.name()
    );

    let app = create_app(AppState::new(registry)).await;
    let listener = tokio::net::TcpListener::bind(&cli.bind).await?;
    info!("🌐 Serving inference API on {}", cli.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
