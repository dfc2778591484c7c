use anyhow::Result;
use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use tokendex_core::StoreConfig;
use tokendex_server::build_app;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Directory that receives one JSON record per indexed document
    #[arg(long, env = "TOKENDEX_DOCUMENTS_DIR", default_value = tokendex_core::config::DEFAULT_DOCUMENTS_DIR)]
    documents_dir: String,
    /// Keep documents in memory instead of writing them to disk
    #[arg(long, default_value_t = false)]
    no_persist: bool,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let app: Router = build_app(StoreConfig::from_args(&args.documents_dir, !args.no_persist))?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
