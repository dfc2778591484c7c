use anyhow::Result;
use clap::Parser;
use std::io;
use tokendex_core::{Engine, StoreConfig};
use tokendex_shell::{run_session, Mode};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "tokendex")]
#[command(about = "Index token documents and run boolean queries over them", long_about = None)]
struct Cli {
    /// Directory that receives one JSON record per indexed document
    #[arg(long, env = "TOKENDEX_DOCUMENTS_DIR", default_value = tokendex_core::config::DEFAULT_DOCUMENTS_DIR)]
    documents_dir: String,
    /// Keep documents in memory instead of writing them to disk
    #[arg(long, default_value_t = false)]
    no_persist: bool,
    /// Read one command per line from stdin without prompting
    #[arg(long, default_value_t = false)]
    batch: bool,
}

fn main() -> Result<()> {
    // stdout carries prompts and replies only
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let store = StoreConfig::from_args(&cli.documents_dir, !cli.no_persist).open()?;
    let mut engine = Engine::new(store);
    let mode = if cli.batch { Mode::Batch } else { Mode::Interactive };

    let stdin = io::stdin();
    run_session(&mut engine, stdin.lock(), io::stdout().lock(), mode)?;
    Ok(())
}
