//! folio-server binary
//!
//! Startup order: dotenv, tracing, config, pool, schema bootstrap,
//! portfolio seed, then serve until Ctrl+C/SIGTERM.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use folio_core::{init_tracing, AppConfig};
use folio_server::db::repos::PortfolioRepo;
use folio_server::db::{create_pool, migrations};
use folio_server::run_server;

/// Server command-line arguments. Anything left unset falls back to
/// the environment, then to defaults.
#[derive(Parser, Debug)]
#[command(name = "folio-server", version, about = "Portfolio backend server")]
struct ServerArgs {
    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short, long)]
    bind: Option<String>,

    /// PostgreSQL connection string
    #[arg(long)]
    database_url: Option<String>,

    /// Directory for uploaded resume files
    #[arg(long)]
    uploads_dir: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; real deployments set the
    // environment directly.
    let _ = dotenvy::dotenv();

    let args = ServerArgs::parse();
    init_tracing(args.debug)?;

    let mut config = AppConfig::from_env()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }
    if let Some(uploads_dir) = args.uploads_dir {
        config.uploads_dir = uploads_dir;
    }
    if let Some(timeout) = args.timeout {
        config.request_timeout_secs = timeout;
    }

    let addr = config.bind_addr()?;

    let pool = create_pool(&config.database_url)
        .await
        .context("failed to connect to the database")?;

    migrations::run(&pool)
        .await
        .context("schema bootstrap failed")?;

    let portfolio = PortfolioRepo::new(&pool)
        .initialize()
        .await
        .context("portfolio seed failed")?;
    info!(id = %portfolio.id, "portfolio document ready");

    tokio::fs::create_dir_all(&config.uploads_dir)
        .await
        .with_context(|| {
            format!(
                "failed to create uploads directory {}",
                config.uploads_dir.display()
            )
        })?;

    info!("Starting folio-server on http://{}", addr);
    run_server(
        pool,
        addr,
        config.uploads_dir.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )
    .await?;

    Ok(())
}
