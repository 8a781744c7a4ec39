//! Proxy management console - web UI for editing the proxy's block list.

mod error;
mod routes;
mod state;
mod view;

use std::path::PathBuf;

use anyhow::Context;
use axum::Router;
use blocklist::io::config::{ConsoleConfig, load_config};
use blocklist::store::BlockListStore;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::state::AppState;
use crate::view::PageRenderer;

const DEFAULT_LOG_DIRECTIVES: &str = "blocklist=info,blocklist_console=info,tower_http=info";

#[derive(Debug, Parser)]
#[command(name = "blocklist-console")]
#[command(about = "Web console for the proxy's URL block list")]
struct Args {
    /// TOML config file; defaults apply when it does not exist
    #[arg(long, env = "BLOCKLIST_CONSOLE_CONFIG", default_value = "console.toml")]
    config: PathBuf,

    /// Address to bind the server to
    #[arg(long, env = "BLOCKLIST_CONSOLE_BIND")]
    bind: Option<String>,

    /// Port to listen on
    #[arg(long, env = "BLOCKLIST_CONSOLE_PORT")]
    port: Option<u16>,

    /// Block list file read by the proxy
    #[arg(long = "block-list", env = "BLOCKLIST_CONSOLE_FILE")]
    block_list: Option<PathBuf>,

    /// Seed the list from the existing block list file at startup
    #[arg(long, env = "BLOCKLIST_CONSOLE_LOAD_EXISTING")]
    load_existing: bool,
}

/// Config file values, overridden by flags and environment.
fn resolve_config(args: &Args) -> anyhow::Result<ConsoleConfig> {
    let mut config = load_config(&args.config)?;
    if let Some(bind) = &args.bind {
        config.bind = bind.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(path) = &args.block_list {
        config.block_list_path = path.clone();
    }
    if args.load_existing {
        config.load_existing = true;
    }
    config.validate()?;
    Ok(config)
}

fn build_app(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    blocklist::logging::init(DEFAULT_LOG_DIRECTIVES);

    let args = Args::parse();
    let config = resolve_config(&args)?;
    info!(config = %args.config.display(), block_list = %config.block_list_path.display(), "starting blocklist-console");

    let store = if config.load_existing {
        BlockListStore::load(&config.block_list_path)?
    } else {
        BlockListStore::new(&config.block_list_path)
    };
    let state = AppState::new(store, PageRenderer::new()?);
    let app = build_app(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
