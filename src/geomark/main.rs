use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;
use tokio::net::TcpListener;
use tracing::{info, warn};

use geomark::error::{GeomarkError, Result};
use geomark::http::auth::SessionStore;
use geomark::http::{router, AppState};
use geomark::store::fs::FileStore;

#[derive(Parser)]
#[command(name = "geomark", version, about = "Map annotation service")]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Data directory (defaults to the platform data dir)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geomark=info,tower_http=info".into()),
        )
        .compact()
        .init();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => ProjectDirs::from("com", "geomark", "geomark")
            .ok_or_else(|| GeomarkError::Store("Could not determine data dir".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let runtime = tokio::runtime::Runtime::new().map_err(GeomarkError::Io)?;
    runtime.block_on(serve(cli.bind, data_dir))
}

async fn serve(bind: SocketAddr, data_dir: PathBuf) -> Result<()> {
    let sessions = SessionStore::load(&data_dir.join("sessions.json"))?;
    if sessions.is_empty() {
        warn!("no sessions loaded; every request will be rejected as unauthenticated");
    }

    let state = AppState::new(FileStore::new(&data_dir), sessions);

    info!(%bind, data_dir = %data_dir.display(), "starting geomark");
    let listener = TcpListener::bind(bind).await.map_err(GeomarkError::Io)?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(GeomarkError::Io)?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}
