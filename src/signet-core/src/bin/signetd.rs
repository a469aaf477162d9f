//! signetd - HTTP daemon for the Signet signing oracle.
//!
//! Loads (or generates) the service keypair, then serves the sign,
//! verify, public-key and health endpoints. Startup is fail-fast: if
//! the key store cannot be opened the process exits non-zero before
//! the listener ever binds.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use signet_core::http::{create_router, AppState};
use signet_core::{OracleConfig, RateLimiter, SigningOracle};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-client request budget: 100 requests per 15 minutes.
const RATE_LIMIT_WINDOW_SECS: u64 = 15 * 60;
const RATE_LIMIT_MAX_REQUESTS: u32 = 100;

/// Signet - minimal elliptic-curve signing oracle.
///
/// Holds exactly one secp256k1 keypair and exposes signing,
/// verification and public-key export over HTTP. The private key is
/// generated on first start, persisted with owner-only permissions,
/// and never leaves the process afterwards.
#[derive(Parser)]
#[command(name = "signetd")]
#[command(version = VERSION)]
#[command(about = "Minimal elliptic-curve signing oracle")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "SIGNET_PORT", default_value_t = 3000)]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    bind: IpAddr,

    /// Path of the persisted key file
    #[arg(long, env = "SIGNET_KEY_FILE", default_value = "signet-keys.json")]
    key_file: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!(error = %e, "fatal startup error");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    info!(version = VERSION, "starting signetd");

    // The keystore must be ready before the listener binds; a corrupt
    // key file is fatal here, never silently regenerated.
    let config = OracleConfig {
        key_path: cli.key_file,
    };
    let oracle = SigningOracle::open(&config)?;
    info!(public_key = %oracle.export_public_key(), "signing oracle ready");

    let limiter = Arc::new(RateLimiter::new(
        RATE_LIMIT_WINDOW_SECS,
        RATE_LIMIT_MAX_REQUESTS,
    ));

    // Evict idle rate-limiter clients once per window.
    {
        let limiter = Arc::clone(&limiter);
        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_secs(RATE_LIMIT_WINDOW_SECS));
            loop {
                interval.tick().await;
                limiter.cleanup();
            }
        });
    }

    let app = create_router(AppState { oracle, limiter });

    let addr = SocketAddr::new(cli.bind, cli.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
