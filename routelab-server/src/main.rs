use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use routelab_server::competitiveness::EngineConfig;
use routelab_server::config::ServerConfig;
use routelab_server::ingest::load_context;
use routelab_server::provision::{DownloadClient, Provisioned};
use routelab_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Fetch dataset files that are not on disk yet
    let client = match DownloadClient::new() {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to create download client");
            return ExitCode::FAILURE;
        }
    };
    let downloads = [
        (config.routes_url.as_deref(), config.routes_path()),
        (config.cities_url.as_deref(), config.cities_path()),
    ];
    for (url, path) in &downloads {
        match client.ensure_file(*url, path).await {
            Ok(Provisioned::Downloaded { bytes }) => {
                info!(path = %path.display(), bytes, "provisioned dataset file");
            }
            Ok(Provisioned::AlreadyPresent | Provisioned::NoSource) => {}
            Err(e) => warn!(path = %path.display(), error = %e, "download failed"),
        }
    }

    let state = AppState::new(config.static_dir.clone());

    // Load in the background so /health answers while the dataset is parsed
    let loader_state = state.clone();
    let routes_path = config.routes_path();
    let cities_path = config.cities_path();
    let encoding = config.encoding;
    tokio::spawn(async move {
        let loaded = tokio::task::spawn_blocking(move || {
            load_context(&routes_path, &cities_path, encoding, EngineConfig::default())
        })
        .await;

        let recorded = match loaded {
            Ok(Ok(data)) => loader_state.publish(data),
            Ok(Err(e)) => {
                error!(error = %e, "failed to load dataset");
                loader_state.fail(e.to_string())
            }
            Err(e) => {
                error!(error = %e, "dataset loader panicked");
                loader_state.fail(format!("loader task failed: {e}"))
            }
        };
        if !recorded {
            warn!("dataset load outcome was already recorded");
        }
    });

    let app = create_router(state, &config.cors_origins);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.addr, "RouteLab listening on http://{}", config.addr);
    info!("API endpoints: GET /health, GET /cities, GET /city-coords, POST /route, GET /competitiveness?origin=");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
