use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use healthcare_translator::config_manager::Config;
use healthcare_translator::routes;
use healthcare_translator::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables win
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("healthcare_translator=debug,tower_http=debug")),
        )
        .init();

    if dotenv_loaded {
        info!("Loaded environment from .env");
    }

    let (mut config, loaded_path) = Config::discover()?;
    match loaded_path {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!("No configuration file found, using defaults"),
    }
    config.apply_env_overrides()?;

    if !config.system_config.static_path().is_dir() {
        warn!(
            "Static directory {} not found; /app will return 404",
            config.system_config.static_dir
        );
    }

    let addr = config.system_config.socket_addr()?;
    let app_state = AppState::new(config)?;
    let app = routes::create_app(app_state);

    info!("Server is running on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
