//! folio server binary
//!
//! Configuration comes from the YAML file named by `FOLIO_CONFIG`, or from
//! `FOLIO_*` environment variables when no file is given.

use folio::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var("FOLIO_CONFIG") {
        Ok(path) => AppConfig::from_yaml_file(&path)?,
        Err(_) => AppConfig::from_env(),
    };

    if config.api_tokens.is_empty() {
        tracing::warn!("no api tokens configured; every request will be rejected with 401");
    }

    let state = AppState::in_memory(&config);
    let auth = TokenAuth::new(config.api_tokens.clone());
    let app = folio::server::build_router(state, auth);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "folio listening");
    axum::serve(listener, app).await?;

    Ok(())
}
