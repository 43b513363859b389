//! # northlight-site
//!
//! The Northlight agency website: brochure pages, the contact pipeline,
//! and the admin inquiry dashboard, served over axum.
//!
//! ## Running
//!
//! ```bash
//! cargo run --package northlight-site [path/to/site.toml]
//! ```

use std::sync::Arc;

use northlight_core::logging::setup_logging;
use northlight_core::{Settings, SiteResult};

use northlight_site::routes;
use northlight_site::state::AppState;

#[tokio::main]
async fn main() -> SiteResult<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "site.toml".to_string());
    let settings = Settings::load_from_toml(&config_path);
    setup_logging(&settings);

    let bind_addr = settings.bind_addr.clone();
    let site_name = settings.site_name.clone();
    let state = Arc::new(AppState::from_settings(settings)?);
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Serving {site_name} on http://{bind_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
