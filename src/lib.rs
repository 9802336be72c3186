pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::DogApiClient;
pub use crate::app::{build_router, AppState, PageRenderer};
pub use crate::config::GalleryConfig;
pub use crate::core::{BreedGateway, BreedSource, ConfigProvider};
pub use crate::utils::error::{GalleryError, Result};

/// Wires the HTTP client, gateway and renderer described by `config` into a router.
pub fn build_app(config: &GalleryConfig) -> Result<axum::Router> {
    let client = DogApiClient::from_config(config)?;
    let gateway = BreedGateway::new(client).with_concurrent_fetch(config.concurrent_fetch());
    let renderer = match config.template_path() {
        Some(path) => PageRenderer::from_file(path)?,
        None => PageRenderer::new()?,
    };

    Ok(build_router(
        AppState::new(gateway, renderer),
        config.static_dir(),
    ))
}
