use crate::config::toml_config::GalleryConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Clone, Parser)]
#[command(name = "breed-gallery")]
#[command(about = "Browse dog breeds and their pictures from the Dog CEO API")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Address to listen on, e.g. 0.0.0.0:3000
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on, keeping the configured host
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Base URL of the Dog CEO compatible API
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Directory served for static assets
    #[arg(long)]
    pub static_dir: Option<String>,

    /// Page template replacing the built-in one
    #[arg(long)]
    pub template: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// Reads the config file (or defaults) and applies command line overrides.
    pub fn load(&self) -> Result<GalleryConfig> {
        let mut config = match &self.config {
            Some(path) => GalleryConfig::from_file(path)?,
            None => GalleryConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut GalleryConfig) {
        if let Some(bind) = &self.bind {
            config.server.bind_addr = bind.clone();
        }
        if let Some(port) = self.port {
            config.server.bind_addr = match config.server.bind_addr.parse::<SocketAddr>() {
                Ok(mut addr) => {
                    addr.set_port(port);
                    addr.to_string()
                }
                Err(_) => format!("0.0.0.0:{}", port),
            };
        }
        if let Some(url) = &self.api_base_url {
            config.upstream.base_url = url.clone();
        }
        if let Some(dir) = &self.static_dir {
            config.server.static_dir = dir.clone();
        }
        if let Some(template) = &self.template {
            config.server.template_path = Some(template.clone());
        }
        if self.json_logs {
            config.logging.json = true;
        }
    }
}
