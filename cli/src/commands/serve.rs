use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::{Config, ServerConfig};
use crate::server::DocumentServer;

/// Command-line overrides for the `[server]` table.
#[derive(Debug, Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub root: Option<PathBuf>,
}

pub fn resolve_config(config_path: Option<&Path>, overrides: ServeOverrides) -> Result<ServerConfig> {
    let mut server = Config::discover(config_path)?.server;
    if let Some(host) = overrides.host {
        server.host = host;
    }
    if let Some(port) = overrides.port {
        server.port = port;
    }
    if let Some(root) = overrides.root {
        server.root = root;
    }
    Ok(server)
}

pub fn serve(config_path: Option<&Path>, overrides: ServeOverrides) -> Result<()> {
    let config = resolve_config(config_path, overrides)?;
    let server = DocumentServer::bind(&config)?;
    println!("Serving on http://localhost:{}", config.port);
    server.serve();
    Ok(())
}
