use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

pub const DEFAULT_BOUNDARY_URL: &str =
    "https://raw.githubusercontent.com/rowanhogan/australian-states/master/states.geojson";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub map: MapConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Text shown around every page.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub page_title: String,
    pub footer: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Sample Interactive Map".to_string(),
            page_title: "THI Map Demo".to_string(),
            footer: "Built by RAP Media".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    pub boundary_url: String,
    /// Map container height in pixels.
    pub height: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            boundary_url: DEFAULT_BOUNDARY_URL.to_string(),
            height: 600,
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML configuration: {:?}", path))?;
        Ok(config)
    }
}
