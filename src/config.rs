use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

pub const TMDB_BASE: &str = "https://api.themoviedb.org/3";
pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
pub const POSTER_SIZE: &str = "w500";
pub const DEFAULT_PORT: u16 = 3146;

/// Process-wide settings, built once at startup and handed to the client and server.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub image_base: String,
    pub poster_size: String,
    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: TMDB_BASE.to_string(),
            image_base: IMAGE_BASE.to_string(),
            poster_size: POSTER_SIZE.to_string(),
            listen_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        }
    }

    pub fn from_env() -> Result<Self> {
        let api_key = env::var("TMDB_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .context("TMDB_API_KEY not set")?;
        Ok(Self::new(api_key))
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_image_base(mut self, base: impl Into<String>) -> Self {
        self.image_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_poster_size(mut self, size: impl Into<String>) -> Self {
        self.poster_size = size.into();
        self
    }

    /// `{image_base}/{size}{path}`. TMDB poster paths carry their own leading slash.
    pub fn poster_url(&self, poster_path: Option<&str>) -> Option<String> {
        let path = poster_path.filter(|p| !p.is_empty())?;
        Some(format!("{}/{}{}", self.image_base, self.poster_size, path))
    }
}
