use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::models::{MovieDetail, MovieList};

const MAX_ERROR_BODY: usize = 200;

/// The six read operations the catalog needs from the movie database.
#[async_trait]
pub trait MovieApi: Send + Sync {
    async fn search(&self, query: &str) -> Result<MovieList>;
    async fn details(&self, id: &str) -> Result<MovieDetail>;
    async fn popular(&self) -> Result<MovieList>;
    async fn top_rated(&self) -> Result<MovieList>;
    async fn now_playing(&self) -> Result<MovieList>;
    async fn upcoming(&self) -> Result<MovieList>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Search(&'a str),
    Details(&'a str),
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
}

impl Endpoint<'_> {
    /// Path and endpoint-specific query, without the API key.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Search(query) => {
                format!("/search/movie?query={}", urlencoding::encode(query))
            }
            Endpoint::Details(id) => format!("/movie/{}", urlencoding::encode(id)),
            Endpoint::Popular => "/movie/popular".to_string(),
            Endpoint::TopRated => "/movie/top_rated".to_string(),
            Endpoint::NowPlaying => "/movie/now_playing".to_string(),
            Endpoint::Upcoming => "/movie/upcoming".to_string(),
        }
    }

    pub fn url(&self, api_base: &str, api_key: &str) -> String {
        let path = self.path();
        let sep = if path.contains('?') { '&' } else { '?' };
        format!(
            "{api_base}{path}{sep}api_key={}",
            urlencoding::encode(api_key)
        )
    }
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    api_base: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, endpoint: Endpoint<'_>) -> Result<T> {
        let path = endpoint.path();
        debug!("GET {}", path);
        let url = endpoint.url(&self.api_base, &self.api_key);
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("fetch failed: {path}"))?;
        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("fetch failed: reading body of {path}"))?;
        if !status.is_success() {
            return Err(anyhow!(
                "fetch failed: {} -> {} {}",
                path,
                status,
                body_excerpt(&text)
            ));
        }
        let parsed: T = serde_json::from_str(&text)
            .with_context(|| format!("fetch failed: unexpected JSON from {path}"))?;
        Ok(parsed)
    }
}

#[async_trait]
impl MovieApi for TmdbClient {
    async fn search(&self, query: &str) -> Result<MovieList> {
        self.get_json(Endpoint::Search(query)).await
    }

    async fn details(&self, id: &str) -> Result<MovieDetail> {
        self.get_json(Endpoint::Details(id)).await
    }

    async fn popular(&self) -> Result<MovieList> {
        self.get_json(Endpoint::Popular).await
    }

    async fn top_rated(&self) -> Result<MovieList> {
        self.get_json(Endpoint::TopRated).await
    }

    async fn now_playing(&self) -> Result<MovieList> {
        self.get_json(Endpoint::NowPlaying).await
    }

    async fn upcoming(&self) -> Result<MovieList> {
        self.get_json(Endpoint::Upcoming).await
    }
}

// Error pages can be large HTML documents; keep only the head of the body.
fn body_excerpt(text: &str) -> String {
    let text = text.trim();
    match text.char_indices().nth(MAX_ERROR_BODY) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}
