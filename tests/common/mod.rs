#![allow(dead_code)]

use anyhow::{anyhow, Result};
use cinescope::models::{Genre, MovieDetail, MovieList, MovieSummary};
use cinescope::tmdb::MovieApi;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub fn movie(id: i64, title: &str) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        overview: format!("{title} overview"),
        poster_path: Some(format!("/{id}.jpg")),
        backdrop_path: None,
        release_date: "1999-03-31".to_string(),
        vote_average: 7.25,
        vote_count: 100,
    }
}

pub fn detail(id: i64, title: &str) -> MovieDetail {
    MovieDetail {
        summary: movie(id, title),
        budget: 63_000_000,
        genres: vec![Genre {
            id: 28,
            name: "Action".to_string(),
        }],
        homepage: String::new(),
        original_language: "en".to_string(),
        original_title: title.to_string(),
        popularity: 10.0,
        production_companies: Vec::new(),
        production_countries: Vec::new(),
        revenue: 0,
        runtime: 136,
        spoken_languages: Vec::new(),
        status: "Released".to_string(),
        tagline: String::new(),
    }
}

pub fn list(movies: Vec<MovieSummary>) -> MovieList {
    MovieList {
        page: Some(1),
        results: movies,
        total_pages: Some(1),
        total_results: None,
    }
}

/// In-memory movie database. Missing entries fail like a 404 would.
#[derive(Default)]
pub struct FakeApi {
    pub popular: Option<Vec<MovieSummary>>,
    pub top_rated: Option<Vec<MovieSummary>>,
    pub searches: HashMap<String, Vec<MovieSummary>>,
    pub details: HashMap<String, MovieDetail>,
    pub delays: HashMap<String, Duration>,
    pub crash_on_popular: bool,
    pub search_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub searched: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_lists(popular: Vec<MovieSummary>, top_rated: Vec<MovieSummary>) -> Self {
        Self {
            popular: Some(popular),
            top_rated: Some(top_rated),
            ..Self::default()
        }
    }

    pub fn search_result(mut self, query: &str, movies: Vec<MovieSummary>) -> Self {
        self.searches.insert(query.to_string(), movies);
        self
    }

    pub fn detail(mut self, movie: MovieDetail) -> Self {
        self.details.insert(movie.id().to_string(), movie);
        self
    }

    /// Delays responses for a search query or a detail id.
    pub fn slow(mut self, key: &str, delay: Duration) -> Self {
        self.delays.insert(key.to_string(), delay);
        self
    }

    async fn wait(&self, key: &str) {
        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[async_trait::async_trait]
impl MovieApi for FakeApi {
    async fn search(&self, query: &str) -> Result<MovieList> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.searched.lock().unwrap().push(query.to_string());
        self.wait(query).await;
        self.searches
            .get(query)
            .cloned()
            .map(list)
            .ok_or_else(|| anyhow!("fetch failed: /search/movie -> 500"))
    }

    async fn details(&self, id: &str) -> Result<MovieDetail> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.wait(id).await;
        self.details
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow!("fetch failed: /movie/{} -> 404", id))
    }

    async fn popular(&self) -> Result<MovieList> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.crash_on_popular {
            panic!("popular list handler crashed");
        }
        self.popular
            .clone()
            .map(list)
            .ok_or_else(|| anyhow!("fetch failed: /movie/popular -> 500"))
    }

    async fn top_rated(&self) -> Result<MovieList> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.top_rated
            .clone()
            .map(list)
            .ok_or_else(|| anyhow!("fetch failed: /movie/top_rated -> 500"))
    }

    async fn now_playing(&self) -> Result<MovieList> {
        Err(anyhow!("fetch failed: /movie/now_playing -> 500"))
    }

    async fn upcoming(&self) -> Result<MovieList> {
        Err(anyhow!("fetch failed: /movie/upcoming -> 500"))
    }
}

pub fn fixture() -> FakeApi {
    FakeApi::with_lists(vec![movie(1, "A"), movie(2, "B")], vec![movie(3, "C")])
        .search_result("matrix", vec![movie(10, "The Matrix")])
        .detail(detail(1, "A"))
        .detail(detail(2, "B"))
        .detail(detail(3, "C"))
        .detail(detail(10, "The Matrix"))
}
