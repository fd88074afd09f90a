use crate::card::{format_rating, parse_release_date};
use crate::config::Config;
use crate::models::MovieDetail;
use crate::route::Route;

/// Display model for the modal shown over browse or search results.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailOverlay {
    pub id: i64,
    pub title: String,
    pub tagline: Option<String>,
    pub poster_url: Option<String>,
    pub genres: Vec<String>,
    pub overview: String,
    pub release_date: String,
    pub rating: String,
    pub runtime: String,
    pub budget: String,
}

impl DetailOverlay {
    pub fn new(movie: &MovieDetail, config: &Config) -> Self {
        let summary = &movie.summary;
        Self {
            id: summary.id,
            title: summary.title.clone(),
            tagline: Some(movie.tagline.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            poster_url: config.poster_url(summary.poster_path.as_deref()),
            genres: movie.genres.iter().map(|g| g.name.clone()).collect(),
            overview: summary.overview.clone(),
            release_date: display_date(&summary.release_date),
            rating: format_rating(summary.vote_average),
            runtime: format!("{} min", movie.runtime),
            budget: format_budget(movie.budget),
        }
    }

    /// Where the close control leads, however the overlay was opened.
    pub fn close_route(&self) -> Route {
        Route::Root
    }
}

fn display_date(date: &str) -> String {
    parse_release_date(date)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| date.to_string())
}

/// Whole currency units shown in millions, e.g. `$63.0M`.
pub fn format_budget(budget: i64) -> String {
    format!("${:.1}M", budget as f64 / 1_000_000.0)
}
