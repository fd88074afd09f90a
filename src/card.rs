use chrono::{Datelike, NaiveDate};

use crate::config::Config;
use crate::models::MovieSummary;
use crate::route::Route;

/// Display model for one movie tile.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub id: i64,
    pub title: String,
    pub poster_url: Option<String>,
    pub year: Option<i32>,
    pub rating: String,
}

impl MovieCard {
    pub fn new(movie: &MovieSummary, config: &Config) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_url: config.poster_url(movie.poster_path.as_deref()),
            year: release_year(&movie.release_date),
            rating: format_rating(movie.vote_average),
        }
    }

    /// Clicking a card opens its detail route.
    pub fn click(&self) -> Route {
        Route::movie(self.id)
    }

    pub fn rating_label(&self) -> String {
        format!("Rating: {}/10", self.rating)
    }
}

pub fn cards(movies: &[MovieSummary], config: &Config) -> Vec<MovieCard> {
    movies.iter().map(|m| MovieCard::new(m, config)).collect()
}

pub fn parse_release_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

pub fn release_year(date: &str) -> Option<i32> {
    parse_release_date(date).map(|d| d.year())
}

pub fn format_rating(vote_average: f64) -> String {
    format!("{:.1}", vote_average)
}
