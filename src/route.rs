//! The two logical routes of the catalog.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// Browse or search.
    #[default]
    Root,
    /// Detail overlay for the movie with this identifier.
    Movie(String),
}

impl Route {
    pub fn movie(id: impl ToString) -> Self {
        Route::Movie(id.to_string())
    }

    pub fn movie_id(&self) -> Option<&str> {
        match self {
            Route::Root => None,
            Route::Movie(id) => Some(id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Root => f.write_str("/"),
            Route::Movie(id) => write!(f, "/movie/{}", urlencoding::encode(id)),
        }
    }
}
