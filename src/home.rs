//! Home view: browse lists, search results and the detail overlay.
//!
//! The view owns its state. Fetches run as tasks in a `JoinSet` and hand back
//! a [`ViewEvent`]; the owner feeds those into [`HomeView::apply`] (or just
//! calls [`HomeView::settle`]), so state is only ever mutated in one place.
//!
//! Route and query changes each bump a sequence number. A completion carrying
//! an older number than the current one is dropped, so a slow response can
//! never overwrite the result of a newer request for the same slot.

use anyhow::{anyhow, Result};
use std::sync::Arc;
use tokio::task::{Id, JoinSet};
use tracing::{debug, error, info};

use crate::card::{cards, MovieCard};
use crate::config::Config;
use crate::detail::DetailOverlay;
use crate::models::{MovieDetail, MovieList, MovieSummary};
use crate::route::Route;
use crate::tmdb::MovieApi;

pub const POPULAR_TITLE: &str = "Popular Movies";
pub const TOP_RATED_TITLE: &str = "Top Rated Movies";
pub const SEARCH_TITLE: &str = "Search Results";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub popular_movies: Vec<MovieSummary>,
    pub top_rated_movies: Vec<MovieSummary>,
    pub search_results: Vec<MovieSummary>,
    pub search_query: String,
    pub selected_movie: Option<MovieDetail>,
    pub loading: bool,
}

/// Completion of one fetch, produced by a view task.
#[derive(Debug)]
pub enum ViewEvent {
    ListsSettled {
        popular: Result<MovieList>,
        top_rated: Result<MovieList>,
    },
    DetailLoaded {
        seq: u64,
        id: String,
        result: Result<MovieDetail>,
    },
    SearchLoaded {
        seq: u64,
        query: String,
        result: Result<MovieList>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Loading,
    Ready {
        body: Body,
        overlay: Option<DetailOverlay>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Browse {
        popular: Vec<MovieCard>,
        top_rated: Vec<MovieCard>,
    },
    Search {
        query: String,
        results: Vec<MovieCard>,
    },
}

impl Body {
    pub fn no_results_message(&self) -> Option<String> {
        match self {
            Body::Search { query, results } if results.is_empty() => {
                Some(format!("No movies found for \"{}\"", query))
            }
            _ => None,
        }
    }
}

pub struct HomeView {
    api: Arc<dyn MovieApi>,
    config: Arc<Config>,
    state: ViewState,
    route: Route,
    route_seq: u64,
    query_seq: u64,
    lists_task: Option<Id>,
    tasks: JoinSet<ViewEvent>,
}

impl HomeView {
    /// Mounts the view on `route`: starts the two list fetches and, when the
    /// route names a movie, its detail fetch. Must run inside a Tokio runtime.
    pub fn mount(api: Arc<dyn MovieApi>, config: Arc<Config>, route: Route) -> Self {
        let mut view = Self {
            api,
            config,
            state: ViewState {
                loading: true,
                ..ViewState::default()
            },
            route,
            route_seq: 0,
            query_seq: 0,
            lists_task: None,
            tasks: JoinSet::new(),
        };
        view.fetch_lists();
        view.run_route_effect();
        view
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Number of fetches still in flight.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Route change. Re-runs the detail fetch only when the route differs.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        debug!("Route {} -> {}", self.route, route);
        self.route = route;
        self.run_route_effect();
    }

    /// Clears the selection and returns to root, however the overlay was opened.
    pub fn close_detail(&mut self) -> Route {
        self.state.selected_movie = None;
        if self.route != Route::Root {
            self.route = Route::Root;
            self.route_seq += 1;
        }
        Route::Root
    }

    /// Query change. Blank queries clear the results without a fetch.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into().trim().to_string();
        if query == self.state.search_query {
            return;
        }
        self.query_seq += 1;
        self.state.search_query = query.clone();
        if query.is_empty() {
            self.state.search_results.clear();
            return;
        }

        let api = self.api.clone();
        let seq = self.query_seq;
        self.tasks.spawn(async move {
            let result = api.search(&query).await;
            ViewEvent::SearchLoaded { seq, query, result }
        });
    }

    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::ListsSettled { popular, top_rated } => {
                match popular {
                    Ok(list) => self.state.popular_movies = list.results,
                    Err(e) => error!("Error fetching popular movies: {:#}", e),
                }
                match top_rated {
                    Ok(list) => self.state.top_rated_movies = list.results,
                    Err(e) => error!("Error fetching top rated movies: {:#}", e),
                }
                self.state.loading = false;
                info!(
                    "Loaded {} popular and {} top rated movies",
                    self.state.popular_movies.len(),
                    self.state.top_rated_movies.len()
                );
            }
            ViewEvent::DetailLoaded { seq, id, result } => {
                if seq != self.route_seq {
                    debug!("Dropping stale details for movie {}", id);
                    return;
                }
                match result {
                    Ok(movie) => self.state.selected_movie = Some(movie),
                    Err(e) => error!("Error fetching movie details for {}: {:#}", id, e),
                }
            }
            ViewEvent::SearchLoaded { seq, query, result } => {
                if seq != self.query_seq {
                    debug!("Dropping stale search results for '{}'", query);
                    return;
                }
                match result {
                    Ok(list) => self.state.search_results = list.results,
                    Err(e) => error!("Error searching movies for '{}': {:#}", query, e),
                }
            }
        }
    }

    /// Waits for the next fetch to finish. `None` once nothing is in flight.
    ///
    /// If the list task dies, both lists are reported as failed so `loading`
    /// still clears.
    pub async fn next_event(&mut self) -> Option<ViewEvent> {
        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok(event) => {
                    if matches!(event, ViewEvent::ListsSettled { .. }) {
                        self.lists_task = None;
                    }
                    return Some(event);
                }
                Err(e) if self.lists_task == Some(e.id()) => {
                    self.lists_task = None;
                    error!("List fetch task did not complete: {}", e);
                    return Some(ViewEvent::ListsSettled {
                        popular: Err(anyhow!("fetch failed: list task ended: {}", e)),
                        top_rated: Err(anyhow!("fetch failed: list task ended: {}", e)),
                    });
                }
                Err(e) => error!("Fetch task did not complete: {}", e),
            }
        }
        None
    }

    /// Applies completions until every in-flight fetch has settled.
    pub async fn settle(&mut self) {
        while let Some(event) = self.next_event().await {
            self.apply(event);
        }
    }

    /// Picks the render mode for the current state.
    pub fn screen(&self) -> Screen {
        if self.state.loading {
            return Screen::Loading;
        }
        let body = if self.state.search_query.is_empty() {
            Body::Browse {
                popular: cards(&self.state.popular_movies, &self.config),
                top_rated: cards(&self.state.top_rated_movies, &self.config),
            }
        } else {
            Body::Search {
                query: self.state.search_query.clone(),
                results: cards(&self.state.search_results, &self.config),
            }
        };
        let overlay = self
            .state
            .selected_movie
            .as_ref()
            .map(|m| DetailOverlay::new(m, &self.config));
        Screen::Ready { body, overlay }
    }

    fn fetch_lists(&mut self) {
        let api = self.api.clone();
        let handle = self.tasks.spawn(async move {
            let (popular, top_rated) = tokio::join!(api.popular(), api.top_rated());
            ViewEvent::ListsSettled { popular, top_rated }
        });
        self.lists_task = Some(handle.id());
    }

    fn run_route_effect(&mut self) {
        self.route_seq += 1;
        self.state.selected_movie = None;
        let Some(id) = self.route.movie_id().map(str::to_string) else {
            return;
        };

        let api = self.api.clone();
        let seq = self.route_seq;
        self.tasks.spawn(async move {
            let result = api.details(&id).await;
            ViewEvent::DetailLoaded { seq, id, result }
        });
    }
}
