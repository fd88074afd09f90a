use crate::config::Config;
use crate::home::HomeView;
use crate::page::render_page;
use crate::route::Route;
use crate::search::SearchBox;
use crate::tmdb::{MovieApi, TmdbClient};
use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn MovieApi>,
    pub config: Arc<Config>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub q: Option<String>,
}

pub async fn run_server(config: Config) -> Result<()> {
    let addr = config.listen_addr;
    let config = Arc::new(config);
    let api: Arc<dyn MovieApi> = Arc::new(TmdbClient::new(&config));
    let app = build_router(AppState { api, config });

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/movie/:id", get(movie))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn home(State(state): State<AppState>, Query(params): Query<PageQuery>) -> Html<String> {
    render_route(&state, Route::Root, params.q).await
}

async fn movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<PageQuery>,
) -> Html<String> {
    render_route(&state, Route::Movie(id), params.q).await
}

/// One request is one mount: the view fetches what the route and query need,
/// settles, renders, and is dropped.
async fn render_route(state: &AppState, route: Route, query: Option<String>) -> Html<String> {
    let mut view = HomeView::mount(state.api.clone(), state.config.clone(), route);

    let mut search = SearchBox::new();
    search.input(query.unwrap_or_default());
    if let Some(query) = search.submit() {
        view.set_query(query);
    }

    view.settle().await;
    debug!(route = %view.route(), query = %view.state().search_query, "Rendering page");
    Html(render_page(
        &view.screen(),
        view.route(),
        &view.state().search_query,
    ))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        let mut term = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        term.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Shutdown signal received (Ctrl+C)");
        }
        _ = terminate => {
            info!("Shutdown signal received (SIGTERM)");
        }
    }
}
