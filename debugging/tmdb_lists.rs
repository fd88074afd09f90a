//! Fetch one TMDB list (or a search / a single movie) and print it as cards.
//! Usage:
//!   cargo run --bin tmdb_lists -- popular|top_rated|now_playing|upcoming
//!   cargo run --bin tmdb_lists -- search <query>
//!   cargo run --bin tmdb_lists -- movie <tmdb_id>
//! Requires TMDB_API_KEY in the environment (.env supported).

use anyhow::{bail, Context, Result};
use cinescope::card::cards;
use cinescope::config::Config;
use cinescope::detail::DetailOverlay;
use cinescope::tmdb::{MovieApi, TmdbClient};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
enum ListKind {
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
}

impl FromStr for ListKind {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "popular" => Ok(ListKind::Popular),
            "top_rated" => Ok(ListKind::TopRated),
            "now_playing" => Ok(ListKind::NowPlaying),
            "upcoming" => Ok(ListKind::Upcoming),
            _ => Err(anyhow::anyhow!(
                "list must be one of popular, top_rated, now_playing, upcoming"
            )),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    let config = Config::from_env()?;
    let client = TmdbClient::new(&config);

    let mut args = env::args().skip(1);
    let command = args.next().context("missing command (see usage)")?;
    let list = match command.as_str() {
        "movie" => {
            let id = args.next().context("movie requires a TMDB id")?;
            let detail = client.details(&id).await?;
            let overlay = DetailOverlay::new(&detail, &config);
            println!("{:#?}", overlay);
            return Ok(());
        }
        "search" => {
            let query = args.collect::<Vec<_>>().join(" ");
            if query.trim().is_empty() {
                bail!("search requires a query");
            }
            client.search(query.trim()).await?
        }
        other => match other.parse::<ListKind>()? {
            ListKind::Popular => client.popular().await?,
            ListKind::TopRated => client.top_rated().await?,
            ListKind::NowPlaying => client.now_playing().await?,
            ListKind::Upcoming => client.upcoming().await?,
        },
    };

    for card in cards(&list.results, &config) {
        println!(
            "{:>8}  {:<48} {:>6}  {}  {}",
            card.id,
            card.title,
            card.year.map(|y| y.to_string()).unwrap_or_default(),
            card.rating_label(),
            card.poster_url.as_deref().unwrap_or_default()
        );
    }
    println!(
        "{} results (page {:?} of {:?})",
        list.results.len(),
        list.page,
        list.total_pages
    );
    Ok(())
}
