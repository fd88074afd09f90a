//! Server-side HTML for a home view screen.

use std::fmt::Write;

use crate::card::MovieCard;
use crate::detail::DetailOverlay;
use crate::home::{Body, Screen, POPULAR_TITLE, SEARCH_TITLE, TOP_RATED_TITLE};
use crate::route::Route;

const STYLE: &str = "body{font-family:sans-serif;margin:0;background:#fafafa}\
header{background:#1976d2;color:#fff;padding:12px 24px;font-size:1.25rem}\
main{max-width:1200px;margin:0 auto;padding:0 16px}\
form.search{margin:32px 0}form.search input{width:80%;padding:10px;font-size:1rem}\
.grid{display:flex;flex-wrap:wrap;justify-content:center;gap:16px}\
.card{width:200px;background:#fff;border-radius:4px;box-shadow:0 1px 3px #0003;color:inherit;text-decoration:none}\
.card img{width:100%;height:300px;object-fit:cover}.card .body{padding:8px}\
.muted{color:#666;font-size:.9rem}\
.backdrop{position:fixed;inset:0;background:#0008;z-index:999}\
.overlay{position:fixed;top:50%;left:50%;transform:translate(-50%,-50%);width:90%;max-width:1200px;\
max-height:90vh;overflow:auto;background:#fff;z-index:1000;padding:24px;border-radius:8px}\
.overlay .close{position:absolute;right:16px;top:12px;font-size:1.5rem;text-decoration:none}\
.chip{display:inline-block;background:#eee;border-radius:12px;padding:2px 10px;margin:0 6px 6px 0}";

/// Renders the whole document. `query` is echoed into the search field and
/// carried on card links so opening a detail keeps the search underneath.
pub fn render_page(screen: &Screen, route: &Route, query: &str) -> String {
    let mut html = String::with_capacity(16 * 1024);
    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>Movie Database</title><style>{STYLE}</style></head><body>\
         <header>Movie Database</header><main>"
    );
    render_search_form(&mut html, route, query);

    match screen {
        Screen::Loading => html.push_str("<p class=\"muted\">Loading…</p>"),
        Screen::Ready { body, overlay } => {
            if let Some(overlay) = overlay {
                render_overlay(&mut html, overlay, query);
            }
            render_body(&mut html, body, query);
        }
    }

    html.push_str("</main></body></html>");
    html
}

fn render_search_form(html: &mut String, route: &Route, query: &str) {
    let _ = write!(
        html,
        "<form class=\"search\" method=\"get\" action=\"{}\">\
         <input type=\"text\" name=\"q\" placeholder=\"Search movie title...\" value=\"{}\">\
         <button type=\"submit\">Search</button></form>",
        escape(&route.to_string()),
        escape(query)
    );
}

fn render_body(html: &mut String, body: &Body, query: &str) {
    match body {
        Body::Browse { popular, top_rated } => {
            render_section(html, POPULAR_TITLE, popular, query);
            render_section(html, TOP_RATED_TITLE, top_rated, query);
        }
        Body::Search { results, .. } => {
            html.push_str("<section id=\"search\"><p><a href=\"/\">Home</a></p>");
            let _ = write!(html, "<h1>{}</h1>", SEARCH_TITLE);
            match body.no_results_message() {
                Some(message) => {
                    let _ = write!(html, "<p class=\"muted\">{}</p>", escape(&message));
                }
                None => render_grid(html, results, query),
            }
            html.push_str("</section>");
        }
    }
}

fn render_section(html: &mut String, title: &str, cards: &[MovieCard], query: &str) {
    let _ = write!(html, "<section><h2>{}</h2>", escape(title));
    render_grid(html, cards, query);
    html.push_str("</section>");
}

fn render_grid(html: &mut String, cards: &[MovieCard], query: &str) {
    html.push_str("<div class=\"grid\">");
    for card in cards {
        render_card(html, card, query);
    }
    html.push_str("</div>");
}

fn render_card(html: &mut String, card: &MovieCard, query: &str) {
    let href = with_query(&card.click(), query);
    let _ = write!(
        html,
        "<a class=\"card\" href=\"{}\"><img src=\"{}\" alt=\"{}\"><div class=\"body\">\
         <div class=\"title\">{}</div>",
        escape(&href),
        escape(card.poster_url.as_deref().unwrap_or_default()),
        escape(&card.title),
        escape(&card.title)
    );
    if let Some(year) = card.year {
        let _ = write!(html, "<div class=\"muted\">{}</div>", year);
    }
    let _ = write!(
        html,
        "<div class=\"muted\">{}</div></div></a>",
        escape(&card.rating_label())
    );
}

fn render_overlay(html: &mut String, overlay: &DetailOverlay, query: &str) {
    let close = escape(&with_query(&overlay.close_route(), query));
    let _ = write!(
        html,
        "<a class=\"backdrop\" href=\"{close}\"></a><div class=\"overlay\" id=\"detail\">\
         <a class=\"close\" href=\"{close}\" aria-label=\"Close\">&times;</a>\
         <img src=\"{}\" alt=\"{}\" style=\"float:left;width:25%;margin-right:24px;border-radius:8px\">\
         <h1>{}</h1>",
        escape(overlay.poster_url.as_deref().unwrap_or_default()),
        escape(&overlay.title),
        escape(&overlay.title)
    );
    if let Some(tagline) = &overlay.tagline {
        let _ = write!(html, "<p><em>{}</em></p>", escape(tagline));
    }
    html.push_str("<div>");
    for genre in &overlay.genres {
        let _ = write!(html, "<span class=\"chip\">{}</span>", escape(genre));
    }
    let _ = write!(
        html,
        "</div><p class=\"muted\">{}</p><dl>\
         <dt>Release Date</dt><dd>{}</dd><dt>Rating</dt><dd>&#9733; {}</dd>\
         <dt>Runtime</dt><dd>{}</dd><dt>Budget</dt><dd>{}</dd></dl></div>",
        escape(&overlay.overview),
        escape(&overlay.release_date),
        escape(&overlay.rating),
        escape(&overlay.runtime),
        escape(&overlay.budget)
    );
}

fn with_query(route: &Route, query: &str) -> String {
    if query.is_empty() {
        route.to_string()
    } else {
        format!("{}?q={}", route, urlencoding::encode(query))
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: i64, title: &str) -> MovieCard {
        MovieCard {
            id,
            title: title.to_string(),
            poster_url: None,
            year: Some(1999),
            rating: "8.2".to_string(),
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape("<b>\"Tom & Jerry's\"</b>"),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn browse_page_has_both_sections() {
        let screen = Screen::Ready {
            body: Body::Browse {
                popular: vec![card(1, "A"), card(2, "B")],
                top_rated: vec![card(3, "C")],
            },
            overlay: None,
        };
        let html = render_page(&screen, &Route::Root, "");
        assert!(html.contains("<h2>Popular Movies</h2>"));
        assert!(html.contains("<h2>Top Rated Movies</h2>"));
        assert_eq!(html.matches("class=\"card\"").count(), 3);
        assert!(html.contains("href=\"/movie/3\""));
        assert!(!html.contains("id=\"detail\""));
    }

    #[test]
    fn search_page_keeps_query_on_card_links() {
        let screen = Screen::Ready {
            body: Body::Search {
                query: "the matrix".to_string(),
                results: vec![card(10, "The Matrix")],
            },
            overlay: None,
        };
        let html = render_page(&screen, &Route::Root, "the matrix");
        assert!(html.contains("<h1>Search Results</h1>"));
        assert!(html.contains("href=\"/movie/10?q=the%20matrix\""));
        assert!(html.contains("value=\"the matrix\""));
    }

    #[test]
    fn empty_search_shows_message() {
        let screen = Screen::Ready {
            body: Body::Search {
                query: "zzz".to_string(),
                results: Vec::new(),
            },
            overlay: None,
        };
        let html = render_page(&screen, &Route::Root, "zzz");
        assert!(html.contains("No movies found for &quot;zzz&quot;"));
    }

    #[test]
    fn loading_page_has_no_sections() {
        let html = render_page(&Screen::Loading, &Route::Root, "");
        assert!(html.contains("Loading"));
        assert!(!html.contains("Popular Movies"));
    }
}
