//! Web server module for the Yulduz timetable viewer.
//!
//! Provides the two-route HTTP surface: the landing page and the filtered
//! timetable view. Each `/timetable` request opens its own database
//! connection through `yulduzdb`, renders the rows (or the empty-result
//! message) and releases the connection before responding. Requests share
//! no mutable state.
//!
use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use yulduzdb::fetch::fetch_timetable;

use crate::{
    config::Config,
    html::{INDEX_PAGE, NO_DATA_MESSAGE, timetable_page},
};

/// Application state shared by the handlers
pub(crate) struct AppState {
    /// Process configuration, read once at startup
    pub(crate) config: Config,
}

/// Query string accepted by the timetable route
#[derive(Deserialize)]
pub(crate) struct TimetableQuery {
    /// Requested academic level; absence means a bad request
    pub(crate) level: Option<String>,
}

/// Start the web server on the configured port
pub async fn run(config: Config) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.web_port));

    println!(
        "🗄️ Timetable database at {}:{}/{}",
        config.db.host, config.db.port, config.db.dbname
    );

    let state = Arc::new(AppState { config });

    let app = Router::new()
        .route("/", get(index_page))
        .route("/timetable", get(show_timetable))
        .with_state(state);

    println!("🌐 Timetable UI at http://{addr}/");

    axum_server::bind(addr).serve(app.into_make_service()).await
}

/// Display the landing page with the level form
async fn index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Display the timetable filtered by the requested level
///
/// Missing or empty levels are rejected up front with a 400 and never
/// reach the database. A database failure is logged and surfaced as a
/// plain 500 with no partial output.
async fn show_timetable(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TimetableQuery>,
) -> Response {
    let level = match query.level.as_deref() {
        Some(level) if !level.is_empty() => level,
        _ => return (StatusCode::BAD_REQUEST, "Enter a level").into_response(),
    };

    match fetch_timetable(&state.config.db, level).await {
        Ok(entries) => {
            let message = if entries.is_empty() {
                Some(NO_DATA_MESSAGE)
            } else {
                None
            };
            Html(timetable_page(&entries, message, level)).into_response()
        }
        Err(e) => {
            eprintln!("💥 Timetable lookup for level {level} failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yulduzdb::config::DbConfig;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState {
            config: Config {
                web_port: 0,
                db: DbConfig::from_env(),
            },
        })
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    /// The landing page always renders, no state or parameters involved
    #[tokio::test]
    async fn index_always_renders() {
        let Html(page) = index_page().await;
        assert!(page.contains("<form action=\"/timetable\""));
    }

    /// A request without a level is rejected before any database access
    #[tokio::test]
    async fn missing_level_is_bad_request() {
        let response =
            show_timetable(State(test_state()), Query(TimetableQuery { level: None })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Enter a level");
    }

    /// An empty level is treated the same as a missing one
    #[tokio::test]
    async fn empty_level_is_bad_request() {
        let response = show_timetable(
            State(test_state()),
            Query(TimetableQuery {
                level: Some(String::new()),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Enter a level");
    }
}
