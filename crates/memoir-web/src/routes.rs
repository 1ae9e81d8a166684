//! Router and request handlers.
//!
//! Each page view re-runs filter → render over the in-memory dataset;
//! handlers do nothing but lookups, so there are no suspension points
//! beyond the framework's own.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use memoir_core::Person;
use memoir_search::{filter_prefix, SearchField};

use crate::render::{self, Selection};
use crate::state::AppState;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(browse))
        .route("/api/people", get(api_people))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Query parameters of the browsing page.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseParams {
    /// Search query; absent and empty both mean "no search".
    #[serde(default)]
    pub q: Option<String>,
    /// Field the query matches against.
    #[serde(default)]
    pub field: Option<SearchField>,
    /// Selected person's identifier.
    #[serde(default)]
    pub id: Option<String>,
}

async fn browse(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BrowseParams>,
) -> Html<String> {
    let index = state.dataset().index();
    let query = params.q.as_deref().unwrap_or("");
    let field = params.field.unwrap_or_default();

    let matches = filter_prefix(index.people(), query, field);
    tracing::debug!(
        query,
        matches = matches.len(),
        "filtered roster"
    );

    let selection = match params.id.as_deref().and_then(|id| index.get(id)) {
        Some(person) => Selection::Selected {
            person,
            testimonials: state.dataset().testimonials_for(&person.identifier),
        },
        None => Selection::Empty,
    };

    Html(render::page(
        &state.config().page_title,
        query,
        field,
        &matches,
        selection,
        index,
    ))
}

/// Query parameters of the JSON search endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Search query.
    #[serde(default)]
    pub q: String,
    /// Field the query matches against.
    #[serde(default)]
    pub field: SearchField,
}

async fn api_people(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Person>> {
    let matches = filter_prefix(state.dataset().index().people(), &params.q, params.field);
    Json(matches.into_iter().cloned().collect())
}

async fn healthz(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "people": state.dataset().index().len(),
    }))
}
