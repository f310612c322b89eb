use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use protscope_common::AutocompleteEntry;

use super::queries::AutocompleteQuery;
use crate::features::SharedSource;

pub fn autocomplete_routes() -> Router<SharedSource> {
    Router::new().route("/autocomplete", get(suggest))
}

#[tracing::instrument(skip(source, query), fields(q = ?query.q))]
async fn suggest(
    State(source): State<SharedSource>,
    Query(query): Query<AutocompleteQuery>,
) -> Json<Vec<AutocompleteEntry>> {
    let entries = super::queries::suggestions::handle(source.as_ref(), query).await;

    tracing::debug!(count = entries.len(), "Suggestions completed");

    Json(entries)
}
