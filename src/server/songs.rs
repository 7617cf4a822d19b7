//! Song catalog routes

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::debug;

use super::error::ApiError;
use super::metrics::record_query_error;
use super::state::{ServerState, SharedCatalog};
use crate::catalog::{parse_song_id, QueryError};

const SEARCH_QUERY_PARAM: &str = "q";

/// Query string pairs in request order, repeated keys included.
type QueryPairs = Vec<(String, String)>;

/// First value of the search parameter; later repeats are ignored.
fn first_search_query(pairs: QueryPairs) -> String {
    pairs
        .into_iter()
        .find(|(key, _)| key == SEARCH_QUERY_PARAM)
        .map(|(_, value)| value)
        .unwrap_or_default()
}

fn query_error_response(err: QueryError, endpoint: &str) -> Response {
    let api_error = ApiError::from(err);
    debug!("{} rejected: {}", endpoint, api_error.message);
    record_query_error(api_error.kind(), endpoint);
    api_error.into_response()
}

async fn get_songs(State(catalog): State<SharedCatalog>) -> Response {
    Json(catalog.list()).into_response()
}

async fn get_song(
    State(catalog): State<SharedCatalog>,
    id: Result<Path<String>, PathRejection>,
) -> Response {
    // A segment that is not valid UTF-8 is as invalid an id as "abc"
    let id = match id {
        Ok(Path(id)) => parse_song_id(&id),
        Err(rejection) => {
            debug!("Rejected song id segment: {}", rejection.body_text());
            Err(QueryError::invalid_song_id())
        }
    };
    match id.and_then(|id| catalog.get_song(id)) {
        Ok(song) => Json(song).into_response(),
        Err(err) => query_error_response(err, "/song/{id}"),
    }
}

async fn search_songs(
    State(catalog): State<SharedCatalog>,
    Query(pairs): Query<QueryPairs>,
) -> Response {
    let query = first_search_query(pairs);
    match catalog.search(&query) {
        Ok(songs) => Json(songs).into_response(),
        Err(err) => query_error_response(err, "/search"),
    }
}

pub fn make_song_routes(state: ServerState) -> Router {
    Router::new()
        .route("/songs", get(get_songs))
        .route("/song/{id}", get(get_song))
        .route("/search", get(search_songs))
        .with_state(state)
}
