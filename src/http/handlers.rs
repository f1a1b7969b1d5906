//! Handlers for the three party routes and the 404 fallback.
//!
//! The index segment is extracted as a raw string and parsed here so a
//! bad segment produces this service's own `{"error": ...}` body rather
//! than the framework's default rejection. Every error arm returns its
//! response immediately; no handler keeps executing past a failure.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::Response;

use super::render;
use crate::party::Party;

/// GET /party - the full roster.
pub async fn get_party(State(party): State<Arc<Party>>) -> Response {
    render::ok(party.as_ref(), StatusCode::OK)
}

/// GET /party/{index} - a single member by position.
pub async fn get_pokemon(
    State(party): State<Arc<Party>>,
    Path(index): Path<String>,
) -> Response {
    let index = match index.parse::<usize>() {
        Ok(index) => index,
        Err(err) => return render::error(err, StatusCode::BAD_REQUEST),
    };

    render::ok(party.get_clamped(index), StatusCode::OK)
}

/// GET /party/{index}/move - the move list of a single member.
///
/// Serves the plain view; the Dynamax view is not exposed over HTTP. The
/// error arm still maps a move error to a 500 so the propagation path
/// stays in place should the amplified view ever be requested here.
pub async fn get_move(
    State(party): State<Arc<Party>>,
    Path(index): Path<String>,
) -> Response {
    let index = match index.parse::<usize>() {
        Ok(index) => index,
        Err(err) => return render::error(err, StatusCode::BAD_REQUEST),
    };

    let pokemon = party.get_clamped(index);
    match pokemon.moves(false) {
        Ok(moves) => render::ok(&moves, StatusCode::OK),
        Err(err) => render::error(err, StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Fallback for every path that matches none of the route shapes.
pub async fn not_found(uri: Uri) -> Response {
    render::error(
        format!("no route for {}", uri.path()),
        StatusCode::NOT_FOUND,
    )
}
