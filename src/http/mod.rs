//! HTTP facade for the party service.
//!
//! The router exposes exactly three read-only routes over the party plus
//! a structured JSON 404 for everything else. Request paths are cleaned
//! before routing (see [`clean_request`]) so redundant separators and
//! `.`/`..` segments resolve to the canonical route shapes.

mod handlers;
mod normalize;
mod render;

pub use normalize::clean_request;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::party::Party;

/// Create the service routes.
pub fn router(party: Arc<Party>) -> Router {
    Router::new()
        .route("/party", get(handlers::get_party))
        .route("/party/{index}", get(handlers::get_pokemon))
        .route("/party/{index}/move", get(handlers::get_move))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(party)
}
