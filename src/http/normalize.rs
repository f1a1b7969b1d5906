//! Request path cleaning, applied before routing.
//!
//! Inbound paths may carry redundant separators or `.`/`..` segments
//! (`//party`, `/party/../party`). Those are resolved here so the router
//! only ever sees canonical paths. The middleware has to wrap the whole
//! router (`map_request(clean_request).layer(router)`); a layer added on
//! the router itself would run after route matching.

use axum::extract::Request;
use axum::http::uri::{PathAndQuery, Uri};

/// Rewrites the request URI with a cleaned path.
pub async fn clean_request(mut request: Request) -> Request {
    let cleaned = clean_path(request.uri().path());
    if cleaned == request.uri().path() {
        return request;
    }

    tracing::debug!("normalized path {} -> {}", request.uri().path(), cleaned);

    let path_and_query = match request.uri().query() {
        Some(query) => format!("{cleaned}?{query}"),
        None => cleaned,
    };
    if let Ok(path_and_query) = path_and_query.parse::<PathAndQuery>() {
        let mut parts = request.uri().clone().into_parts();
        parts.path_and_query = Some(path_and_query);
        if let Ok(uri) = Uri::from_parts(parts) {
            *request.uri_mut() = uri;
        }
    }
    request
}

/// Lexically cleans a rooted path: collapses repeated separators, drops
/// `.` segments, and resolves `..` without escaping the root.
fn clean_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            segment => segments.push(segment),
        }
    }

    let mut cleaned = String::from("/");
    cleaned.push_str(&segments.join("/"));
    cleaned
}
