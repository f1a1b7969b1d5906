use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::middleware::map_request;
use axum::ServiceExt;
use tower::Layer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use poke_party::http;
use poke_party::Party;

const LISTEN_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "poke_party=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let party = Arc::new(Party::demo());
    tracing::info!("Loaded demo party with {} Pokemon", party.len());

    // Path cleaning must wrap the router so it runs before route matching.
    let app = map_request(http::clean_request).layer(http::router(party));

    let addr = SocketAddr::from(([0, 0, 0, 0], LISTEN_PORT));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Received Ctrl+C, shutting down");
        })
        .await?;

    Ok(())
}
