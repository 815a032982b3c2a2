use crate::{signal, state::Zustand};
use eyre::Context;
use http::HeaderName;
use std::net::Ipv4Addr;
use tokio::net::TcpListener;
use vitrine_config::server;

pub mod guard;
pub mod handler;
pub mod router;

pub(crate) static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

#[instrument(skip_all, fields(port = %server_config.port))]
pub async fn run(
    state: Zustand,
    server_config: server::Configuration,
    shutdown_signal: signal::Receiver,
) -> eyre::Result<()> {
    let router = router::create(state, &server_config);
    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, server_config.port))
        .await
        .context("Failed to bind to the server port")?;

    info!("serving on port {}", server_config.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal.wait())
        .await
        .map_err(eyre::Report::from)
}
