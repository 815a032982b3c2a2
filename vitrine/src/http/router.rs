use super::{X_REQUEST_ID, guard, handler};
use crate::state::Zustand;
use axum::{Router, middleware::from_fn_with_state, routing};
use doppel::CsrfLayer;
use std::time::Duration;
use tower::Layer as _;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use vitrine_config::server;

pub fn create(state: Zustand, server_config: &server::Configuration) -> Router {
    let frontend_index_path = {
        let mut tmp = server_config.frontend_dir.to_string();
        tmp.push_str("index.html");
        tmp
    };

    // Token issuance wraps the page routes only; API routes read the pair
    // but never write it
    let frontend = CsrfLayer::new(server_config.secure_cookies).layer(
        ServeDir::new(server_config.frontend_dir.as_str())
            .fallback(ServeFile::new(frontend_index_path)),
    );

    let api = Router::new()
        .route(
            "/analytics",
            routing::post(handler::analytics::post)
                .route_layer(from_fn_with_state(state.clone(), guard::analytics)),
        )
        .route(
            "/analyze-job",
            routing::post(handler::analyze_job::post)
                .route_layer(from_fn_with_state(state.clone(), guard::analyze_job)),
        )
        .route(
            "/chat",
            routing::post(handler::chat::post)
                .route_layer(from_fn_with_state(state.clone(), guard::chat)),
        )
        .route(
            "/contact",
            routing::post(handler::contact::post)
                .route_layer(from_fn_with_state(state.clone(), guard::contact)),
        );

    Router::new()
        .nest("/api", api)
        .fallback_service(frontend)
        .layer(CatchPanicLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(
            server_config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID.clone()))
        .layer(SetRequestIdLayer::new(
            X_REQUEST_ID.clone(),
            MakeRequestUuid,
        ))
        .with_state(state)
}
