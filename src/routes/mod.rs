use axum::{
    Router,
    http::{HeaderName, header},
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    consts::cors_const::{ALLOW_HEADERS, ALLOW_ORIGIN},
    routes::{collaborator::invite_collaborator, rates::get_exchange_rates},
    state::AppState,
};

pub mod collaborator;
pub mod rates;

pub fn function_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/get-exchange-rates",
            get(get_exchange_rates)
                .post(get_exchange_rates)
                .options(preflight),
        )
        .route(
            "/invite-collaborator",
            post(invite_collaborator).options(preflight),
        )
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Preflight short-circuit: answered before any handler logic runs, with the
/// same header set the deployed functions used.
async fn preflight() -> impl IntoResponse {
    (
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS),
        ],
        "ok",
    )
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}
