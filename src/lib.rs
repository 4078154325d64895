use axum::Router;

use crate::{routes::function_router, state::AppState};

pub mod config;
pub mod consts;
pub mod errors;
pub mod gateway;
pub mod models;
pub mod routes;
pub mod saga;
pub mod state;
pub mod utils;

pub fn app(state: AppState) -> Router {
    function_router(state)
}
