use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

use thiserror::Error;
use tracing::error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing configuration: {0}")]
    Configuration(&'static str),

    #[error("Upstream provider error: {0}")]
    Upstream(String),

    // ! Kept at 500 on purpose: the deployed functions never returned 401
    // ! for a missing/bad token. See the open question in DESIGN.md.
    #[error("Missing or unresolvable authorization token")]
    Unauthenticated,

    #[error("cannot invite yourself")]
    SelfInvite,

    #[error("already a collaborator or has a pending invite for this project")]
    DuplicateInvite,

    #[error("Dependency error: {0}")]
    Dependency(String),

    #[error("Io Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Validator Error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Json Rejection Error: {0}")]
    AxumJsonRejection(#[from] axum::extract::rejection::JsonRejection),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            Error::Configuration(key) => {
                error!("Missing configuration: {key}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Missing configuration: {key}"),
                )
            }
            Error::Upstream(detail) => {
                error!("Upstream provider error: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, detail)
            }
            Error::Unauthenticated => {
                error!("Unauthenticated request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Missing or unresolvable authorization token".to_string(),
                )
            }
            Error::SelfInvite => {
                tracing::info!("Rejected self-invite");
                (
                    StatusCode::BAD_REQUEST,
                    "cannot invite yourself".to_string(),
                )
            }
            Error::DuplicateInvite => {
                tracing::info!("Rejected duplicate invitation");
                (
                    StatusCode::CONFLICT,
                    "already a collaborator or has a pending invite for this project".to_string(),
                )
            }
            Error::Dependency(detail) => {
                error!("Dependency error: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, detail)
            }
            Error::IoError(err) => {
                error!("Io Error: {err:#?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::ValidationError(err) => {
                let message = format!("Input validation error: [{}]", err).replace('\n', ", ");
                error!("Validation Error: {err:#?}");
                (StatusCode::BAD_REQUEST, message)
            }
            Error::AxumJsonRejection(err) => {
                error!("Json Rejection Error: {err:#?}");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
