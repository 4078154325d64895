use axum::http::{HeaderMap, header::AUTHORIZATION};

/// Pulls the bearer token out of the `Authorization` header, if any.
///
/// A missing header, a non-Bearer scheme, or an empty token all yield `None`;
/// deciding whether that is an error belongs to the caller.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let header_value = headers.get(AUTHORIZATION)?.to_str().ok()?;

    let mut parts = header_value.trim().splitn(2, ' ');
    let scheme = parts.next()?;
    let token = parts.next()?;

    if scheme != "Bearer" {
        tracing::warn!("Invalid auth scheme: {scheme}");
        return None;
    }

    (!token.is_empty()).then_some(token)
}
