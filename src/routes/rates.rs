use axum::{Json, extract::State};
use serde_json::Value;

use crate::{
    consts::rates_const::{BASE_CURRENCY, PROVIDER_SUCCESS, UNKNOWN_ERROR},
    errors::{Error, Result},
    state::AppState,
};

pub async fn get_exchange_rates(State(state): State<AppState>) -> Result<Json<Value>> {
    let snapshot = fetch_latest_rates(&state).await?;
    Ok(Json(snapshot))
}

/// One upstream call per invocation, no retry, no caching. The provider
/// payload is passed through verbatim on success.
pub async fn fetch_latest_rates(state: &AppState) -> Result<Value> {
    let key = state
        .config
        .rates_api_key
        .as_deref()
        .ok_or(Error::Configuration("EXCHANGE_RATE_API_KEY"))?;

    let url = format!(
        "{}/{}/latest/{}",
        state.config.rates_api_base, key, BASE_CURRENCY
    );
    let response = state
        .http
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Upstream(format!("rate provider unreachable: {e}")))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Upstream(format!("rate provider body unreadable: {e}")))?;

    if !status.is_success() {
        return Err(Error::Upstream(format!(
            "rate provider returned status {status}: {body}"
        )));
    }

    let payload: Value = serde_json::from_str(&body)
        .map_err(|e| Error::Upstream(format!("rate provider sent invalid JSON: {e}")))?;

    // The provider reports logical failures inside a 200 response.
    if payload.get("result").and_then(Value::as_str) != Some(PROVIDER_SUCCESS) {
        let code = payload
            .get("error-type")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_ERROR);
        return Err(Error::Upstream(format!("rate provider error: {code}")));
    }

    Ok(payload)
}
