use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub supabase_service_key: String,
    pub rates_api_base: String,
    /// Absent key is not fatal at startup; the rates endpoint reports it
    /// as a configuration error per request.
    pub rates_api_key: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "8000"),
            supabase_url: require("SUPABASE_URL"),
            supabase_anon_key: require("SUPABASE_ANON_KEY"),
            supabase_service_key: require("SUPABASE_SERVICE_ROLE_KEY"),
            rates_api_base: try_load("EXCHANGE_RATE_API_BASE", "https://v6.exchangerate-api.com/v6"),
            rates_api_key: var("EXCHANGE_RATE_API_KEY").ok(),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn require(key: &str) -> String {
    var(key).expect("Environment misconfigured!")
}
