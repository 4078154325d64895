use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    config::Config,
    consts::store_const::{COLLABORATOR_TABLE, PROFILE_TABLE},
    errors::{Error, Result},
    models::{
        collaboration::{Collaboration, CollaborationFilter, IdentityFilter, NewCollaboration},
        identity::Identity,
    },
};

/// Auth capability over the platform's GoTrue endpoint, authenticated as the
/// caller (anon key + caller bearer).
#[derive(Debug, Clone)]
pub struct SupabaseAuth {
    http: Client,
    base: String,
    anon_key: String,
}

impl SupabaseAuth {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            base: config.supabase_url.clone(),
            anon_key: config.supabase_anon_key.clone(),
        }
    }
}

#[async_trait]
impl super::AuthGateway for SupabaseAuth {
    async fn resolve(&self, token: &str) -> Result<Option<Identity>> {
        let response = self
            .http
            .get(format!("{}/auth/v1/user", self.base))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| Error::Dependency(format!("auth resolve: {e}")))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status if status.is_success() => {
                let identity = response
                    .json::<Identity>()
                    .await
                    .map_err(|e| Error::Dependency(format!("auth resolve: {e}")))?;
                Ok(Some(identity))
            }
            status => Err(Error::Dependency(format!(
                "auth resolve: unexpected status {status}"
            ))),
        }
    }
}

/// Administrative identity lookup against the mirrored profiles table,
/// authenticated with the service role key.
#[derive(Debug, Clone)]
pub struct SupabaseDirectory {
    http: Client,
    base: String,
    service_key: String,
}

impl SupabaseDirectory {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            base: config.supabase_url.clone(),
            service_key: config.supabase_service_key.clone(),
        }
    }
}

#[async_trait]
impl super::UserDirectory for SupabaseDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>> {
        let response = self
            .http
            .get(format!("{}/rest/v1/{}", self.base, PROFILE_TABLE))
            .query(&[
                ("select", "id,email".to_string()),
                ("email", format!("eq.{email}")),
            ])
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await
            .map_err(|e| Error::Dependency(format!("directory lookup: {e}")))?;

        let accounts = read_rows::<Identity>(response, "directory lookup").await?;
        Ok(accounts.into_iter().next())
    }
}

#[derive(Debug, Clone)]
pub struct SupabaseStore {
    http: Client,
    base: String,
    service_key: String,
}

impl SupabaseStore {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            base: config.supabase_url.clone(),
            service_key: config.supabase_service_key.clone(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base, COLLABORATOR_TABLE)
    }
}

#[async_trait]
impl super::CollaborationStore for SupabaseStore {
    async fn query(&self, filter: &CollaborationFilter) -> Result<Vec<Collaboration>> {
        // PostgREST `ov` is array overlap: any requested project already
        // covered by the record counts as a hit.
        let overlap = format!(
            "ov.{{{}}}",
            filter
                .project_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",")
        );

        let mut request = self
            .http
            .get(self.table_url())
            .query(&[("select", "*".to_string()), ("project_ids", overlap)]);

        request = match &filter.identity {
            IdentityFilter::UserId(user_id) => {
                request.query(&[("user_id", format!("eq.{user_id}"))])
            }
            IdentityFilter::PendingEmail(email) => request.query(&[
                ("email", format!("eq.{email}")),
                ("status", "eq.pending".to_string()),
            ]),
        };

        let response = request
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await
            .map_err(|e| Error::Dependency(format!("collaboration query: {e}")))?;

        read_rows(response, "collaboration query").await
    }

    async fn insert(&self, record: NewCollaboration) -> Result<Collaboration> {
        let response = self
            .http
            .post(self.table_url())
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "return=representation")
            .json(&record)
            .send()
            .await
            .map_err(|e| Error::Dependency(format!("collaboration insert: {e}")))?;

        let created = read_rows::<Collaboration>(response, "collaboration insert").await?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| Error::Dependency("collaboration insert: empty response".to_string()))
    }
}

async fn read_rows<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
    context: &str,
) -> Result<Vec<T>> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Dependency(format!(
            "{context}: status {status}: {body}"
        )));
    }
    response
        .json::<Vec<T>>()
        .await
        .map_err(|e| Error::Dependency(format!("{context}: {e}")))
}
