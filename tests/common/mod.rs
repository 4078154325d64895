// Each integration binary pulls in only the helpers it needs.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use budgeteer_functions::{
    app,
    config::Config,
    errors::{Error, Result},
    gateway::{AuthGateway, CollaborationStore, UserDirectory},
    models::{
        collaboration::{Collaboration, CollaborationFilter, NewCollaboration},
        identity::Identity,
    },
    state::AppState,
};

pub fn test_config() -> Config {
    Config {
        port: 0,
        supabase_url: "http://supabase.invalid".to_string(),
        supabase_anon_key: "anon".to_string(),
        supabase_service_key: "service".to_string(),
        rates_api_base: "http://rates.invalid".to_string(),
        rates_api_key: Some("test-key".to_string()),
    }
}

pub struct FakeAuth {
    pub identity: Option<Identity>,
    pub calls: Mutex<usize>,
}

impl FakeAuth {
    pub fn resolving(identity: Option<Identity>) -> Arc<Self> {
        Arc::new(Self {
            identity,
            calls: Mutex::new(0),
        })
    }
}

#[async_trait]
impl AuthGateway for FakeAuth {
    async fn resolve(&self, _token: &str) -> Result<Option<Identity>> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.identity.clone())
    }
}

pub struct FakeDirectory(pub Vec<Identity>);

#[async_trait]
impl UserDirectory for FakeDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>> {
        Ok(self.0.iter().find(|i| i.email == email).cloned())
    }
}

#[derive(Default)]
pub struct FakeStore {
    pub records: Mutex<Vec<Collaboration>>,
}

impl FakeStore {
    pub fn with_records(records: Vec<Collaboration>) -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(records),
        })
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl CollaborationStore for FakeStore {
    async fn query(&self, filter: &CollaborationFilter) -> Result<Vec<Collaboration>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().filter(|r| filter.matches(r)).cloned().collect())
    }

    async fn insert(&self, record: NewCollaboration) -> Result<Collaboration> {
        let mut records = self.records.lock().unwrap();
        let created = Collaboration {
            id: format!("c{}", records.len() + 1),
            owner_id: record.owner_id,
            user_id: record.user_id,
            email: record.email,
            project_ids: record.project_ids,
            status: record.status,
            permissions: record.permissions,
            created_at: record.created_at,
        };
        records.push(created.clone());
        Ok(created)
    }
}

/// Store double whose every operation fails, for dependency-error paths.
pub struct BrokenStore;

#[async_trait]
impl CollaborationStore for BrokenStore {
    async fn query(&self, _filter: &CollaborationFilter) -> Result<Vec<Collaboration>> {
        Err(Error::Dependency("store unavailable".to_string()))
    }

    async fn insert(&self, _record: NewCollaboration) -> Result<Collaboration> {
        Err(Error::Dependency("store unavailable".to_string()))
    }
}

pub fn identity(id: &str, email: &str) -> Identity {
    Identity {
        id: id.to_string(),
        email: email.to_string(),
    }
}

pub fn app_with(
    config: Config,
    auth: Arc<dyn AuthGateway>,
    directory: Arc<dyn UserDirectory>,
    store: Arc<dyn CollaborationStore>,
) -> Router {
    app(AppState::with_gateways(config, auth, directory, store))
}

pub async fn send(router: Router, request: Request<Body>) -> Response<Body> {
    router.oneshot(request).await.unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
