use async_trait::async_trait;

use crate::{
    errors::Result,
    models::{
        collaboration::{Collaboration, CollaborationFilter, NewCollaboration},
        identity::Identity,
    },
};

pub mod supabase;

/// Exchanges a caller-supplied access token for the caller's account.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<Option<Identity>>;
}

/// Administrative account lookup. Absence of an account is a state, not an
/// error.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>>;
}

/// Collaboration record store. All failures surface as `Error::Dependency`.
#[async_trait]
pub trait CollaborationStore: Send + Sync {
    async fn query(&self, filter: &CollaborationFilter) -> Result<Vec<Collaboration>>;
    async fn insert(&self, record: NewCollaboration) -> Result<Collaboration>;
}
