use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CollaborationStatus {
    Pending,
    Accepted,
}

/// Persisted grant of project access from an owner to an invitee.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Collaboration {
    pub id: String,
    pub owner_id: String,
    pub user_id: Option<String>, // ! set only once the invitee is registered
    pub email: String,           // ! addressing key while user_id is absent
    pub project_ids: Vec<i64>,
    pub status: CollaborationStatus,
    pub permissions: serde_json::Value,
    pub created_at: String,
}

/// Insert shape; the store assigns the id.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NewCollaboration {
    pub owner_id: String,
    pub user_id: Option<String>,
    pub email: String,
    pub project_ids: Vec<i64>,
    pub status: CollaborationStatus,
    pub permissions: serde_json::Value,
    pub created_at: String,
}

/// Duplicate-check query: one identity arm plus a project overlap set.
///
/// A registered invitee is matched by account id regardless of status; an
/// unregistered one only by email with a still-pending grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityFilter {
    UserId(String),
    PendingEmail(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaborationFilter {
    pub identity: IdentityFilter,
    pub project_ids: Vec<i64>,
}

impl CollaborationFilter {
    pub fn for_user(user_id: impl Into<String>, project_ids: &[i64]) -> Self {
        Self {
            identity: IdentityFilter::UserId(user_id.into()),
            project_ids: project_ids.to_vec(),
        }
    }

    pub fn for_pending_email(email: impl Into<String>, project_ids: &[i64]) -> Self {
        Self {
            identity: IdentityFilter::PendingEmail(email.into()),
            project_ids: project_ids.to_vec(),
        }
    }

    /// In-memory evaluation of the same predicate the store runs remotely.
    pub fn matches(&self, record: &Collaboration) -> bool {
        let identity_hit = match &self.identity {
            IdentityFilter::UserId(user_id) => record.user_id.as_deref() == Some(user_id),
            IdentityFilter::PendingEmail(email) => {
                record.email == *email && record.status == CollaborationStatus::Pending
            }
        };
        identity_hit
            && record
                .project_ids
                .iter()
                .any(|id| self.project_ids.contains(id))
    }
}
