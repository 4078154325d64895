use tracing::info;

use crate::{
    errors::{Error, Result},
    models::collaboration::{
        Collaboration, CollaborationFilter, CollaborationStatus, NewCollaboration,
    },
    state::AppState,
    utils::time::time_now,
};

#[derive(Debug, Clone)]
pub struct InviteRequest {
    pub invitee_email: String,
    pub permissions: serde_json::Value,
    pub project_ids: Vec<i64>,
}

/// Invites a collaborator on behalf of the caller.
///
/// Four dependent platform calls run strictly in order, each short-circuiting
/// on failure: resolve the inviter, look up the invitee, check for an existing
/// grant, insert the record. There is no transaction across them; two
/// concurrent invitations for the same identity and project can both pass the
/// duplicate check. The storage layer is the place for a uniqueness
/// constraint if that ever becomes a hard requirement.
pub async fn invite(
    state: &AppState,
    token: Option<&str>,
    request: InviteRequest,
) -> Result<Collaboration> {
    let token = token.ok_or(Error::Unauthenticated)?;
    let inviter = state
        .auth
        .resolve(token)
        .await?
        .ok_or(Error::Unauthenticated)?;

    // Absence means "not registered yet", which still gets an invitation.
    let invitee = state.directory.find_by_email(&request.invitee_email).await?;

    if invitee.as_ref().is_some_and(|i| i.id == inviter.id) {
        return Err(Error::SelfInvite);
    }

    let filter = match &invitee {
        Some(identity) => CollaborationFilter::for_user(&identity.id, &request.project_ids),
        None => {
            CollaborationFilter::for_pending_email(&request.invitee_email, &request.project_ids)
        }
    };
    let existing = state.collaborations.query(&filter).await?;
    if !existing.is_empty() {
        return Err(Error::DuplicateInvite);
    }

    let status = match invitee {
        Some(_) => CollaborationStatus::Accepted,
        None => CollaborationStatus::Pending,
    };
    let record = NewCollaboration {
        owner_id: inviter.id,
        user_id: invitee.map(|i| i.id),
        email: request.invitee_email,
        project_ids: request.project_ids,
        status,
        permissions: request.permissions,
        created_at: time_now(),
    };

    let created = state.collaborations.insert(record).await?;
    info!(
        "Collaboration {} created for {} ({:?})",
        created.id, created.email, created.status
    );

    Ok(created)
}
