use axum::{Json, extract::State, http::HeaderMap};

use crate::{
    errors::Result,
    models::collaboration::Collaboration,
    saga::{self, InviteRequest},
    state::AppState,
    utils::{bearer::bearer_token, validated_json::ValidatedJson},
};

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, validator::Validate)]
pub struct InviteCollaboratorRequest {
    #[validate(email)]
    pub p_invitee_email: String,
    pub p_permissions: serde_json::Value,
    #[validate(length(min = 1))]
    pub p_project_ids: Vec<i64>,
}

pub async fn invite_collaborator(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<InviteCollaboratorRequest>,
) -> Result<Json<Collaboration>> {
    let created = saga::invite(
        &state,
        bearer_token(&headers),
        InviteRequest {
            invitee_email: input.p_invitee_email,
            permissions: input.p_permissions,
            project_ids: input.p_project_ids,
        },
    )
    .await?;

    Ok(Json(created))
}
