//! Invitation services - CRUD, lifecycle actions, messaging workflow,
//! legacy migration and statistics
//!
//! Every handler follows the same ordering: read, validate, then write.
//! Nothing is persisted once a validation error has been raised.

use crate::core::{AppError, AppState, Principal};
use crate::dtos::{InvitationDTO, ListQuery, RegistrationDTO};
use crate::entities::event::{salutation_from_legacy, state_from_legacy};
use crate::entities::{Invitation, InvitationState};
use crate::messaging::{reply_to_address, template_name};
use axum::{
    Extension,
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use axum_macros::debug_handler;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

/// Reads a record or raises the not-found error every id-keyed operation shares.
async fn read_or_not_found(state: &AppState, id: &str) -> Result<Invitation, AppError> {
    state.invitations.read_one(id).await?.ok_or_else(|| {
        warn!("No invitation with ID <{id}>");
        AppError::not_found(format!("no invitation with ID <{id}> was found."))
    })
}

fn required(value: Option<&String>, message: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.clone()),
        _ => Err(AppError::validation(message)),
    }
}

#[instrument(skip(state), fields(position = %params.position, size = %params.size))]
pub async fn list_invitations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<InvitationDTO>>, AppError> {
    debug!("Listing invitations");
    let invitations = state.invitations.list(params.position, params.size).await?;
    info!(
        "list(<{:?}>, <{:?}>, <{}>, <{}>) -> {} invitations",
        params.query,
        params.query_type,
        params.position,
        params.size,
        invitations.len()
    );
    Ok(Json(
        invitations.into_iter().map(InvitationDTO::from).collect(),
    ))
}

#[debug_handler]
#[instrument(skip(state, principal, dto))]
pub async fn create_invitation(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Json(dto): Json<InvitationDTO>,
) -> Result<Json<InvitationDTO>, AppError> {
    debug!("Creating invitation");
    // 1. Ids originate on the server: a supplied id is either a collision or
    //    a client-generated id, both rejected.
    // 2. Enforce the mandatory fields.
    // 3. Default salutation and state when unset.
    // 4. Stamp the audit fields from clock and principal.
    let id = match dto.id.as_deref() {
        None | Some("") => Uuid::new_v4().to_string(),
        Some(supplied) => {
            if state.invitations.read_one(supplied).await?.is_some() {
                return Err(AppError::duplicate(format!(
                    "invitation <{supplied}> exists already."
                )));
            }
            return Err(AppError::validation(format!(
                "invitation <{supplied}> contains an id generated on the client."
            )));
        }
    };

    dto.validate()?;
    let first_name = required(
        dto.first_name.as_ref(),
        "invitation must contain a valid firstName.",
    )?;
    let last_name = required(
        dto.last_name.as_ref(),
        "invitation must contain a valid lastName.",
    )?;
    let email = required(
        dto.email.as_ref(),
        "invitation must contain a valid email address.",
    )?;

    let now = Utc::now();
    let invitation = Invitation {
        id,
        first_name,
        last_name,
        email,
        contact: dto.contact,
        comment: dto.comment,
        internal_comment: dto.internal_comment,
        salutation: dto.salutation.unwrap_or_default(),
        invitation_state: dto.invitation_state.unwrap_or_default(),
        created_at: now,
        created_by: principal.name().to_string(),
        modified_at: now,
        modified_by: principal.name().to_string(),
    };

    state.invitations.create(&invitation).await?;
    info!("create -> invitation <{}>", invitation.id);
    Ok(Json(InvitationDTO::from(invitation)))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn get_invitation_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<InvitationDTO>, AppError> {
    debug!("Reading invitation");
    let invitation = read_or_not_found(&state, &id).await?;
    info!("read({id}) -> OK");
    Ok(Json(InvitationDTO::from(invitation)))
}

#[instrument(skip(state, principal, dto), fields(id = %id))]
pub async fn update_invitation(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    Json(dto): Json<InvitationDTO>,
) -> Result<Json<InvitationDTO>, AppError> {
    debug!("Updating invitation");
    let mut invitation = read_or_not_found(&state, &id).await?;

    // creation fields are system-owned; a client value is ignored, not an error
    if let Some(created_at) = dto.created_at {
        if created_at != invitation.created_at {
            warn!(
                "invitation <{id}>: ignoring createdAt value <{created_at}> because it was set on the client"
            );
        }
    }
    if let Some(created_by) = dto.created_by.as_deref() {
        if !created_by.eq_ignore_ascii_case(&invitation.created_by) {
            warn!(
                "invitation <{id}>: ignoring createdBy value <{created_by}> because it was set on the client"
            );
        }
    }

    dto.validate()?;
    invitation.first_name = required(
        dto.first_name.as_ref(),
        "invitation must contain a valid firstName.",
    )?;
    invitation.last_name = required(
        dto.last_name.as_ref(),
        "invitation must contain a valid lastName.",
    )?;
    invitation.email = required(
        dto.email.as_ref(),
        "invitation must contain a valid email address.",
    )?;
    invitation.contact = dto.contact;
    invitation.comment = dto.comment;
    invitation.internal_comment = dto.internal_comment;
    invitation.salutation = dto.salutation.unwrap_or_default();
    invitation.invitation_state = dto.invitation_state.unwrap_or_default();
    invitation.modified_at = Utc::now();
    invitation.modified_by = principal.name().to_string();

    state.invitations.update(&id, &invitation).await?;
    info!("update({id}) -> OK");
    Ok(Json(InvitationDTO::from(invitation)))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn delete_invitation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Deleting invitation");
    read_or_not_found(&state, &id).await?;
    state.invitations.delete_one(&id).await?;
    info!("delete({id}) -> OK");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, principal, payload), fields(id = %id))]
pub async fn register_invitation(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    Json(payload): Json<RegistrationDTO>,
) -> Result<StatusCode, AppError> {
    debug!("Registering invitee");
    let mut invitation = read_or_not_found(&state, &id).await?;
    if invitation.invitation_state == InvitationState::Initial {
        return Err(AppError::validation(format!(
            "invitation <{id}> must be sent before being able to register"
        )));
    }
    if invitation.invitation_state == InvitationState::Registered {
        warn!("invitation <{id}> is already registered; ignoring re-registration");
    }
    invitation.invitation_state = InvitationState::Registered;
    invitation.comment = payload.comment;
    invitation.modified_at = Utc::now();
    invitation.modified_by = principal.name().to_string();
    state.invitations.update(&id, &invitation).await?;
    info!("register({id}) -> {}", invitation.invitation_state);
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, principal, payload), fields(id = %id))]
pub async fn deregister_invitation(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    Json(payload): Json<RegistrationDTO>,
) -> Result<StatusCode, AppError> {
    debug!("Deregistering invitee");
    let mut invitation = read_or_not_found(&state, &id).await?;
    if invitation.invitation_state == InvitationState::Initial {
        return Err(AppError::validation(format!(
            "invitation <{id}> must be sent before being able to deregister"
        )));
    }
    if invitation.invitation_state == InvitationState::Excused {
        warn!("invitation <{id}> is already excused; ignoring deregistration");
    }
    invitation.invitation_state = InvitationState::Excused;
    invitation.comment = payload.comment;
    invitation.modified_at = Utc::now();
    invitation.modified_by = principal.name().to_string();
    state.invitations.update(&id, &invitation).await?;
    info!("deregister({id}) -> {}", invitation.invitation_state);
    Ok(StatusCode::NO_CONTENT)
}

/// Renders the mail body for a record: template selection is a pure function
/// of (salutation, contact), the record itself is the template context.
fn render_message(state: &AppState, invitation: &Invitation) -> Result<String, AppError> {
    let name = template_name(invitation.salutation, invitation.contact.as_deref());
    state.templates.render(&name, invitation)
}

#[instrument(skip(state), fields(id = %id))]
pub async fn get_invitation_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<String, AppError> {
    debug!("Rendering invitation message");
    let invitation = read_or_not_found(&state, &id).await?;
    let message = render_message(&state, &invitation)?;
    info!("getMessage({id}) -> {} characters", message.len());
    Ok(message)
}

/// Renders and dispatches the mail for one record, then marks it SENT.
async fn dispatch_invitation(
    state: &AppState,
    mut invitation: Invitation,
    principal: &Principal,
) -> Result<(), AppError> {
    let body = render_message(state, &invitation)?;
    let reply_to = reply_to_address(invitation.contact.as_deref());
    state
        .mailer
        .send(&invitation.email, reply_to, &state.mail.subject, &body)
        .await?;
    info!("Sent email message to {}", invitation.email);

    invitation.invitation_state = InvitationState::Sent;
    invitation.modified_at = Utc::now();
    invitation.modified_by = principal.name().to_string();
    let id = invitation.id.clone();
    state.invitations.update(&id, &invitation).await
}

#[instrument(skip(state, principal), fields(id = %id))]
pub async fn send_invitation_message(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Sending invitation message");
    let invitation = read_or_not_found(&state, &id).await?;
    dispatch_invitation(&state, invitation, &principal).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, principal))]
pub async fn send_all_invitation_messages(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
) -> Result<StatusCode, AppError> {
    // Bounded batch; sends run sequentially with a pause between them, and
    // the first failure aborts the remainder of the batch.
    let batch = state.invitations.list(0, state.mail.batch_size).await?;
    info!("Sending {} invitation messages", batch.len());
    for invitation in batch {
        dispatch_invitation(&state, invitation, &principal).await?;
        tokio::time::sleep(state.mail.throttle).await;
    }
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, principal))]
pub async fn migrate_legacy_events(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
) -> Result<StatusCode, AppError> {
    // One-time import: ids and creation stamps are preserved, enum labels go
    // through the legacy mapping tables, internal_comment stays empty
    // because the legacy entity never had the field.
    let events = state.events.list().await?;
    info!("Migrating {} legacy event records", events.len());
    for event in events {
        let id = event.id.clone();
        let invitation = Invitation {
            id: event.id,
            first_name: event.first_name,
            last_name: event.last_name,
            email: event.email,
            contact: event.contact,
            comment: event.comment,
            internal_comment: None,
            salutation: salutation_from_legacy(&event.salutation),
            invitation_state: state_from_legacy(&event.invitation_state),
            created_at: event.created_at,
            created_by: event.created_by,
            modified_at: Utc::now(),
            modified_by: principal.name().to_string(),
        };
        state
            .invitations
            .create(&invitation)
            .await
            .map_err(|err| AppError::internal(format!("migration of event <{id}> failed: {err}")))?;
        debug!("Migrated event <{id}>");
    }
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn invitation_statistics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HashMap<String, String>>, AppError> {
    debug!("Computing invitation statistics");
    let invitations = state.invitations.list(0, 0).await?;

    let mut initial = 0usize;
    let mut sent = 0usize;
    let mut registered = 0usize;
    let mut excused = 0usize;
    let mut comments = 0usize;
    let mut internal_comments = 0usize;
    for invitation in &invitations {
        match invitation.invitation_state {
            InvitationState::Initial => initial += 1,
            InvitationState::Sent => sent += 1,
            InvitationState::Registered => registered += 1,
            InvitationState::Excused => excused += 1,
        }
        if invitation.comment.as_deref().is_some_and(|c| !c.is_empty()) {
            comments += 1;
        }
        if invitation
            .internal_comment
            .as_deref()
            .is_some_and(|c| !c.is_empty())
        {
            internal_comments += 1;
        }
    }

    let mut data = HashMap::new();
    data.insert("entries".to_string(), invitations.len().to_string());
    data.insert("initial".to_string(), initial.to_string());
    data.insert("sent".to_string(), sent.to_string());
    data.insert("registered".to_string(), registered.to_string());
    data.insert("excused".to_string(), excused.to_string());
    data.insert("comments".to_string(), comments.to_string());
    data.insert("internalComments".to_string(), internal_comments.to_string());

    info!("statistics() -> {} entries", invitations.len());
    Ok(Json(data))
}
