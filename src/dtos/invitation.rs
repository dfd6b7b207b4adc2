//! Invitation DTOs - wire representation of invitations

use crate::entities::{Invitation, InvitationState, Salutation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Wire representation of an invitation. Every field is optional on input;
/// the handlers decide which fields are mandatory, which are defaulted and
/// which are system-owned (id and the audit fields are never taken from the
/// client on update).
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct InvitationDTO {
    pub id: Option<String>,

    #[validate(length(min = 1, message = "invitation must contain a valid firstName."))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, message = "invitation must contain a valid lastName."))]
    pub last_name: Option<String>,

    #[validate(length(min = 1, message = "invitation must contain a valid email address."))]
    pub email: Option<String>,

    pub contact: Option<String>,
    pub comment: Option<String>,

    // absent on older records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_comment: Option<String>,

    pub salutation: Option<Salutation>,
    pub invitation_state: Option<InvitationState>,

    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
}

impl From<Invitation> for InvitationDTO {
    fn from(value: Invitation) -> Self {
        Self {
            id: Some(value.id),
            first_name: Some(value.first_name),
            last_name: Some(value.last_name),
            email: Some(value.email),
            contact: value.contact,
            comment: value.comment,
            internal_comment: value.internal_comment,
            salutation: Some(value.salutation),
            invitation_state: Some(value.invitation_state),
            created_at: Some(value.created_at),
            created_by: Some(value.created_by),
            modified_at: Some(value.modified_at),
            modified_by: Some(value.modified_by),
        }
    }
}
