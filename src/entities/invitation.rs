//! Invitation entity - a single invitee of the event

use super::enums::{InvitationState, Salutation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Invitation {
    /// Opaque unique identifier, generated on the server and immutable afterwards.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Sender persona handling this invitee; selects the template family and reply-to address.
    pub contact: Option<String>,
    pub comment: Option<String>,
    /// Not present on documents written before the field was introduced.
    pub internal_comment: Option<String>,
    pub salutation: Salutation,
    pub invitation_state: InvitationState,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}
