//! Legacy event entity - migration source for invitations
//!
//! The legacy events store predates the invitation entity. Its salutation and
//! state labels evolved independently, so they are kept as raw strings here
//! and converted through explicit mapping tables with a defined fallback.

use super::enums::{InvitationState, Salutation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A record of the legacy events store. Read-only; no `internal_comment`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EventRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: Option<String>,
    pub comment: Option<String>,
    /// Legacy label, e.g. "HERR" or "DU_F".
    pub salutation: String,
    /// Legacy label, e.g. "INITIAL" or "SENT".
    pub invitation_state: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

/// Maps a legacy salutation label onto the invitation enum.
/// Unrecognised labels fall back to the formal male salutation.
pub fn salutation_from_legacy(label: &str) -> Salutation {
    match label {
        "HERR" => Salutation::FormalMale,
        "FRAU" => Salutation::FormalFemale,
        "DU_M" => Salutation::InformalMale,
        "DU_F" => Salutation::InformalFemale,
        _ => Salutation::FormalMale,
    }
}

/// Maps a legacy state label onto the invitation enum.
/// Unrecognised labels fall back to INITIAL.
pub fn state_from_legacy(label: &str) -> InvitationState {
    match label {
        "INITIAL" => InvitationState::Initial,
        "SENT" => InvitationState::Sent,
        "REGISTERED" => InvitationState::Registered,
        "EXCUSED" => InvitationState::Excused,
        _ => InvitationState::Initial,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_legacy_salutations_map_one_to_one() {
        assert_eq!(salutation_from_legacy("HERR"), Salutation::FormalMale);
        assert_eq!(salutation_from_legacy("FRAU"), Salutation::FormalFemale);
        assert_eq!(salutation_from_legacy("DU_M"), Salutation::InformalMale);
        assert_eq!(salutation_from_legacy("DU_F"), Salutation::InformalFemale);
    }

    #[test]
    fn unknown_legacy_labels_use_the_fallback() {
        assert_eq!(salutation_from_legacy("MX"), Salutation::FormalMale);
        assert_eq!(salutation_from_legacy(""), Salutation::FormalMale);
        assert_eq!(state_from_legacy("CANCELLED"), InvitationState::Initial);
        assert_eq!(state_from_legacy(""), InvitationState::Initial);
    }

    #[test]
    fn known_legacy_states_map_one_to_one() {
        assert_eq!(state_from_legacy("INITIAL"), InvitationState::Initial);
        assert_eq!(state_from_legacy("SENT"), InvitationState::Sent);
        assert_eq!(state_from_legacy("REGISTERED"), InvitationState::Registered);
        assert_eq!(state_from_legacy("EXCUSED"), InvitationState::Excused);
    }
}
