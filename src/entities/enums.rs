//! Enumerations - lifecycle state and salutation of an invitation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ********************* ENUMERATIONS **********************//

/// Salutation used to pick the tone of the invitation mail.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Salutation {
    FormalMale,
    FormalFemale,
    #[default]
    InformalMale,
    InformalFemale,
}

impl Salutation {
    /// Label used in the persisted representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Salutation::FormalMale => "FORMAL_MALE",
            Salutation::FormalFemale => "FORMAL_FEMALE",
            Salutation::InformalMale => "INFORMAL_MALE",
            Salutation::InformalFemale => "INFORMAL_FEMALE",
        }
    }

    /// Lowercase key used to build template file names.
    pub fn template_key(&self) -> &'static str {
        match self {
            Salutation::FormalMale => "formal_male",
            Salutation::FormalFemale => "formal_female",
            Salutation::InformalMale => "informal_male",
            Salutation::InformalFemale => "informal_female",
        }
    }
}

impl fmt::Display for Salutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Salutation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FORMAL_MALE" => Ok(Salutation::FormalMale),
            "FORMAL_FEMALE" => Ok(Salutation::FormalFemale),
            "INFORMAL_MALE" => Ok(Salutation::InformalMale),
            "INFORMAL_FEMALE" => Ok(Salutation::InformalFemale),
            other => Err(format!("unknown salutation <{other}>")),
        }
    }
}

/// Lifecycle state of an invitation: INITIAL -> SENT -> {REGISTERED, EXCUSED}
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvitationState {
    #[default]
    Initial,
    Sent,
    Registered,
    Excused,
}

impl InvitationState {
    /// Label used in the persisted representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvitationState::Initial => "INITIAL",
            InvitationState::Sent => "SENT",
            InvitationState::Registered => "REGISTERED",
            InvitationState::Excused => "EXCUSED",
        }
    }
}

impl fmt::Display for InvitationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvitationState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INITIAL" => Ok(InvitationState::Initial),
            "SENT" => Ok(InvitationState::Sent),
            "REGISTERED" => Ok(InvitationState::Registered),
            "EXCUSED" => Ok(InvitationState::Excused),
            other => Err(format!("unknown invitation state <{other}>")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salutation_labels_round_trip() {
        for salutation in [
            Salutation::FormalMale,
            Salutation::FormalFemale,
            Salutation::InformalMale,
            Salutation::InformalFemale,
        ] {
            assert_eq!(salutation.as_str().parse::<Salutation>(), Ok(salutation));
        }
        assert!("DU_M".parse::<Salutation>().is_err());
    }

    #[test]
    fn state_labels_round_trip() {
        for state in [
            InvitationState::Initial,
            InvitationState::Sent,
            InvitationState::Registered,
            InvitationState::Excused,
        ] {
            assert_eq!(state.as_str().parse::<InvitationState>(), Ok(state));
        }
        assert!("PENDING".parse::<InvitationState>().is_err());
    }

    #[test]
    fn defaults_match_create_semantics() {
        assert_eq!(Salutation::default(), Salutation::InformalMale);
        assert_eq!(InvitationState::default(), InvitationState::Initial);
    }
}
