//! Entities module - domain entities of the application
//!
//! This module contains the entities persisted in the store, plus the
//! read-only legacy event entity used as the migration source.

pub mod enums;
pub mod event;
pub mod invitation;

// Re-exports to simplify imports
pub use enums::{InvitationState, Salutation};
pub use event::EventRecord;
pub use invitation::Invitation;
