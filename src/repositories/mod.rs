//! Repositories module - coordinator for the persistence backends
//!
//! The handlers depend on the traits only; which backend is wired in is a
//! deployment decision made in `main` (MySQL when DATABASE_URL is set, the
//! in-memory store otherwise).

pub mod event;
pub mod invitation;
pub mod memory;
pub mod traits;

// Re-export the traits to simplify imports
pub use traits::{EventStore, InvitationStore};

// Re-export the repository structs to simplify imports
pub use event::MySqlEventRepository;
pub use invitation::MySqlInvitationRepository;
pub use memory::{InMemoryEventRepository, InMemoryInvitationRepository};
