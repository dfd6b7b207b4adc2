//! Store collaborator interfaces
//!
//! This module defines the interfaces the service consumes from its
//! persistence collaborators. Handlers only ever see these traits; the
//! concrete backend (MySQL or in-memory) is chosen in `main`.

use crate::core::AppError;
use crate::entities::{EventRecord, Invitation};
use async_trait::async_trait;

/// Store of invitation records.
///
/// The service applies its validation before calling into the store, so the
/// store only enforces what the storage itself guarantees (id uniqueness).
#[async_trait]
pub trait InvitationStore: Send + Sync {
    /// Lists records in creation order.
    ///
    /// # Arguments
    /// * `position` - Number of records to skip
    /// * `size` - Maximum number of records to return; `0` means no limit
    async fn list(&self, position: u32, size: u32) -> Result<Vec<Invitation>, AppError>;

    /// Persists a new record under its id.
    ///
    /// # Returns
    /// * `Err(AppError::Duplicate)` - A record with the same id already exists
    async fn create(&self, invitation: &Invitation) -> Result<(), AppError>;

    /// Reads a single record by id.
    ///
    /// # Returns
    /// * `Ok(Some(Invitation))` - Record found
    /// * `Ok(None)` - No record with that id
    async fn read_one(&self, id: &str) -> Result<Option<Invitation>, AppError>;

    /// Overwrites the mutable fields of an existing record.
    /// `id`, `created_at` and `created_by` are never touched by the store.
    async fn update(&self, id: &str, invitation: &Invitation) -> Result<(), AppError>;

    /// Removes a record by id. Removing an absent id is not an error;
    /// the service checks existence beforehand.
    async fn delete_one(&self, id: &str) -> Result<(), AppError>;
}

/// Read-only store of the legacy event records (migration source).
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Lists every legacy record in creation order.
    async fn list(&self) -> Result<Vec<EventRecord>, AppError>;
}
