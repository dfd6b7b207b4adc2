//! In-memory stores - used by the test suites and by dev runs without a
//! database. Records are kept in insertion order, matching the creation
//! order the MySQL backend lists by.

use super::{EventStore, InvitationStore};
use crate::core::AppError;
use crate::entities::{EventRecord, Invitation};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryInvitationRepository {
    records: RwLock<Vec<Invitation>>,
}

impl InMemoryInvitationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvitationStore for InMemoryInvitationRepository {
    async fn list(&self, position: u32, size: u32) -> Result<Vec<Invitation>, AppError> {
        let records = self.records.read().await;
        let size = if size == 0 { usize::MAX } else { size as usize };
        Ok(records
            .iter()
            .skip(position as usize)
            .take(size)
            .cloned()
            .collect())
    }

    async fn create(&self, invitation: &Invitation) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        if records.iter().any(|record| record.id == invitation.id) {
            return Err(AppError::duplicate(format!(
                "invitation <{}> exists already.",
                invitation.id
            )));
        }
        records.push(invitation.clone());
        Ok(())
    }

    async fn read_one(&self, id: &str) -> Result<Option<Invitation>, AppError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| record.id == id).cloned())
    }

    async fn update(&self, id: &str, invitation: &Invitation) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                // creation fields keep their stored values, as in the SQL backend
                let mut updated = invitation.clone();
                updated.id = record.id.clone();
                updated.created_at = record.created_at;
                updated.created_by = record.created_by.clone();
                *record = updated;
                Ok(())
            }
            None => Err(AppError::not_found(format!(
                "no invitation with ID <{id}> was found."
            ))),
        }
    }

    async fn delete_one(&self, id: &str) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        records.retain(|record| record.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryEventRepository {
    records: RwLock<Vec<EventRecord>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a legacy record; only the migration tests need this.
    pub async fn insert(&self, record: EventRecord) {
        self.records.write().await.push(record);
    }
}

#[async_trait]
impl EventStore for InMemoryEventRepository {
    async fn list(&self) -> Result<Vec<EventRecord>, AppError> {
        Ok(self.records.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{InvitationState, Salutation};
    use chrono::Utc;

    fn invitation(id: &str) -> Invitation {
        let now = Utc::now();
        Invitation {
            id: id.to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@example.com".to_string(),
            contact: None,
            comment: None,
            internal_comment: None,
            salutation: Salutation::default(),
            invitation_state: InvitationState::default(),
            created_at: now,
            created_by: "tester".to_string(),
            modified_at: now,
            modified_by: "tester".to_string(),
        }
    }

    #[tokio::test]
    async fn create_rejects_duplicate_ids() {
        let store = InMemoryInvitationRepository::new();
        store.create(&invitation("a")).await.unwrap();
        let err = store.create(&invitation("a")).await.unwrap_err();
        assert!(matches!(err, AppError::Duplicate(_)));
    }

    #[tokio::test]
    async fn list_paginates_in_insertion_order() {
        let store = InMemoryInvitationRepository::new();
        for id in ["a", "b", "c"] {
            store.create(&invitation(id)).await.unwrap();
        }

        let page = store.list(1, 1).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, "b");

        let all = store.list(0, 0).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn update_preserves_creation_fields() {
        let store = InMemoryInvitationRepository::new();
        let original = invitation("a");
        store.create(&original).await.unwrap();

        let mut changed = invitation("a");
        changed.created_by = "someone else".to_string();
        changed.first_name = "Anna".to_string();
        store.update("a", &changed).await.unwrap();

        let stored = store.read_one("a").await.unwrap().unwrap();
        assert_eq!(stored.first_name, "Anna");
        assert_eq!(stored.created_by, "tester");
        assert_eq!(stored.created_at, original.created_at);
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let store = InMemoryInvitationRepository::new();
        store.create(&invitation("a")).await.unwrap();
        store.delete_one("a").await.unwrap();
        assert!(store.read_one("a").await.unwrap().is_none());
    }
}
