//! MySqlEventRepository - read-only MySQL store of the legacy event records

use super::EventStore;
use crate::core::AppError;
use crate::entities::EventRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

pub struct MySqlEventRepository {
    connection_pool: MySqlPool,
}

// Legacy rows carry their enum labels verbatim; the migration converts them.
#[derive(sqlx::FromRow)]
struct EventRow {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    contact: Option<String>,
    comment: Option<String>,
    salutation: String,
    invitation_state: String,
    created_at: DateTime<Utc>,
    created_by: String,
}

impl From<EventRow> for EventRecord {
    fn from(row: EventRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            contact: row.contact,
            comment: row.comment,
            salutation: row.salutation,
            invitation_state: row.invitation_state,
            created_at: row.created_at,
            created_by: row.created_by,
        }
    }
}

impl MySqlEventRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl EventStore for MySqlEventRepository {
    async fn list(&self) -> Result<Vec<EventRecord>, AppError> {
        let rows = sqlx::query_as::<_, EventRow>(
            "SELECT id, first_name, last_name, email, contact, comment, \
             salutation, invitation_state, created_at, created_by \
             FROM events ORDER BY created_at, id",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(rows.into_iter().map(EventRecord::from).collect())
    }
}
