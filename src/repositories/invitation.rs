//! MySqlInvitationRepository - MySQL-backed invitation store
//!
//! The row struct is the persisted representation; `row_to_entity` /
//! `bind_fields` are the record mapper between it and the domain entity.
//! Queries are bound at runtime so the crate builds without a live database.

use super::InvitationStore;
use crate::core::AppError;
use crate::entities::Invitation;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

const SELECT_FIELDS: &str = "SELECT id, first_name, last_name, email, contact, comment, \
     internal_comment, salutation, invitation_state, \
     created_at, created_by, modified_at, modified_by FROM invitations";

pub struct MySqlInvitationRepository {
    connection_pool: MySqlPool,
}

/// Persisted representation of an invitation. `salutation` and
/// `invitation_state` are stored as their labels; `internal_comment` is NULL
/// on records written before the field existed.
#[derive(sqlx::FromRow)]
struct InvitationRow {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    contact: Option<String>,
    comment: Option<String>,
    internal_comment: Option<String>,
    salutation: String,
    invitation_state: String,
    created_at: DateTime<Utc>,
    created_by: String,
    modified_at: DateTime<Utc>,
    modified_by: String,
}

/// Maps a persisted row back onto the entity. A label the enums do not know
/// is a corrupted record, not a client error.
fn row_to_entity(row: InvitationRow) -> Result<Invitation, AppError> {
    let salutation = row
        .salutation
        .parse()
        .map_err(|err| AppError::internal(format!("invitation <{}>: {err}", row.id)))?;
    let invitation_state = row
        .invitation_state
        .parse()
        .map_err(|err| AppError::internal(format!("invitation <{}>: {err}", row.id)))?;
    Ok(Invitation {
        id: row.id,
        first_name: row.first_name,
        last_name: row.last_name,
        email: row.email,
        contact: row.contact,
        comment: row.comment,
        internal_comment: row.internal_comment,
        salutation,
        invitation_state,
        created_at: row.created_at,
        created_by: row.created_by,
        modified_at: row.modified_at,
        modified_by: row.modified_by,
    })
}

impl MySqlInvitationRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl InvitationStore for MySqlInvitationRepository {
    async fn list(&self, position: u32, size: u32) -> Result<Vec<Invitation>, AppError> {
        let limit: u64 = if size == 0 { u64::MAX } else { size as u64 };
        let rows = sqlx::query_as::<_, InvitationRow>(&format!(
            "{SELECT_FIELDS} ORDER BY created_at, id LIMIT ? OFFSET ?"
        ))
        .bind(limit)
        .bind(position as u64)
        .fetch_all(&self.connection_pool)
        .await?;

        rows.into_iter().map(row_to_entity).collect()
    }

    async fn create(&self, invitation: &Invitation) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO invitations \
             (id, first_name, last_name, email, contact, comment, internal_comment, \
              salutation, invitation_state, created_at, created_by, modified_at, modified_by) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&invitation.id)
        .bind(&invitation.first_name)
        .bind(&invitation.last_name)
        .bind(&invitation.email)
        .bind(&invitation.contact)
        .bind(&invitation.comment)
        .bind(&invitation.internal_comment)
        .bind(invitation.salutation.as_str())
        .bind(invitation.invitation_state.as_str())
        .bind(invitation.created_at)
        .bind(&invitation.created_by)
        .bind(invitation.modified_at)
        .bind(&invitation.modified_by)
        .execute(&self.connection_pool)
        .await?;

        Ok(())
    }

    async fn read_one(&self, id: &str) -> Result<Option<Invitation>, AppError> {
        let row = sqlx::query_as::<_, InvitationRow>(&format!("{SELECT_FIELDS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await?;

        row.map(row_to_entity).transpose()
    }

    async fn update(&self, id: &str, invitation: &Invitation) -> Result<(), AppError> {
        // id, created_at and created_by stay out of the SET list: the schema
        // side of the immutability invariant.
        sqlx::query(
            "UPDATE invitations SET \
             first_name = ?, last_name = ?, email = ?, contact = ?, comment = ?, \
             internal_comment = ?, salutation = ?, invitation_state = ?, \
             modified_at = ?, modified_by = ? \
             WHERE id = ?",
        )
        .bind(&invitation.first_name)
        .bind(&invitation.last_name)
        .bind(&invitation.email)
        .bind(&invitation.contact)
        .bind(&invitation.comment)
        .bind(&invitation.internal_comment)
        .bind(invitation.salutation.as_str())
        .bind(invitation.invitation_state.as_str())
        .bind(invitation.modified_at)
        .bind(&invitation.modified_by)
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        Ok(())
    }

    async fn delete_one(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM invitations WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}
