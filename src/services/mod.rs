//! Services module - HTTP handlers of the invitation operations

pub mod invitation;

// Re-exports to simplify imports
pub use invitation::{
    create_invitation, delete_invitation, deregister_invitation, get_invitation_by_id,
    get_invitation_message, invitation_statistics, list_invitations, migrate_legacy_events,
    register_invitation, send_all_invitation_messages, send_invitation_message, update_invitation,
};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
