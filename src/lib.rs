//! Server library - exposes the main modules for the integration tests

pub mod config;
pub mod core;
pub mod dtos;
pub mod entities;
pub mod messaging;
pub mod repositories;
pub mod services;

// Re-export the main types to simplify imports
pub use crate::core::{AppError, AppState};
pub use services::root;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Builds the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    use crate::core::principal_middleware;

    Router::new()
        .route("/", get(root))
        .nest("/invitations", configure_invitation_routes())
        .layer(middleware::from_fn(principal_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Routes of the invitation operations.
fn configure_invitation_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/", get(list_invitations).post(create_invitation))
        .route("/send", post(send_all_invitation_messages))
        .route("/migrate", post(migrate_legacy_events))
        .route("/statistics", get(invitation_statistics))
        .route(
            "/{id}",
            get(get_invitation_by_id)
                .put(update_invitation)
                .delete(delete_invitation),
        )
        .route("/{id}/message", get(get_invitation_message))
        .route("/{id}/send", post(send_invitation_message))
        .route("/{id}/register", post(register_invitation))
        .route("/{id}/deregister", post(deregister_invitation))
}
