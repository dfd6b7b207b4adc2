//! Core module - infrastructural components of the application
//!
//! This module contains the "core" building blocks:
//! - Error taxonomy and HTTP mapping
//! - Principal resolution
//! - Application state

pub mod error;
pub mod principal;
pub mod state;

// Re-exports to simplify imports
pub use error::AppError;
pub use principal::{Principal, principal_middleware};
pub use state::{AppState, MailSettings};
