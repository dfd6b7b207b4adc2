//! Application state - collaborators shared by all request handlers
//!
//! There is no process-wide singleton: the store, template engine and mail
//! sender are constructed once in `main` and injected here.

use crate::messaging::{Mailer, TemplateEngine};
use crate::repositories::{EventStore, InvitationStore};
use std::sync::Arc;
use std::time::Duration;

/// Settings of the outbound mail workflow.
#[derive(Debug, Clone)]
pub struct MailSettings {
    /// Subject line of every invitation mail.
    pub subject: String,

    /// Pause between two sends of the batch workflow.
    pub throttle: Duration,

    /// Upper bound of records picked up by a single batch run.
    pub batch_size: u32,
}

/// Shared state handed to every route and middleware.
pub struct AppState {
    /// Store holding the invitation records.
    pub invitations: Arc<dyn InvitationStore>,

    /// Read-only store of the legacy event records (migration source).
    pub events: Arc<dyn EventStore>,

    /// Renders invitation mail bodies from named templates.
    pub templates: Arc<dyn TemplateEngine>,

    /// Dispatches outbound mail.
    pub mailer: Arc<dyn Mailer>,

    pub mail: MailSettings,
}

impl AppState {
    pub fn new(
        invitations: Arc<dyn InvitationStore>,
        events: Arc<dyn EventStore>,
        templates: Arc<dyn TemplateEngine>,
        mailer: Arc<dyn Mailer>,
        mail: MailSettings,
    ) -> Self {
        Self {
            invitations,
            events,
            templates,
            mailer,
            mail,
        }
    }
}
