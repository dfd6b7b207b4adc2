//! Messaging module - template rendering and outbound mail collaborators

pub mod mailer;
pub mod template;

// Re-exports to simplify imports
pub use mailer::{DEFAULT_REPLY_TO, LogMailer, Mailer, SmtpMailer, reply_to_address};
pub use template::{DEFAULT_CONTACT, TemplateEngine, TeraTemplateEngine, template_name};
