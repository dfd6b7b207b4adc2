//! Outbound mail - the mail collaborator and the sender persona table
//!
//! The persona table maps a contact name onto the reply-to address of the
//! person handling that invitee. It is an explicit lookup structure so new
//! personas are a one-line change.

use crate::core::AppError;
use async_trait::async_trait;
use lazy_static::lazy_static;
use lettre::message::Mailbox;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::collections::HashMap;
use tracing::{debug, error, info};

/// Reply-to used when the contact is empty or unknown.
pub const DEFAULT_REPLY_TO: &str = "office@eventlaunch.ch";

lazy_static! {
    static ref CONTACT_ADDRESSES: HashMap<&'static str, &'static str> = {
        let mut table = HashMap::new();
        table.insert("anna", "anna.keller@eventlaunch.ch");
        table.insert("lukas", "lukas.brunner@eventlaunch.ch");
        table.insert("petra", "petra.steiner@eventlaunch.ch");
        table.insert("simon", "simon.frei@eventlaunch.ch");
        table.insert("nora", "nora.wyss@eventlaunch.ch");
        table
    };
}

/// Resolves the reply-to address of a contact, case-insensitively.
pub fn reply_to_address(contact: Option<&str>) -> &'static str {
    match contact {
        Some(name) if !name.is_empty() => CONTACT_ADDRESSES
            .get(name.to_lowercase().as_str())
            .copied()
            .unwrap_or(DEFAULT_REPLY_TO),
        _ => DEFAULT_REPLY_TO,
    }
}

/// Dispatches a single outbound mail.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(
        &self,
        to: &str,
        reply_to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), AppError>;
}

/// SMTP-backed mailer.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(host: &str, from: &str) -> Result<Self, AppError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .map_err(|err| AppError::internal(format!("invalid SMTP relay <{host}>: {err}")))?
            .build();
        let from = from
            .parse::<Mailbox>()
            .map_err(|err| AppError::internal(format!("invalid sender address <{from}>: {err}")))?;
        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(
        &self,
        to: &str,
        reply_to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), AppError> {
        let message = Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to.parse().map_err(|err| {
                AppError::internal(format!("invalid reply-to address <{reply_to}>: {err}"))
            })?)
            .to(to.parse().map_err(|err| {
                AppError::internal(format!("invalid recipient address <{to}>: {err}"))
            })?)
            .subject(subject)
            .body(body.to_string())
            .map_err(|err| AppError::internal(format!("failed to build mail: {err}")))?;

        self.transport.send(message).await.map_err(|err| {
            error!("Failed to send mail to {to}: {err}");
            AppError::internal(format!("failed to send mail to <{to}>: {err}"))
        })?;
        debug!("Mail to {to} accepted by the relay");
        Ok(())
    }
}

/// Logs outbound mail instead of sending it; wired in when no SMTP relay is
/// configured so dev runs can exercise the whole workflow.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(
        &self,
        to: &str,
        reply_to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), AppError> {
        info!("Outgoing mail (log only): to=<{to}> reply_to=<{reply_to}> subject=<{subject}>");
        debug!("Mail body:\n{body}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_contacts_resolve_case_insensitively() {
        assert_eq!(reply_to_address(Some("anna")), "anna.keller@eventlaunch.ch");
        assert_eq!(reply_to_address(Some("Anna")), "anna.keller@eventlaunch.ch");
        assert_eq!(reply_to_address(Some("LUKAS")), "lukas.brunner@eventlaunch.ch");
    }

    #[test]
    fn empty_and_unknown_contacts_use_the_default_address() {
        assert_eq!(reply_to_address(None), DEFAULT_REPLY_TO);
        assert_eq!(reply_to_address(Some("")), DEFAULT_REPLY_TO);
        assert_eq!(reply_to_address(Some("nobody")), DEFAULT_REPLY_TO);
    }
}
