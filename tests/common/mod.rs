use async_trait::async_trait;
use axum_test::TestServer;
use invitations_server::core::{AppError, AppState, MailSettings};
use invitations_server::messaging::{Mailer, TeraTemplateEngine};
use invitations_server::repositories::{InMemoryEventRepository, InMemoryInvitationRepository};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A mail captured by the recording mailer.
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub body: String,
}

/// Mailer that records every dispatch instead of sending it.
pub struct RecordingMailer {
    pub sent: Arc<Mutex<Vec<SentMail>>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(
        &self,
        to: &str,
        reply_to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            reply_to: reply_to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

/// Mailer that fails every dispatch; used to test batch abort semantics.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(
        &self,
        to: &str,
        _reply_to: &str,
        _subject: &str,
        _body: &str,
    ) -> Result<(), AppError> {
        Err(AppError::internal(format!("failed to send mail to <{to}>")))
    }
}

/// Raw templates covering the salutations and personas the tests exercise.
fn test_templates() -> TeraTemplateEngine {
    TeraTemplateEngine::from_raw_templates([
        (
            "email_informal_male_office.txt",
            "Hi {{ invitation.first_name }}, join us at the launch event!",
        ),
        (
            "email_informal_female_office.txt",
            "Hi {{ invitation.first_name }}, join us at the launch event!",
        ),
        (
            "email_formal_male_office.txt",
            "Dear Mr {{ invitation.last_name }}, we would be honoured to welcome you.",
        ),
        (
            "email_formal_female_office.txt",
            "Dear Ms {{ invitation.last_name }}, we would be honoured to welcome you.",
        ),
        (
            "email_informal_male_anna.txt",
            "Hi {{ invitation.first_name }}, it's Anna - come celebrate with us!",
        ),
    ])
    .expect("test templates are valid")
}

pub struct TestContext {
    pub server: TestServer,
    pub outbox: Arc<Mutex<Vec<SentMail>>>,
    pub events: Arc<InMemoryEventRepository>,
}

/// Builds a TestServer over the in-memory backends with a recording mailer.
pub fn create_test_context() -> TestContext {
    let outbox = Arc::new(Mutex::new(Vec::new()));
    let mailer = RecordingMailer {
        sent: outbox.clone(),
    };
    let (server, events) = build_server(Arc::new(mailer));
    TestContext {
        server,
        outbox,
        events,
    }
}

/// Same as `create_test_context` but with every send failing.
pub fn create_failing_mail_context() -> TestContext {
    let (server, events) = build_server(Arc::new(FailingMailer));
    TestContext {
        server,
        outbox: Arc::new(Mutex::new(Vec::new())),
        events,
    }
}

fn build_server(mailer: Arc<dyn Mailer>) -> (TestServer, Arc<InMemoryEventRepository>) {
    let events = Arc::new(InMemoryEventRepository::new());
    let state = AppState::new(
        Arc::new(InMemoryInvitationRepository::new()),
        events.clone(),
        Arc::new(test_templates()),
        mailer,
        MailSettings {
            subject: "Invitation to the Launch Event".to_string(),
            throttle: Duration::from_millis(1),
            batch_size: 200,
        },
    );
    let server = TestServer::new(invitations_server::create_router(Arc::new(state)))
        .expect("Failed to create test server");
    (server, events)
}
