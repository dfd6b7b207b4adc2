use invitations_server::config::Config;
use invitations_server::core::{AppState, MailSettings};
use invitations_server::create_router;
use invitations_server::messaging::{LogMailer, Mailer, SmtpMailer, TemplateEngine, TeraTemplateEngine};
use invitations_server::repositories::{
    EventStore, InMemoryEventRepository, InMemoryInvitationRepository, InvitationStore,
    MySqlEventRepository, MySqlInvitationRepository,
};
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    config.print_info();

    let state = build_state(&config).await?;
    let app = create_router(state);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Wires the collaborators according to the configuration: MySQL when
/// DATABASE_URL is set, SMTP when SMTP_HOST is set, in-memory / log-only
/// fallbacks otherwise.
async fn build_state(config: &Config) -> Result<Arc<AppState>, Box<dyn std::error::Error>> {
    let (invitations, events): (Arc<dyn InvitationStore>, Arc<dyn EventStore>) =
        match &config.database_url {
            Some(url) => {
                let pool = MySqlPoolOptions::new()
                    .max_connections(config.max_connections)
                    .connect(url)
                    .await?;
                sqlx::migrate!().run(&pool).await?;
                (
                    Arc::new(MySqlInvitationRepository::new(pool.clone())),
                    Arc::new(MySqlEventRepository::new(pool)),
                )
            }
            None => {
                warn!("DATABASE_URL not set, records are kept in memory and lost on shutdown");
                (
                    Arc::new(InMemoryInvitationRepository::new()),
                    Arc::new(InMemoryEventRepository::new()),
                )
            }
        };

    let templates: Arc<dyn TemplateEngine> =
        Arc::new(TeraTemplateEngine::from_dir(&config.templates_dir)?);

    let mailer: Arc<dyn Mailer> = match &config.smtp_host {
        Some(host) => Arc::new(SmtpMailer::new(host, &config.smtp_from)?),
        None => {
            warn!("SMTP_HOST not set, outgoing mail is logged instead of sent");
            Arc::new(LogMailer)
        }
    };

    Ok(Arc::new(AppState::new(
        invitations,
        events,
        templates,
        mailer,
        MailSettings {
            subject: config.mail_subject.clone(),
            throttle: Duration::from_millis(config.mail_throttle_ms),
            batch_size: config.send_batch_size,
        },
    )))
}
