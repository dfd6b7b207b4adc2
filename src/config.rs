use dotenv::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// When unset the service falls back to the in-memory store.
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub templates_dir: String,
    /// When unset outbound mail is logged instead of sent.
    pub smtp_host: Option<String>,
    pub smtp_from: String,
    pub mail_subject: String,
    pub mail_throttle_ms: u64,
    pub send_batch_size: u32,
    pub app_env: String,
}

impl Config {
    /// Loads the configuration from environment variables.
    /// Calls dotenv() automatically.
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let database_url = env::var("DATABASE_URL").ok();

        let max_connections = env::var("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let templates_dir = env::var("TEMPLATES_DIR").unwrap_or_else(|_| "templates".to_string());

        let smtp_host = env::var("SMTP_HOST").ok();

        let smtp_from =
            env::var("SMTP_FROM").unwrap_or_else(|_| "invitations@eventlaunch.ch".to_string());

        let mail_subject =
            env::var("MAIL_SUBJECT").unwrap_or_else(|_| "Invitation to the Launch Event".to_string());

        let mail_throttle_ms = env::var("MAIL_THROTTLE_MS")
            .unwrap_or_else(|_| "1000".to_string())
            .parse::<u64>()
            .map_err(|_| "Invalid MAIL_THROTTLE_MS: must be a positive number".to_string())?;

        let send_batch_size = env::var("SEND_BATCH_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .map_err(|_| "Invalid SEND_BATCH_SIZE: must be a positive number".to_string())?;

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            server_host,
            server_port,
            database_url,
            max_connections,
            templates_dir,
            smtp_host,
            smtp_from,
            mail_subject,
            mail_throttle_ms,
            send_batch_size,
            app_env,
        })
    }

    /// Prints the configuration (masking credentials).
    pub fn print_info(&self) {
        println!("   Server Configuration:");
        println!("   Environment: {}", self.app_env);
        println!("   Server Address: {}:{}", self.server_host, self.server_port);
        match &self.database_url {
            Some(url) => println!("   Database: {}", Self::mask_url(url)),
            None => println!("   Database: in-memory store (no DATABASE_URL)"),
        }
        println!("   Max DB Connections: {}", self.max_connections);
        println!("   Templates: {}", self.templates_dir);
        match &self.smtp_host {
            Some(host) => println!("   SMTP: {} (from {})", host, self.smtp_from),
            None => println!("   SMTP: log only (no SMTP_HOST)"),
        }
        println!("   Mail Throttle: {}ms", self.mail_throttle_ms);
        println!("   Send Batch Size: {}", self.send_batch_size);
    }

    /// Masks credentials embedded in a connection URL for logging.
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.find('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        "***".to_string()
    }
}
