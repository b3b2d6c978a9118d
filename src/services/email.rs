use crate::config::email::EmailConfig;
use crate::error::{AppError, AppResult};
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[derive(Clone)]
pub struct EmailService {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from_address: Option<String>,
}

impl EmailService {
    /// Build from environment variables. If SMTP is not configured, email
    /// sending is silently skipped (graceful degradation).
    pub fn from_env() -> Self {
        match EmailConfig::from_env() {
            Some(cfg) => {
                let creds = Credentials::new(cfg.smtp_username.clone(), cfg.smtp_password.clone());
                let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&cfg.smtp_host)
                    .map(|builder| builder.port(cfg.smtp_port).credentials(creds).build());

                match transport {
                    Ok(t) => Self {
                        transport: Some(t),
                        from_address: Some(cfg.from_address),
                    },
                    Err(e) => {
                        tracing::warn!("Failed to build SMTP transport: {e}");
                        Self {
                            transport: None,
                            from_address: None,
                        }
                    }
                }
            }
            None => Self {
                transport: None,
                from_address: None,
            },
        }
    }

    /// Returns true if SMTP is configured and available.
    pub fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    /// Send one HTML email to the administrator list. Skipped with a
    /// warning when SMTP is not configured.
    pub async fn send_moderation_email(
        &self,
        recipients: &[String],
        subject: &str,
        html: &str,
    ) -> AppResult<()> {
        let transport = match &self.transport {
            Some(t) => t,
            None => {
                tracing::warn!("SMTP not configured, skipping moderation email: {subject}");
                return Ok(());
            }
        };
        let from_address = match &self.from_address {
            Some(f) => f,
            None => return Ok(()),
        };

        let from_mailbox: Mailbox = from_address
            .parse()
            .map_err(|e: lettre::address::AddressError| {
                AppError::Delivery(format!("Invalid from address '{}': {}", from_address, e))
            })?;

        let mut builder = Message::builder().from(from_mailbox).subject(subject);
        for to in recipients {
            let to_mailbox: Mailbox =
                to.parse().map_err(|e: lettre::address::AddressError| {
                    AppError::Delivery(format!("Invalid admin address '{}': {}", to, e))
                })?;
            builder = builder.to(to_mailbox);
        }

        let email = builder
            .header(ContentType::TEXT_HTML)
            .body(html.to_string())
            .map_err(|e| AppError::Delivery(e.to_string()))?;

        transport
            .send(email)
            .await
            .map_err(|e| AppError::Delivery(e.to_string()))?;

        tracing::info!("Moderation email sent to {} admin(s)", recipients.len());
        Ok(())
    }
}
