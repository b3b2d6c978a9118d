use crate::error::{AppError, AppResult};
use std::env;

/// Settings for moderation link signing and the admin notification list.
#[derive(Debug, Clone)]
pub struct ModerationConfig {
    /// Public base URL used in moderation links and uploaded-image URLs.
    pub app_url: String,
    /// HMAC signing secret for approve/reject tokens.
    pub secret: Vec<u8>,
    /// Administrator distribution list for moderation emails.
    pub admins: Vec<String>,
}

impl ModerationConfig {
    pub fn from_env() -> AppResult<Self> {
        let secret = env::var("MODERATION_SECRET")
            .map_err(|_| AppError::Internal(anyhow::anyhow!("MODERATION_SECRET must be set")))?;

        let admins: Vec<String> = env::var("MODERATION_ADMINS")
            .map_err(|_| AppError::Internal(anyhow::anyhow!("MODERATION_ADMINS must be set")))?
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if admins.is_empty() {
            return Err(AppError::Internal(anyhow::anyhow!(
                "MODERATION_ADMINS must contain at least one address"
            )));
        }

        let app_url = env::var("APP_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            app_url,
            secret: secret.into_bytes(),
            admins,
        })
    }
}
