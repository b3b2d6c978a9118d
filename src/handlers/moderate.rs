use crate::config::moderation::ModerationConfig;
use crate::domain::ModerationKind;
use crate::error::{AppError, AppResult};
use crate::services::email::EmailService;
use crate::services::moderation::{ModerationAction, ModerationService};
use crate::services::upload::UploadConfig;
use crate::utils::verify_token;
use axum::{extract::Query, response::Html, Extension};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ModerateQuery {
    pub id: i32,
    pub tipo: String,
    /// `approve` or `reject`.
    pub acao: String,
    /// Hex HMAC-SHA256 over `"{id}:{tipo}"`.
    pub token: String,
}

#[utoipa::path(
    get,
    path = "/api/moderar",
    params(
        ("id" = i32, Query, description = "Pending record id"),
        ("tipo" = String, Query, description = "vaquinha or doacao_pix"),
        ("acao" = String, Query, description = "approve or reject"),
        ("token" = String, Query, description = "Signed moderation token"),
    ),
    responses(
        (status = 200, description = "Record status updated", content_type = "text/html"),
        (status = 400, description = "Unknown tipo or acao", body = AppError),
        (status = 403, description = "Invalid token", body = AppError),
        (status = 404, description = "Record not found", body = AppError),
    ),
    tag = "moderation"
)]
pub async fn moderate(
    Extension(db): Extension<DatabaseConnection>,
    Extension(email): Extension<EmailService>,
    Extension(upload): Extension<UploadConfig>,
    Extension(config): Extension<ModerationConfig>,
    Query(query): Query<ModerateQuery>,
) -> AppResult<Html<String>> {
    let tipo = ModerationKind::from_str(&query.tipo)
        .ok_or_else(|| AppError::Validation("Tipo inválido".to_string()))?;
    let acao = ModerationAction::from_str(&query.acao)
        .ok_or_else(|| AppError::Validation("Ação inválida".to_string()))?;

    if !verify_token(&config.secret, query.id, tipo, &query.token) {
        return Err(AppError::InvalidToken);
    }

    let service = ModerationService::new(db, email, upload, config);
    service.apply_action(query.id, tipo, acao).await?;

    let (title, detail) = match acao {
        ModerationAction::Approve => ("✅ Cadastro aprovado", "O cadastro já está visível."),
        ModerationAction::Reject => ("❌ Cadastro recusado", "O cadastro não será exibido."),
    };

    tracing::info!(
        "Moderation action {} applied to {} #{}",
        query.acao,
        tipo.as_str(),
        query.id
    );

    Ok(Html(format!(
        "<!DOCTYPE html><html lang=\"pt-BR\"><head><meta charset=\"UTF-8\"/></head>\
         <body style=\"font-family:sans-serif;text-align:center;padding:48px\">\
         <h1>{}</h1><p>{} (ID: {})</p></body></html>",
        title, detail, query.id
    )))
}
