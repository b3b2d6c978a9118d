use crate::config::moderation::ModerationConfig;
use crate::domain::Category;
use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::services::city::CityDirectory;
use crate::services::email::EmailService;
use crate::services::intake::IntakeService;
use crate::services::moderation::ModerationService;
use crate::services::upload::UploadConfig;
use axum::{response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmissionRequest {
    /// City name as shown on the wizard's first step.
    #[validate(length(min = 1, max = 100))]
    pub cidade: String,
    pub categoria: Category,
    /// Form field name -> string, array of strings or null.
    #[schema(value_type = Object)]
    pub campos: Map<String, Value>,
    /// Optional QR-code image, forwarded to moderation when applicable.
    pub pix_qrcode_base64: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmissionResponse {
    pub id: i32,
    /// True when the record awaits moderation.
    pub pendente: bool,
    /// Plain-text summary for display and sharing.
    pub resumo: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/cadastros",
    request_body = SubmissionRequest,
    responses(
        (status = 200, description = "Record registered or sent to moderation", body = SubmissionResponse),
        (status = 400, description = "Validation error or unknown city", body = AppError),
        (status = 500, description = "Persistence or delivery failure", body = AppError),
    ),
    tag = "intake"
)]
pub async fn create_submission(
    Extension(db): Extension<DatabaseConnection>,
    Extension(cities): Extension<CityDirectory>,
    Extension(email): Extension<EmailService>,
    Extension(upload): Extension<UploadConfig>,
    Extension(config): Extension<ModerationConfig>,
    Json(req): Json<SubmissionRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let moderation = ModerationService::new(db.clone(), email, upload, config);
    let service = IntakeService::new(db, cities, moderation);
    let outcome = service
        .submit(
            req.categoria,
            &req.cidade,
            &req.campos,
            req.pix_qrcode_base64.as_deref(),
        )
        .await?;

    let message = if outcome.pendente {
        "Cadastro enviado para moderação. Ele ficará visível após aprovação.".to_string()
    } else {
        "Cadastro registrado com sucesso.".to_string()
    };

    Ok(ApiResponse::with_message(
        SubmissionResponse {
            id: outcome.id,
            pendente: outcome.pendente,
            resumo: outcome.resumo,
        },
        message,
    ))
}
