use crate::config::moderation::ModerationConfig;
use crate::domain::ModerationKind;
use crate::error::{AppError, AppResult};
use crate::services::email::EmailService;
use crate::services::moderation::ModerationService;
use crate::services::upload::UploadConfig;
use axum::{response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct NotifyRequest {
    /// Wire category: `vaquinha` or `doacao_pix`.
    pub tipo: Option<String>,
    /// Normalized record, column name -> value.
    pub payload: Option<Value>,
    /// Optional `data:image/...;base64,` QR-code image.
    pub pix_qrcode_base64: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotifyResponse {
    pub ok: bool,
    /// Id of the pending record.
    pub id: i32,
}

#[utoipa::path(
    post,
    path = "/api/notify",
    request_body = NotifyRequest,
    responses(
        (status = 200, description = "Pending record created and admins notified", body = NotifyResponse),
        (status = 400, description = "Missing/invalid tipo or payload, or oversized image", body = AppError),
        (status = 500, description = "Database or email failure", body = AppError),
    ),
    tag = "moderation"
)]
pub async fn notify(
    Extension(db): Extension<DatabaseConnection>,
    Extension(email): Extension<EmailService>,
    Extension(upload): Extension<UploadConfig>,
    Extension(config): Extension<ModerationConfig>,
    Json(req): Json<NotifyRequest>,
) -> AppResult<impl IntoResponse> {
    let (Some(tipo), Some(payload)) = (req.tipo, req.payload) else {
        return Err(AppError::Validation(
            "tipo e payload são obrigatórios".to_string(),
        ));
    };

    let tipo = ModerationKind::from_str(&tipo)
        .ok_or_else(|| AppError::Validation("Tipo inválido".to_string()))?;

    let payload = payload
        .as_object()
        .cloned()
        .ok_or_else(|| AppError::Validation("payload deve ser um objeto".to_string()))?;

    let service = ModerationService::new(db, email, upload, config);
    let id = service
        .submit_pending(tipo, payload, req.pix_qrcode_base64.as_deref())
        .await?;

    Ok(Json(json!({ "ok": true, "id": id })))
}
