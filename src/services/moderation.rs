use crate::config::moderation::ModerationConfig;
use crate::domain::{display_value, field_label, ModerationKind};
use crate::error::{AppError, AppResult};
use crate::models::{donation_point, fundraiser, DonationPoint, Fundraiser};
use crate::services::email::EmailService;
use crate::services::upload::{parse_data_url, UploadConfig, UploadService};
use crate::utils::moderation_link;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};
use serde_json::{Map, Value};

/// Encoded ceiling for the QR-code image (~500 KB decoded).
pub const MAX_IMAGE_BASE64_LEN: usize = 750_000;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Approve,
    Reject,
}

impl ModerationAction {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "approve" => Some(ModerationAction::Approve),
            "reject" => Some(ModerationAction::Reject),
            _ => None,
        }
    }

    pub fn status(self) -> &'static str {
        match self {
            ModerationAction::Approve => STATUS_APPROVED,
            ModerationAction::Reject => STATUS_REJECTED,
        }
    }
}

pub struct ModerationService {
    db: DatabaseConnection,
    email: EmailService,
    upload: UploadConfig,
    config: ModerationConfig,
}

impl ModerationService {
    pub fn new(
        db: DatabaseConnection,
        email: EmailService,
        upload: UploadConfig,
        config: ModerationConfig,
    ) -> Self {
        Self {
            db,
            email,
            upload,
            config,
        }
    }

    /// Insert a pending record, attach the optional QR-code image and notify
    /// the administrators. Returns the new record id.
    ///
    /// The image upload is best-effort: a failure is logged and the record
    /// stays pending without an image.
    pub async fn submit_pending(
        &self,
        tipo: ModerationKind,
        payload: Map<String, Value>,
        image_base64: Option<&str>,
    ) -> AppResult<i32> {
        if let Some(image) = image_base64 {
            if image.len() > MAX_IMAGE_BASE64_LEN {
                return Err(AppError::Validation(
                    "Imagem do QR Code muito grande. Máximo 500KB.".to_string(),
                ));
            }
        }

        let mut record = payload.clone();
        record.insert(
            "moderation_status".to_string(),
            Value::String(STATUS_PENDING.to_string()),
        );

        let id = self.insert_pending(tipo, Value::Object(record)).await?;

        let mut qr_url = None;
        if let Some(image) = image_base64 {
            match self.store_image(tipo, id, image).await {
                Ok(url) => qr_url = url,
                Err(e) => tracing::error!("QR-code upload failed for {} #{}: {}", tipo.as_str(), id, e),
            }
        }

        let nome = payload
            .get("nome_campanha")
            .or_else(|| payload.get("nome_local"))
            .and_then(Value::as_str)
            .unwrap_or("Sem nome");
        let subject = format!("[Mutirão] Moderar {}: {}", tipo.label(), nome);
        let html = build_moderation_html(&self.config, tipo, &payload, id, qr_url.as_deref());

        self.email
            .send_moderation_email(&self.config.admins, &subject, &html)
            .await?;

        Ok(id)
    }

    /// Flip a pending record's status from a verified approve/reject link.
    pub async fn apply_action(
        &self,
        id: i32,
        tipo: ModerationKind,
        action: ModerationAction,
    ) -> AppResult<()> {
        match tipo {
            ModerationKind::Vaquinha => {
                let existing = Fundraiser::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or(AppError::NotFound)?;
                let mut active: fundraiser::ActiveModel = existing.into();
                active.moderation_status = ActiveValue::Set(action.status().to_string());
                active.update(&self.db).await?;
            }
            ModerationKind::DoacaoPix => {
                let existing = DonationPoint::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or(AppError::NotFound)?;
                let mut active: donation_point::ActiveModel = existing.into();
                active.moderation_status = ActiveValue::Set(action.status().to_string());
                active.update(&self.db).await?;
            }
        }
        Ok(())
    }

    pub fn config(&self) -> &ModerationConfig {
        &self.config
    }

    async fn insert_pending(&self, tipo: ModerationKind, record: Value) -> AppResult<i32> {
        let id = match tipo {
            ModerationKind::Vaquinha => {
                let model = fundraiser::ActiveModel::from_json(record)?;
                model.insert(&self.db).await?.id
            }
            ModerationKind::DoacaoPix => {
                let model = donation_point::ActiveModel::from_json(record)?;
                model.insert(&self.db).await?.id
            }
        };
        Ok(id)
    }

    /// Decode, store and link the QR-code image. Returns the public URL when
    /// the whole chain succeeded.
    async fn store_image(
        &self,
        tipo: ModerationKind,
        id: i32,
        image_base64: &str,
    ) -> AppResult<Option<String>> {
        let Some((mime, bytes)) = parse_data_url(image_base64) else {
            tracing::warn!("Ignoring malformed QR-code data URL for {} #{}", tipo.as_str(), id);
            return Ok(None);
        };

        let path = UploadService::save_image(
            &self.upload,
            &bytes,
            &mime,
            "pix-qrcodes",
            &id.to_string(),
        )
        .await?;
        let url = format!("{}{}", self.config.app_url, path);

        match tipo {
            ModerationKind::Vaquinha => {
                let active = fundraiser::ActiveModel {
                    id: ActiveValue::Unchanged(id),
                    pix_qrcode_url: ActiveValue::Set(Some(url.clone())),
                    ..Default::default()
                };
                active.update(&self.db).await?;
            }
            ModerationKind::DoacaoPix => {
                let active = donation_point::ActiveModel {
                    id: ActiveValue::Unchanged(id),
                    pix_qrcode_url: ActiveValue::Set(Some(url.clone())),
                    ..Default::default()
                };
                active.update(&self.db).await?;
            }
        }

        Ok(Some(url))
    }
}

/// Moderation email body. Every interpolated field value is HTML-escaped.
pub fn build_moderation_html(
    config: &ModerationConfig,
    tipo: ModerationKind,
    payload: &Map<String, Value>,
    id: i32,
    qr_url: Option<&str>,
) -> String {
    let rows: String = payload
        .iter()
        .filter(|(k, _)| *k != "city_id")
        .filter_map(|(k, v)| display_value(v).map(|val| (k, val)))
        .map(|(k, val)| {
            format!(
                "<tr>\
                 <td style=\"padding:6px 12px;font-weight:600;color:#555;border-bottom:1px solid #eee;white-space:nowrap\">{}</td>\
                 <td style=\"padding:6px 12px;border-bottom:1px solid #eee\">{}</td>\
                 </tr>",
                html_escape::encode_text(field_label(k)),
                html_escape::encode_text(&val)
            )
        })
        .collect();

    let approve = moderation_link(&config.app_url, &config.secret, id, tipo, "approve");
    let reject = moderation_link(&config.app_url, &config.secret, id, tipo, "reject");

    let qr_section = qr_url
        .map(|url| {
            format!(
                "<div style=\"margin-bottom:24px;text-align:center\">\
                 <p style=\"font-weight:600;color:#555;margin:0 0 8px\">QR Code PIX enviado:</p>\
                 <img src=\"{}\" alt=\"QR Code PIX\" \
                 style=\"max-width:200px;max-height:200px;border:2px solid #f6c84b;border-radius:8px;padding:4px;background:#fff\" />\
                 </div>",
                html_escape::encode_double_quoted_attribute(url)
            )
        })
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\
<html lang=\"pt-BR\">\
<head><meta charset=\"UTF-8\"/></head>\
<body style=\"font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;background:#f5f5f5;padding:24px;margin:0\">\
  <div style=\"max-width:600px;margin:0 auto;background:#fff;border-radius:12px;overflow:hidden\">\
    <div style=\"background:#1a3a5c;padding:20px 24px;color:#fff\">\
      <div style=\"font-size:13px;opacity:.8;margin-bottom:4px\">Mutirão — Moderação</div>\
      <div style=\"font-size:20px;font-weight:700\">⚠️ Nova {label} aguarda aprovação</div>\
    </div>\
    <div style=\"padding:24px\">\
      <p style=\"margin:0 0 16px;color:#444\">Um novo cadastro do tipo <strong>{label}</strong> foi enviado e aguarda sua revisão:</p>\
      <table style=\"border-collapse:collapse;width:100%;background:#f9f9f9;border-radius:8px;overflow:hidden;margin-bottom:24px\">\
        <tbody>{rows}</tbody>\
      </table>\
      {qr_section}\
      <div style=\"margin-bottom:24px\">\
        <a href=\"{approve}\" style=\"display:inline-block;background:#16a34a;color:#fff;padding:14px 32px;border-radius:8px;text-decoration:none;font-size:16px;font-weight:700;margin-right:12px\">✅ APROVAR</a>\
        <a href=\"{reject}\" style=\"display:inline-block;background:#dc2626;color:#fff;padding:14px 32px;border-radius:8px;text-decoration:none;font-size:16px;font-weight:700\">❌ RECUSAR</a>\
      </div>\
      <p style=\"font-size:12px;color:#999;margin:0\">ID: {id}<br>Os botões acima agem imediatamente. Após processar, o cadastro será atualizado automaticamente.</p>\
    </div>\
  </div>\
</body>\
</html>",
        label = html_escape::encode_text(tipo.label()),
        rows = rows,
        qr_section = qr_section,
        approve = approve,
        reject = reject,
        id = id,
    )
}
