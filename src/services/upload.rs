use crate::error::{AppError, AppResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;
use tokio::fs;

#[derive(Clone)]
pub struct UploadConfig {
    pub upload_dir: String,
}

/// ~500 KB decoded; the encoded ceiling is enforced at the endpoint.
const MAX_FILE_SIZE: usize = 500 * 1024;
const ALLOWED_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Split a `data:image/<sub>;base64,<data>` URL into MIME type and bytes.
pub fn parse_data_url(data_url: &str) -> Option<(String, Vec<u8>)> {
    let rest = data_url.strip_prefix("data:")?;
    let (mime, encoded) = rest.split_once(";base64,")?;
    if !mime.starts_with("image/") {
        return None;
    }
    let bytes = STANDARD.decode(encoded.trim()).ok()?;
    Some((mime.to_string(), bytes))
}

/// File extension for a declared image MIME type (`jpeg` normalized to `jpg`).
pub fn extension_for(mime: &str) -> Option<&str> {
    let sub = mime.strip_prefix("image/")?;
    Some(match sub {
        "jpeg" => "jpg",
        other => other,
    })
}

/// Validate file magic bytes match the declared content type.
fn validate_magic_bytes(data: &[u8], content_type: &str) -> bool {
    match content_type {
        "image/jpeg" => data.len() >= 3 && data[..3] == [0xFF, 0xD8, 0xFF],
        "image/png" => data.len() >= 4 && data[..4] == [0x89, 0x50, 0x4E, 0x47],
        "image/gif" => data.len() >= 4 && data[..4] == [0x47, 0x49, 0x46, 0x38],
        "image/webp" => {
            data.len() >= 12
                && data[..4] == [0x52, 0x49, 0x46, 0x46]
                && data[8..12] == [0x57, 0x45, 0x42, 0x50]
        }
        _ => false,
    }
}

pub struct UploadService;

impl UploadService {
    /// Save an uploaded image keyed by the record that owns it.
    /// Returns the public URL path (e.g. `/uploads/pix-qrcodes/17.jpg`).
    pub async fn save_image(
        config: &UploadConfig,
        data: &[u8],
        content_type: &str,
        subdirectory: &str,
        stem: &str,
    ) -> AppResult<String> {
        if data.len() > MAX_FILE_SIZE {
            return Err(AppError::Upload(format!(
                "Image of {} bytes exceeds the {} byte limit",
                data.len(),
                MAX_FILE_SIZE
            )));
        }

        if !ALLOWED_CONTENT_TYPES.contains(&content_type) {
            return Err(AppError::Upload(format!(
                "Unsupported file type: {}. Allowed: jpeg, png, gif, webp",
                content_type
            )));
        }

        if !validate_magic_bytes(data, content_type) {
            return Err(AppError::Upload(
                "File content does not match declared content type".to_string(),
            ));
        }

        let ext = extension_for(content_type)
            .ok_or_else(|| AppError::Upload("Unsupported file type".to_string()))?;

        let filename = format!("{}.{}", stem, ext);
        let dir = Path::new(&config.upload_dir).join(subdirectory);

        fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::Upload(format!("Failed to create upload directory: {}", e)))?;

        let file_path = dir.join(&filename);
        fs::write(&file_path, data)
            .await
            .map_err(|e| AppError::Upload(format!("Failed to write file: {}", e)))?;

        Ok(format!("/uploads/{}/{}", subdirectory, filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_magic_bytes_valid() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        assert!(validate_magic_bytes(&data, "image/jpeg"));
    }

    #[test]
    fn png_magic_bytes_valid() {
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A];
        assert!(validate_magic_bytes(&data, "image/png"));
    }

    #[test]
    fn wrong_magic_bytes_rejected() {
        let png_data = [0x89, 0x50, 0x4E, 0x47];
        assert!(!validate_magic_bytes(&png_data, "image/jpeg"));
    }

    #[test]
    fn empty_data_rejected() {
        assert!(!validate_magic_bytes(&[], "image/jpeg"));
        assert!(!validate_magic_bytes(&[], "image/png"));
    }

    #[test]
    fn data_url_parses() {
        let (mime, bytes) = parse_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(&bytes[..4], &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[test]
    fn data_url_without_prefix_rejected() {
        assert!(parse_data_url("iVBORw0KGgo=").is_none());
        assert!(parse_data_url("data:text/plain;base64,aGk=").is_none());
        assert!(parse_data_url("data:image/png;base64,!!!").is_none());
    }

    #[test]
    fn jpeg_extension_normalized() {
        assert_eq!(extension_for("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for("image/png"), Some("png"));
        assert_eq!(extension_for("application/pdf"), None);
    }
}
