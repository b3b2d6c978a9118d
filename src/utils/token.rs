use crate::domain::ModerationKind;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Hex HMAC-SHA256 over `"{id}:{tipo}"`. Authenticates the approve/reject
/// links in the moderation email without a login step.
pub fn sign_token(secret: &[u8], id: i32, tipo: ModerationKind) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts any key length");
    mac.update(format!("{}:{}", id, tipo.as_str()).as_bytes());
    hex_encode(&mac.finalize().into_bytes())
}

pub fn verify_token(secret: &[u8], id: i32, tipo: ModerationKind, token: &str) -> bool {
    let Some(sig) = hex_decode(token) else {
        return false;
    };
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts any key length");
    mac.update(format!("{}:{}", id, tipo.as_str()).as_bytes());
    mac.verify_slice(&sig).is_ok()
}

/// Moderation action link embedded in the admin email.
pub fn moderation_link(
    app_url: &str,
    secret: &[u8],
    id: i32,
    tipo: ModerationKind,
    acao: &str,
) -> String {
    let token = sign_token(secret, id, tipo);
    format!(
        "{}/api/moderar?id={}&tipo={}&acao={}&token={}",
        app_url,
        id,
        tipo.as_str(),
        acao,
        token
    )
}

fn hex_encode(bytes: &[u8]) -> String {
    use std::fmt::Write;

    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
            let _ = write!(out, "{:02x}", b);
            out
        })
}

fn hex_decode(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| s.get(i..i + 2).and_then(|p| u8::from_str_radix(p, 16).ok()))
        .collect()
}
