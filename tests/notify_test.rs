mod common;

use mutirao::models::{fundraiser, Fundraiser};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde_json::{json, Value};

#[tokio::test]
async fn notify_requires_tipo_and_payload() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/api/notify"))
        .json(&json!({ "payload": { "nome_campanha": "Sem tipo" } }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let resp = app
        .client
        .post(app.url("/api/notify"))
        .json(&json!({ "tipo": "vaquinha" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn notify_rejects_unknown_tipo() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/api/notify"))
        .json(&json!({
            "tipo": "abrigo",
            "payload": { "nome_local": "Tipo errado" },
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("Tipo inválido"));
}

#[tokio::test]
async fn notify_rejects_non_object_payload() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/api/notify"))
        .json(&json!({ "tipo": "vaquinha", "payload": "texto" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn notify_rejects_oversized_image() {
    let app = common::spawn_app().await;

    let nome = format!("Vaquinha Imagem Grande {}", std::process::id());
    let oversized = "a".repeat(750_001);

    let resp = app
        .client
        .post(app.url("/api/notify"))
        .json(&json!({
            "tipo": "vaquinha",
            "payload": {
                "nome_campanha": nome,
                "city_id": 1,
            },
            "pix_qrcode_base64": oversized,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("500KB"));

    // Rejected before any insert
    let row = Fundraiser::find()
        .filter(fundraiser::Column::NomeCampanha.eq(nome))
        .one(&app.db)
        .await
        .unwrap();
    assert!(row.is_none());
}

#[tokio::test]
async fn notify_stores_qr_image_and_links_it() {
    let app = common::spawn_app().await;

    let nome = format!("Vaquinha QR {}", std::process::id());
    // Minimal PNG header, enough to pass the magic-byte check
    let resp = app
        .client
        .post(app.url("/api/notify"))
        .json(&json!({
            "tipo": "vaquinha",
            "payload": {
                "nome_campanha": nome,
                "pix_chave": "qr@example.com",
                "city_id": 1,
            },
            "pix_qrcode_base64": "data:image/png;base64,iVBORw0KGgo=",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let id = body["id"].as_i64().unwrap() as i32;

    let row = Fundraiser::find_by_id(id)
        .one(&app.db)
        .await
        .unwrap()
        .expect("Fundraiser row should exist");
    assert_eq!(row.moderation_status, "pending");

    let url = row.pix_qrcode_url.expect("QR-code URL should be linked");
    assert!(url.ends_with(&format!("/uploads/pix-qrcodes/{}.png", id)));

    let stored = format!("./test_uploads/pix-qrcodes/{}.png", id);
    assert!(std::fs::metadata(&stored).is_ok(), "file missing: {}", stored);
}

#[tokio::test]
async fn notify_tolerates_unstorable_qr_image() {
    let app = common::spawn_app().await;

    // Decodes fine but is not a PNG: the upload fails, the record stays
    let nome = format!("Vaquinha QR Ruim {}", std::process::id());
    let resp = app
        .client
        .post(app.url("/api/notify"))
        .json(&json!({
            "tipo": "vaquinha",
            "payload": {
                "nome_campanha": nome,
                "pix_chave": "qr-ruim@example.com",
                "city_id": 1,
            },
            "pix_qrcode_base64": "data:image/png;base64,bm90YW5pbWFnZQ==",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    let id = body["id"].as_i64().unwrap() as i32;

    let row = Fundraiser::find_by_id(id)
        .one(&app.db)
        .await
        .unwrap()
        .expect("Fundraiser row should exist");
    assert_eq!(row.moderation_status, "pending");
    assert_eq!(row.pix_qrcode_url, None);
}

#[tokio::test]
async fn notify_tolerates_malformed_qr_data_url() {
    let app = common::spawn_app().await;

    let nome = format!("Vaquinha QR Malformada {}", std::process::id());
    let resp = app
        .client
        .post(app.url("/api/notify"))
        .json(&json!({
            "tipo": "vaquinha",
            "payload": {
                "nome_campanha": nome,
                "city_id": 1,
            },
            "pix_qrcode_base64": "iVBORw0KGgo=",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let id = body["id"].as_i64().unwrap() as i32;

    let row = Fundraiser::find_by_id(id)
        .one(&app.db)
        .await
        .unwrap()
        .expect("Fundraiser row should exist");
    assert_eq!(row.pix_qrcode_url, None);
}

#[tokio::test]
async fn notify_inserts_pending_fundraiser() {
    let app = common::spawn_app().await;

    let nome = format!("Vaquinha Notify {}", std::process::id());
    let resp = app
        .client
        .post(app.url("/api/notify"))
        .json(&json!({
            "tipo": "vaquinha",
            "payload": {
                "nome_campanha": nome,
                "link": "https://vakinha.example/999",
                "pix_chave": "notify@example.com",
                "city_id": 1,
            },
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    let id = body["id"].as_i64().expect("Response missing id") as i32;

    let row = Fundraiser::find_by_id(id)
        .one(&app.db)
        .await
        .unwrap()
        .expect("Fundraiser row should exist");
    assert_eq!(row.moderation_status, "pending");
    assert_eq!(row.pix_chave.as_deref(), Some("notify@example.com"));
}
