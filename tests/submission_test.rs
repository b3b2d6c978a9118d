mod common;

use mutirao::models::{donation_point, fundraiser, shelter, DonationPoint, Fundraiser, Shelter};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde_json::{json, Value};

#[tokio::test]
async fn shelter_submission_creates_record() {
    let app = common::spawn_app().await;

    let nome = format!("Abrigo Teste {}", std::process::id());
    let (status, body) = common::submit_record(
        &app,
        "Rio de Janeiro",
        "abrigo",
        json!({
            "nome_local": nome,
            "endereco": "Rua das Flores, 10",
            "vagas": "3",
            "recursos": ["água", "banheiros"],
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["pendente"], false);

    let resumo = body["data"]["resumo"].as_str().unwrap();
    assert!(resumo.contains("Rio de Janeiro"));
    assert!(resumo.contains("Vagas disponíveis: 3"));
    assert!(resumo.contains("água, banheiros"));

    let row = Shelter::find()
        .filter(shelter::Column::NomeLocal.eq(nome.clone()))
        .one(&app.db)
        .await
        .unwrap()
        .expect("Shelter row should exist");
    assert_eq!(row.vagas.as_deref(), Some("3"));
    assert_eq!(
        row.recursos,
        Some(vec!["água".to_string(), "banheiros".to_string()])
    );
}

#[tokio::test]
async fn legacy_field_names_are_renamed() {
    let app = common::spawn_app().await;

    let nome = format!("Abrigo Renomeado {}", std::process::id());
    let (status, _body) = common::submit_record(
        &app,
        "Rio de Janeiro",
        "abrigo",
        json!({
            "local": nome,
            "whatsapp": "21999998888",
        }),
    )
    .await;

    assert_eq!(status, 200);

    let row = Shelter::find()
        .filter(shelter::Column::NomeLocal.eq(nome))
        .one(&app.db)
        .await
        .unwrap()
        .expect("Renamed nome_local should be stored");
    assert_eq!(row.telefone.as_deref(), Some("21999998888"));
}

#[tokio::test]
async fn unknown_city_is_rejected() {
    let app = common::spawn_app().await;

    let (status, body) = common::submit_record(
        &app,
        "Atlântida",
        "abrigo",
        json!({ "nome_local": "Abrigo Perdido" }),
    )
    .await;

    assert_eq!(status, 400);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Cidade não encontrada"));
}

#[tokio::test]
async fn fundraiser_always_goes_to_moderation() {
    let app = common::spawn_app().await;

    let nome = format!("Vaquinha Teste {}", std::process::id());
    let (status, body) = common::submit_record(
        &app,
        "Rio de Janeiro",
        "vaquinha",
        json!({
            "nome_campanha": nome,
            "link": "https://vakinha.example/123",
            "pix_chave": "vaquinha@example.com",
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["data"]["pendente"], true);

    let row = Fundraiser::find()
        .filter(fundraiser::Column::NomeCampanha.eq(nome))
        .one(&app.db)
        .await
        .unwrap()
        .expect("Fundraiser row should exist");
    assert_eq!(row.moderation_status, "pending");
}

#[tokio::test]
async fn donation_point_with_pix_key_is_moderated() {
    let app = common::spawn_app().await;

    let nome = format!("Ponto PIX {}", std::process::id());
    let (status, body) = common::submit_record(
        &app,
        "Rio de Janeiro",
        "doacao",
        json!({
            "nome_local": nome,
            "pix_chave": "ponto@example.com",
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["data"]["pendente"], true);

    let row = DonationPoint::find()
        .filter(donation_point::Column::NomeLocal.eq(nome))
        .one(&app.db)
        .await
        .unwrap()
        .expect("Donation point row should exist");
    assert_eq!(row.moderation_status, "pending");
}

#[tokio::test]
async fn sentinel_pix_is_never_persisted() {
    let app = common::spawn_app().await;

    let nome = format!("Ponto Sem PIX {}", std::process::id());
    let (status, body) = common::submit_record(
        &app,
        "Rio de Janeiro",
        "doacao",
        json!({
            "nome_local": nome,
            "pix_chave": "— Não recebe PIX —",
            "aceita": ["roupas", "— Não recebe PIX —"],
        }),
    )
    .await;

    // Sentinel key means no PIX, so the record skips moderation entirely
    assert_eq!(status, 200);
    assert_eq!(body["data"]["pendente"], false);

    let resumo = body["data"]["resumo"].as_str().unwrap();
    assert!(!resumo.contains("Não recebe PIX"));

    let row = DonationPoint::find()
        .filter(donation_point::Column::NomeLocal.eq(nome))
        .one(&app.db)
        .await
        .unwrap()
        .expect("Donation point row should exist");
    assert_eq!(row.pix_chave, None);
    assert_eq!(row.moderation_status, "approved");
    assert_eq!(row.aceita, Some(vec!["roupas".to_string()]));
}

#[tokio::test]
async fn summary_contains_header_and_labels() {
    let app = common::spawn_app().await;

    let (status, body) = common::submit_record(
        &app,
        "Juiz de Fora",
        "voluntario",
        json!({
            "nome": "Maria",
            "habilidade": ["resgate", "cozinha"],
        }),
    )
    .await;

    assert_eq!(status, 200);
    let resumo = body["data"]["resumo"].as_str().unwrap();
    assert!(resumo.contains("=== MUTIRÃO"));
    assert!(resumo.contains("📍 Cidade: Juiz de Fora"));
    assert!(resumo.contains("resgate, cozinha"));
}

#[tokio::test]
async fn invalid_category_is_rejected() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/api/v1/cadastros"))
        .json(&json!({
            "cidade": "Rio de Janeiro",
            "categoria": "inexistente",
            "campos": {},
        }))
        .send()
        .await
        .unwrap();

    // Unknown enum variant fails deserialization before the handler runs
    assert_eq!(resp.status(), 422);
}

#[tokio::test]
async fn empty_city_is_rejected() {
    let app = common::spawn_app().await;

    let (status, body) = common::submit_record(&app, "", "abrigo", json!({})).await;

    assert_eq!(status, 400);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn null_fields_are_dropped() {
    let app = common::spawn_app().await;

    let nome = format!("Abrigo Nulo {}", std::process::id());
    let (status, _body) = common::submit_record(
        &app,
        "Rio de Janeiro",
        "abrigo",
        json!({
            "nome_local": nome,
            "obs": Value::Null,
        }),
    )
    .await;

    assert_eq!(status, 200);

    let row = Shelter::find()
        .filter(shelter::Column::NomeLocal.eq(nome))
        .one(&app.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.obs, None);
}
