mod common;

use mutirao::domain::ModerationKind;
use mutirao::utils::sign_token;
use serde_json::{json, Value};

const TEST_SECRET: &[u8] = b"integration_test_moderation_secret";

fn card_titles(body: &Value) -> Vec<String> {
    body["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["titulo"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn pending_fundraiser_is_invisible_until_approved() {
    let app = common::spawn_app().await;

    let nome = format!("Vaquinha Catálogo {}", std::process::id());
    let (status, body) = common::submit_record(
        &app,
        "Rio de Janeiro",
        "vaquinha",
        json!({ "nome_campanha": nome, "pix_chave": "cat@example.com" }),
    )
    .await;
    assert_eq!(status, 200);
    let id = body["data"]["id"].as_i64().unwrap() as i32;

    let resp = app
        .client
        .get(app.url("/api/v1/registros?categoria=vaquinha"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let page: Value = resp.json().await.unwrap();
    assert!(!card_titles(&page).contains(&nome));

    // Approve, then it shows up
    let token = sign_token(TEST_SECRET, id, ModerationKind::Vaquinha);
    let resp = app
        .client
        .get(app.url(&format!(
            "/api/moderar?id={}&tipo=vaquinha&acao=approve&token={}",
            id, token
        )))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .get(app.url("/api/v1/registros?categoria=vaquinha"))
        .send()
        .await
        .unwrap();
    let page: Value = resp.json().await.unwrap();
    assert!(card_titles(&page).contains(&nome));
}

#[tokio::test]
async fn city_filter_limits_results() {
    let app = common::spawn_app().await;

    let pid = std::process::id();
    let nome_jf = format!("Abrigo JF {}", pid);
    let nome_rj = format!("Abrigo RJ {}", pid);

    common::submit_record(
        &app,
        "Juiz de Fora",
        "abrigo",
        json!({ "nome_local": nome_jf }),
    )
    .await;
    common::submit_record(
        &app,
        "Rio de Janeiro",
        "abrigo",
        json!({ "nome_local": nome_rj }),
    )
    .await;

    let resp = app
        .client
        .get(app.url("/api/v1/registros?categoria=abrigo&cidade=Juiz%20de%20Fora"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let page: Value = resp.json().await.unwrap();

    let titles = card_titles(&page);
    assert!(titles.contains(&nome_jf));
    assert!(!titles.contains(&nome_rj));

    for card in page["cards"].as_array().unwrap() {
        assert_eq!(card["cidade"], "Juiz de Fora");
    }
}

#[tokio::test]
async fn cards_carry_labelled_lines() {
    let app = common::spawn_app().await;

    let nome = format!("Abrigo Linhas {}", std::process::id());
    common::submit_record(
        &app,
        "Rio de Janeiro",
        "abrigo",
        json!({
            "nome_local": nome,
            "vagas": "12",
            "recursos": ["água"],
        }),
    )
    .await;

    let resp = app
        .client
        .get(app.url("/api/v1/registros?categoria=abrigo"))
        .send()
        .await
        .unwrap();
    let page: Value = resp.json().await.unwrap();

    let card = page["cards"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["titulo"] == nome.as_str())
        .expect("Card for the new shelter");
    assert_eq!(card["categoria"], "abrigo");

    let lines = card["linhas"].as_array().unwrap();
    assert!(lines
        .iter()
        .any(|l| l["label"] == "Vagas disponíveis" && l["value"] == "12"));
}

#[tokio::test]
async fn unknown_category_slug_is_rejected() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .get(app.url("/api/v1/registros?categoria=inexistente"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Categoria inválida"));
}

#[tokio::test]
async fn unknown_city_filter_is_rejected() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .get(app.url("/api/v1/registros?cidade=Atlântida"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn city_directory_lists_seeded_cities() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .get(app.url("/api/v1/cidades"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let cities: Value = resp.json().await.unwrap();
    let names: Vec<&str> = cities
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["nome"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Rio de Janeiro"));

    // Alphabetical order
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}
