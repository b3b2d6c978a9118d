#![allow(dead_code)]

use reqwest::Client;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;
use std::net::SocketAddr;
use std::sync::Once;
use tokio::sync::OnceCell;

static INIT: Once = Once::new();
static DB_READY: OnceCell<()> = OnceCell::const_new();

fn init_env() {
    INIT.call_once(|| {
        dotenv::dotenv().ok();
        std::env::set_var("MODERATION_SECRET", "integration_test_moderation_secret");
        std::env::set_var("MODERATION_ADMINS", "moderacao@test.com");
        std::env::set_var("APP_URL", "http://localhost:3000");
        // Rate limiting off so rapid sequential requests don't 429
        std::env::set_var("RATE_LIMIT_ENABLED", "false");
    });
}

pub struct TestApp {
    pub addr: String,
    pub db: DatabaseConnection,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.addr, path)
    }
}

pub async fn spawn_app() -> TestApp {
    init_env();

    let database_url = std::env::var("TEST_DATABASE_URL")
        .unwrap_or_else(|_| std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"));

    let db = sea_orm::Database::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    // Migrate and truncate exactly once per test binary; every caller
    // awaits completion before inserting rows.
    DB_READY
        .get_or_init(|| async {
            mutirao::migration::Migrator::up(&db, None)
                .await
                .expect("Failed to run migrations");
            // Record tables only; cities stay, they are seeded by migration
            cleanup_tables(&db).await;
        })
        .await;

    let cities = mutirao::services::city::CityDirectory::new(db.clone());
    let upload_config = mutirao::services::upload::UploadConfig {
        upload_dir: "./test_uploads".to_string(),
    };
    let email_service = mutirao::services::email::EmailService::from_env();
    let moderation_config = mutirao::config::moderation::ModerationConfig::from_env()
        .expect("Moderation config must be valid in tests");

    let app = axum::Router::new()
        .route("/", axum::routing::get(|| async { "ok" }))
        .merge(mutirao::routes::create_routes())
        .layer(axum::extract::Extension(db.clone()))
        .layer(axum::extract::Extension(cities))
        .layer(axum::extract::Extension(upload_config))
        .layer(axum::extract::Extension(email_service))
        .layer(axum::extract::Extension(moderation_config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    let addr_str = format!("http://{}", addr);
    let client = Client::new();

    TestApp {
        addr: addr_str,
        db,
        client,
    }
}

async fn cleanup_tables(db: &DatabaseConnection) {
    let tables = [
        "abrigos",
        "pontos_doacao",
        "desaparecidos",
        "pontos_alimentacao",
        "comunidades",
        "voluntarios",
        "vaquinhas",
        "doadores",
    ];

    for table in tables {
        let sql = format!("TRUNCATE TABLE {} CASCADE", table);
        let _ = db
            .execute(Statement::from_string(
                sea_orm::DatabaseBackend::Postgres,
                sql,
            ))
            .await;
    }
}

/// Count rows of a table, optionally filtered by moderation status.
pub async fn count_rows(db: &DatabaseConnection, table: &str, status: Option<&str>) -> i64 {
    let sql = match status {
        Some(s) => format!(
            "SELECT COUNT(*) AS n FROM {} WHERE moderation_status = '{}'",
            table, s
        ),
        None => format!("SELECT COUNT(*) AS n FROM {}", table),
    };

    let row = db
        .query_one(Statement::from_string(
            sea_orm::DatabaseBackend::Postgres,
            sql,
        ))
        .await
        .expect("Count query failed")
        .expect("Count query returned no row");

    row.try_get::<i64>("", "n").expect("Count column missing")
}

/// Submit a record through the public intake endpoint and return the body.
pub async fn submit_record(
    app: &TestApp,
    cidade: &str,
    categoria: &str,
    campos: serde_json::Value,
) -> (reqwest::StatusCode, serde_json::Value) {
    let resp = app
        .client
        .post(app.url("/api/v1/cadastros"))
        .json(&serde_json::json!({
            "cidade": cidade,
            "categoria": categoria,
            "campos": campos,
        }))
        .send()
        .await
        .expect("Failed to send submission");

    let status = resp.status();
    let body: serde_json::Value = resp.json().await.expect("Failed to parse response");
    (status, body)
}
