use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::env;
use std::time::Duration;

/// Connect to Postgres with pool sizes from `DB_MAX/MIN_CONNECTIONS`.
/// Intake traffic is bursty (links shared right after a disaster event),
/// so the defaults lean small with a short connect timeout.
pub async fn get_database() -> Result<DatabaseConnection, DbErr> {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let max_connections = parse_env("DB_MAX_CONNECTIONS", 5);
    let min_connections = parse_env("DB_MIN_CONNECTIONS", 1);

    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(max_connections)
        .min_connections(min_connections)
        .connect_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(120))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(true);

    Database::connect(opt).await
}

fn parse_env(name: &str, default: u32) -> u32 {
    env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
