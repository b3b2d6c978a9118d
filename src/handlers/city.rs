use crate::error::{AppError, AppResult};
use crate::services::city::CityDirectory;
use axum::{Extension, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CityEntry {
    pub id: i32,
    pub nome: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/cidades",
    responses(
        (status = 200, description = "Covered cities, alphabetical", body = [CityEntry]),
        (status = 500, description = "Database failure", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn list_cities(
    Extension(cities): Extension<CityDirectory>,
) -> AppResult<Json<Vec<CityEntry>>> {
    let entries = cities
        .list()
        .await?
        .into_iter()
        .map(|c| CityEntry {
            id: c.id,
            nome: c.name,
        })
        .collect();
    Ok(Json(entries))
}
