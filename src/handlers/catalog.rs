use crate::domain::Category;
use crate::error::{AppError, AppResult};
use crate::services::catalog::{CatalogPage, CatalogService};
use crate::services::city::CityDirectory;
use axum::{extract::Query, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct CatalogQuery {
    /// Filter by city name; omit for all cities.
    pub cidade: Option<String>,
    /// Filter by category slug; omit for all categories.
    pub categoria: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/registros",
    params(CatalogQuery),
    responses(
        (status = 200, description = "Rendered cards, newest first per category", body = CatalogPage),
        (status = 400, description = "Unknown city or category slug", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn list_records(
    Extension(db): Extension<DatabaseConnection>,
    Extension(cities): Extension<CityDirectory>,
    Query(query): Query<CatalogQuery>,
) -> AppResult<Json<CatalogPage>> {
    let categoria = match query.categoria.as_deref() {
        Some(slug) => Some(Category::from_slug(slug).ok_or_else(|| {
            AppError::Validation(format!("Categoria inválida: {}", slug))
        })?),
        None => None,
    };

    let service = CatalogService::new(db, cities);
    let page = service.list(query.cidade.as_deref(), categoria).await?;
    Ok(Json(page))
}
