use crate::error::{AppError, AppResult};
use crate::models::{city, City, CityModel};
use dashmap::DashMap;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

/// City name -> id resolver with a process-lifetime cache.
/// Best-effort: entries are never invalidated (the city list only grows
/// through migrations, and ids are stable).
#[derive(Clone)]
pub struct CityDirectory {
    db: DatabaseConnection,
    cache: Arc<DashMap<String, i32>>,
}

impl CityDirectory {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Resolve a city name as entered on the form.
    pub async fn resolve(&self, name: &str) -> AppResult<i32> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::CityNotFound(name.to_string()));
        }

        if let Some(id) = self.cache.get(trimmed) {
            return Ok(*id);
        }

        let found = City::find()
            .filter(city::Column::Name.eq(trimmed))
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::CityNotFound(trimmed.to_string()))?;

        self.cache.insert(trimmed.to_string(), found.id);
        Ok(found.id)
    }

    pub async fn list(&self) -> AppResult<Vec<CityModel>> {
        let cities = City::find()
            .order_by_asc(city::Column::Name)
            .all(&self.db)
            .await?;
        Ok(cities)
    }

    /// Bulk id -> name lookup for card rendering.
    pub async fn names_for(&self, ids: &[i32]) -> AppResult<std::collections::HashMap<i32, String>> {
        if ids.is_empty() {
            return Ok(Default::default());
        }
        let cities = City::find()
            .filter(city::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await?;
        Ok(cities.into_iter().map(|c| (c.id, c.name)).collect())
    }
}
