use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "doadores")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_deserializing)]
    pub id: i32,
    pub city_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub nome: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub telefone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bairro: Option<String>,
    pub itens: Option<Vec<String>>,
    #[sea_orm(column_type = "Text", nullable)]
    pub obs: Option<String>,
    #[serde(skip_deserializing)]
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::CityId",
        to = "super::city::Column::Id"
    )]
    City,
}

impl ActiveModelBehavior for ActiveModel {}
