use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "comunidades")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_deserializing)]
    pub id: i32,
    pub city_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub nome_local: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bairro: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub responsavel: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub telefone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub familias: Option<String>,
    pub necessidades: Option<Vec<String>>,
    pub nao_precisa: Option<Vec<String>>,
    #[sea_orm(column_type = "Text", nullable)]
    pub prioridade: Option<String>,
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
