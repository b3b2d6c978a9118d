use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "desaparecidos")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_deserializing)]
    pub id: i32,
    pub city_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub nome_pessoa: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub idade: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub descricao: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub ultima_vez: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub local_visto: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub saude: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub informante_nome: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub informante_tel: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub relacao: Option<String>,
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
