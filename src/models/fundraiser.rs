use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "vaquinhas")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_deserializing)]
    pub id: i32,
    pub city_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub nome_campanha: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub responsavel: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub telefone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub descricao: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub link: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub pix_tipo: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub pix_chave: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub pix_titular: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub pix_qrcode_url: Option<String>,
    /// Fundraisers only reach this table through moderation; starts `pending`.
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    #[serde(default)]
    pub moderation_status: String,
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
