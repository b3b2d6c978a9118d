use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Comunidades {
    Table,
    Id,
    CityId,
    NomeLocal,
    Bairro,
    Responsavel,
    Telefone,
    Familias,
    Necessidades,
    NaoPrecisa,
    Prioridade,
    Obs,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Cities {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comunidades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comunidades::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Comunidades::CityId).integer().not_null())
                    .col(ColumnDef::new(Comunidades::NomeLocal).text().null())
                    .col(ColumnDef::new(Comunidades::Bairro).text().null())
                    .col(ColumnDef::new(Comunidades::Responsavel).text().null())
                    .col(ColumnDef::new(Comunidades::Telefone).text().null())
                    .col(ColumnDef::new(Comunidades::Familias).text().null())
                    .col(
                        ColumnDef::new(Comunidades::Necessidades)
                            .array(ColumnType::Text)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Comunidades::NaoPrecisa)
                            .array(ColumnType::Text)
                            .null(),
                    )
                    .col(ColumnDef::new(Comunidades::Prioridade).text().null())
                    .col(ColumnDef::new(Comunidades::Obs).text().null())
                    .col(
                        ColumnDef::new(Comunidades::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comunidades_city_id")
                            .from(Comunidades::Table, Comunidades::CityId)
                            .to(Cities::Table, Cities::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comunidades::Table).to_owned())
            .await
    }
}
