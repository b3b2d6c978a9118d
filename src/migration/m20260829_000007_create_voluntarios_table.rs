use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Voluntarios {
    Table,
    Id,
    CityId,
    Nome,
    Telefone,
    Bairro,
    Habilidade,
    Disponibilidade,
    Veiculo,
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
                    .table(Voluntarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Voluntarios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Voluntarios::CityId).integer().not_null())
                    .col(ColumnDef::new(Voluntarios::Nome).text().null())
                    .col(ColumnDef::new(Voluntarios::Telefone).text().null())
                    .col(ColumnDef::new(Voluntarios::Bairro).text().null())
                    .col(
                        ColumnDef::new(Voluntarios::Habilidade)
                            .array(ColumnType::Text)
                            .null(),
                    )
                    .col(ColumnDef::new(Voluntarios::Disponibilidade).text().null())
                    .col(ColumnDef::new(Voluntarios::Veiculo).text().null())
                    .col(ColumnDef::new(Voluntarios::Obs).text().null())
                    .col(
                        ColumnDef::new(Voluntarios::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_voluntarios_city_id")
                            .from(Voluntarios::Table, Voluntarios::CityId)
                            .to(Cities::Table, Cities::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Voluntarios::Table).to_owned())
            .await
    }
}
