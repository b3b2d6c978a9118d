use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Doadores {
    Table,
    Id,
    CityId,
    Nome,
    Telefone,
    Bairro,
    Itens,
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
                    .table(Doadores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Doadores::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Doadores::CityId).integer().not_null())
                    .col(ColumnDef::new(Doadores::Nome).text().null())
                    .col(ColumnDef::new(Doadores::Telefone).text().null())
                    .col(ColumnDef::new(Doadores::Bairro).text().null())
                    .col(
                        ColumnDef::new(Doadores::Itens)
                            .array(ColumnType::Text)
                            .null(),
                    )
                    .col(ColumnDef::new(Doadores::Obs).text().null())
                    .col(
                        ColumnDef::new(Doadores::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_doadores_city_id")
                            .from(Doadores::Table, Doadores::CityId)
                            .to(Cities::Table, Cities::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Doadores::Table).to_owned())
            .await
    }
}
