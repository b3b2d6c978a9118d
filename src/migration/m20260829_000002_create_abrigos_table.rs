use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Abrigos {
    Table,
    Id,
    CityId,
    NomeLocal,
    Responsavel,
    Telefone,
    Endereco,
    Bairro,
    Vagas,
    Recursos,
    Animais,
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
                    .table(Abrigos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Abrigos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Abrigos::CityId).integer().not_null())
                    .col(ColumnDef::new(Abrigos::NomeLocal).text().null())
                    .col(ColumnDef::new(Abrigos::Responsavel).text().null())
                    .col(ColumnDef::new(Abrigos::Telefone).text().null())
                    .col(ColumnDef::new(Abrigos::Endereco).text().null())
                    .col(ColumnDef::new(Abrigos::Bairro).text().null())
                    .col(ColumnDef::new(Abrigos::Vagas).text().null())
                    .col(
                        ColumnDef::new(Abrigos::Recursos)
                            .array(ColumnType::Text)
                            .null(),
                    )
                    .col(ColumnDef::new(Abrigos::Animais).text().null())
                    .col(ColumnDef::new(Abrigos::Obs).text().null())
                    .col(
                        ColumnDef::new(Abrigos::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_abrigos_city_id")
                            .from(Abrigos::Table, Abrigos::CityId)
                            .to(Cities::Table, Cities::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_abrigos_created_at")
                    .table(Abrigos::Table)
                    .col(Abrigos::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Abrigos::Table).to_owned())
            .await
    }
}
