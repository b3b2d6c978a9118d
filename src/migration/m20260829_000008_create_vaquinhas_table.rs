use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Vaquinhas {
    Table,
    Id,
    CityId,
    NomeCampanha,
    Responsavel,
    Telefone,
    Descricao,
    Link,
    PixTipo,
    PixChave,
    PixTitular,
    PixQrcodeUrl,
    ModerationStatus,
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
                    .table(Vaquinhas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vaquinhas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vaquinhas::CityId).integer().not_null())
                    .col(ColumnDef::new(Vaquinhas::NomeCampanha).text().null())
                    .col(ColumnDef::new(Vaquinhas::Responsavel).text().null())
                    .col(ColumnDef::new(Vaquinhas::Telefone).text().null())
                    .col(ColumnDef::new(Vaquinhas::Descricao).text().null())
                    .col(ColumnDef::new(Vaquinhas::Link).text().null())
                    .col(ColumnDef::new(Vaquinhas::PixTipo).text().null())
                    .col(ColumnDef::new(Vaquinhas::PixChave).text().null())
                    .col(ColumnDef::new(Vaquinhas::PixTitular).text().null())
                    .col(ColumnDef::new(Vaquinhas::PixQrcodeUrl).text().null())
                    .col(
                        ColumnDef::new(Vaquinhas::ModerationStatus)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Vaquinhas::Obs).text().null())
                    .col(
                        ColumnDef::new(Vaquinhas::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vaquinhas_city_id")
                            .from(Vaquinhas::Table, Vaquinhas::CityId)
                            .to(Cities::Table, Cities::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vaquinhas_status")
                    .table(Vaquinhas::Table)
                    .col(Vaquinhas::ModerationStatus)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vaquinhas::Table).to_owned())
            .await
    }
}
