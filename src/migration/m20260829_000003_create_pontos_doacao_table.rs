use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum PontosDoacao {
    Table,
    Id,
    CityId,
    NomeLocal,
    Responsavel,
    Telefone,
    Endereco,
    Horario,
    Aceita,
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
                    .table(PontosDoacao::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PontosDoacao::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PontosDoacao::CityId).integer().not_null())
                    .col(ColumnDef::new(PontosDoacao::NomeLocal).text().null())
                    .col(ColumnDef::new(PontosDoacao::Responsavel).text().null())
                    .col(ColumnDef::new(PontosDoacao::Telefone).text().null())
                    .col(ColumnDef::new(PontosDoacao::Endereco).text().null())
                    .col(ColumnDef::new(PontosDoacao::Horario).text().null())
                    .col(
                        ColumnDef::new(PontosDoacao::Aceita)
                            .array(ColumnType::Text)
                            .null(),
                    )
                    .col(ColumnDef::new(PontosDoacao::PixTipo).text().null())
                    .col(ColumnDef::new(PontosDoacao::PixChave).text().null())
                    .col(ColumnDef::new(PontosDoacao::PixTitular).text().null())
                    .col(ColumnDef::new(PontosDoacao::PixQrcodeUrl).text().null())
                    // PIX-free donation points are inserted directly and
                    // immediately visible, hence the `approved` default.
                    .col(
                        ColumnDef::new(PontosDoacao::ModerationStatus)
                            .string_len(20)
                            .not_null()
                            .default("approved"),
                    )
                    .col(ColumnDef::new(PontosDoacao::Obs).text().null())
                    .col(
                        ColumnDef::new(PontosDoacao::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pontos_doacao_city_id")
                            .from(PontosDoacao::Table, PontosDoacao::CityId)
                            .to(Cities::Table, Cities::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pontos_doacao_status")
                    .table(PontosDoacao::Table)
                    .col(PontosDoacao::ModerationStatus)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PontosDoacao::Table).to_owned())
            .await
    }
}
