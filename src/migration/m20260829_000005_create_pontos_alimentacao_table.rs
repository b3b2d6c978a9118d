use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum PontosAlimentacao {
    Table,
    Id,
    CityId,
    NomeLocal,
    Responsavel,
    Telefone,
    Endereco,
    Horario,
    Refeicao,
    Capacidade,
    Voluntarios,
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
                    .table(PontosAlimentacao::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PontosAlimentacao::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PontosAlimentacao::CityId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PontosAlimentacao::NomeLocal).text().null())
                    .col(
                        ColumnDef::new(PontosAlimentacao::Responsavel)
                            .text()
                            .null(),
                    )
                    .col(ColumnDef::new(PontosAlimentacao::Telefone).text().null())
                    .col(ColumnDef::new(PontosAlimentacao::Endereco).text().null())
                    .col(ColumnDef::new(PontosAlimentacao::Horario).text().null())
                    .col(
                        ColumnDef::new(PontosAlimentacao::Refeicao)
                            .array(ColumnType::Text)
                            .null(),
                    )
                    .col(ColumnDef::new(PontosAlimentacao::Capacidade).text().null())
                    .col(
                        ColumnDef::new(PontosAlimentacao::Voluntarios)
                            .text()
                            .null(),
                    )
                    .col(ColumnDef::new(PontosAlimentacao::Obs).text().null())
                    .col(
                        ColumnDef::new(PontosAlimentacao::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pontos_alimentacao_city_id")
                            .from(PontosAlimentacao::Table, PontosAlimentacao::CityId)
                            .to(Cities::Table, Cities::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PontosAlimentacao::Table).to_owned())
            .await
    }
}
