use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Desaparecidos {
    Table,
    Id,
    CityId,
    NomePessoa,
    Idade,
    Descricao,
    UltimaVez,
    LocalVisto,
    Saude,
    InformanteNome,
    InformanteTel,
    Relacao,
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
                    .table(Desaparecidos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Desaparecidos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Desaparecidos::CityId).integer().not_null())
                    .col(ColumnDef::new(Desaparecidos::NomePessoa).text().null())
                    .col(ColumnDef::new(Desaparecidos::Idade).text().null())
                    .col(ColumnDef::new(Desaparecidos::Descricao).text().null())
                    .col(ColumnDef::new(Desaparecidos::UltimaVez).text().null())
                    .col(ColumnDef::new(Desaparecidos::LocalVisto).text().null())
                    .col(ColumnDef::new(Desaparecidos::Saude).text().null())
                    .col(ColumnDef::new(Desaparecidos::InformanteNome).text().null())
                    .col(ColumnDef::new(Desaparecidos::InformanteTel).text().null())
                    .col(ColumnDef::new(Desaparecidos::Relacao).text().null())
                    .col(ColumnDef::new(Desaparecidos::Obs).text().null())
                    .col(
                        ColumnDef::new(Desaparecidos::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_desaparecidos_city_id")
                            .from(Desaparecidos::Table, Desaparecidos::CityId)
                            .to(Cities::Table, Cities::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Desaparecidos::Table).to_owned())
            .await
    }
}
