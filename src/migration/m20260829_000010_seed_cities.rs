use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Cities {
    Table,
    Name,
}

/// Municipalities covered by the effort. New ones can be appended in a
/// later migration; the unique name constraint keeps reruns idempotent.
const CITY_NAMES: &[&str] = &[
    "Juiz de Fora",
    "Matias Barbosa",
    "Santos Dumont",
    "Bicas",
    "Lima Duarte",
    "Chácara",
    "Belmiro Braga",
    "Simão Pereira",
    "Petrópolis",
    "Teresópolis",
    "Rio de Janeiro",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(Cities::Table)
            .columns([Cities::Name])
            .on_conflict(
                OnConflict::column(Cities::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .to_owned();

        for name in CITY_NAMES {
            insert.values_panic([(*name).into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut delete = Query::delete().from_table(Cities::Table).to_owned();
        delete.and_where(
            Expr::col(Cities::Name).is_in(CITY_NAMES.iter().copied().collect::<Vec<_>>()),
        );
        manager.exec_stmt(delete).await
    }
}
