use sea_orm_migration::prelude::*;

mod m20260829_000001_create_cities_table;
mod m20260829_000002_create_abrigos_table;
mod m20260829_000003_create_pontos_doacao_table;
mod m20260829_000004_create_desaparecidos_table;
mod m20260829_000005_create_pontos_alimentacao_table;
mod m20260829_000006_create_comunidades_table;
mod m20260829_000007_create_voluntarios_table;
mod m20260829_000008_create_vaquinhas_table;
mod m20260829_000009_create_doadores_table;
mod m20260829_000010_seed_cities;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260829_000001_create_cities_table::Migration),
            Box::new(m20260829_000002_create_abrigos_table::Migration),
            Box::new(m20260829_000003_create_pontos_doacao_table::Migration),
            Box::new(m20260829_000004_create_desaparecidos_table::Migration),
            Box::new(m20260829_000005_create_pontos_alimentacao_table::Migration),
            Box::new(m20260829_000006_create_comunidades_table::Migration),
            Box::new(m20260829_000007_create_voluntarios_table::Migration),
            Box::new(m20260829_000008_create_vaquinhas_table::Migration),
            Box::new(m20260829_000009_create_doadores_table::Migration),
            Box::new(m20260829_000010_seed_cities::Migration),
        ]
    }
}
