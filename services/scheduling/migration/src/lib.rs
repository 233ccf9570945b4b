use sea_orm_migration::prelude::*;

mod m20240101_000001_create_cliente;
mod m20240101_000002_create_pet;
mod m20240101_000003_create_usuario;
mod m20240101_000004_create_agendamento;
mod m20240101_000005_add_cliente_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_cliente::Migration),
            Box::new(m20240101_000002_create_pet::Migration),
            Box::new(m20240101_000003_create_usuario::Migration),
            Box::new(m20240101_000004_create_agendamento::Migration),
            Box::new(m20240101_000005_add_cliente_indexes::Migration),
        ]
    }
}
