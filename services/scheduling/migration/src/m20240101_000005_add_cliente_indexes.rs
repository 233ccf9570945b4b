use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Pet::Table)
                    .col(Pet::ClienteId)
                    .name("idx_pet_cliente_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Agendamento::Table)
                    .col(Agendamento::ClienteId)
                    .name("idx_agendamento_cliente_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_agendamento_cliente_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_pet_cliente_id").to_owned())
            .await
    }
}

#[derive(Iden)]
enum Pet {
    Table,
    ClienteId,
}

#[derive(Iden)]
enum Agendamento {
    Table,
    ClienteId,
}
