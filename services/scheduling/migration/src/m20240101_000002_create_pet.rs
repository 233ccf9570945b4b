use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pet::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pet::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pet::Nome).string().null())
                    .col(ColumnDef::new(Pet::EspecieAnimal).string().null())
                    .col(ColumnDef::new(Pet::Raca).string().null())
                    .col(ColumnDef::new(Pet::ClienteId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Pet::Table, Pet::ClienteId)
                            .to(Cliente::Table, Cliente::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pet::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Pet {
    Table,
    Id,
    Nome,
    EspecieAnimal,
    Raca,
    ClienteId,
}

#[derive(Iden)]
enum Cliente {
    Table,
    Id,
}
