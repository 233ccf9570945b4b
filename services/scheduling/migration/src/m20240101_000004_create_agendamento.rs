use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Agendamento::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Agendamento::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Agendamento::Data)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Agendamento::ClienteId).big_integer().not_null())
                    // One appointment per pet and per staff member.
                    .col(
                        ColumnDef::new(Agendamento::PetId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Agendamento::UsuarioId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Agendamento::Table, Agendamento::ClienteId)
                            .to(Cliente::Table, Cliente::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Agendamento::Table, Agendamento::PetId)
                            .to(Pet::Table, Pet::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Agendamento::Table, Agendamento::UsuarioId)
                            .to(Usuario::Table, Usuario::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Agendamento::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Agendamento {
    Table,
    Id,
    Data,
    ClienteId,
    PetId,
    UsuarioId,
}

#[derive(Iden)]
enum Cliente {
    Table,
    Id,
}

#[derive(Iden)]
enum Pet {
    Table,
    Id,
}

#[derive(Iden)]
enum Usuario {
    Table,
    Id,
}
