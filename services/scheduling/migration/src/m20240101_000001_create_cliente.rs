use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cliente::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cliente::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cliente::Nome).string().null())
                    .col(ColumnDef::new(Cliente::Email).string().null())
                    .col(ColumnDef::new(Cliente::Endereco).string().null())
                    .col(ColumnDef::new(Cliente::Telefone).string().null())
                    .col(ColumnDef::new(Cliente::Cpf).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cliente::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Cliente {
    Table,
    Id,
    Nome,
    Email,
    Endereco,
    Telefone,
    Cpf,
}
