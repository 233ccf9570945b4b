use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuario::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Usuario::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Usuario::DataCadastro)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Usuario::Nome).string().null())
                    .col(ColumnDef::new(Usuario::UsuarioTipo).string_len(32).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usuario::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Usuario {
    Table,
    Id,
    DataCadastro,
    Nome,
    UsuarioTipo,
}
