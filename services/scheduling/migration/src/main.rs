use sea_orm_migration::prelude::*;

use vetclinic_scheduling_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
