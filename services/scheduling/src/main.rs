use anyhow::Context as _;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use vetclinic_core::alert::EntityAlert;
use vetclinic_core::tracing::init_tracing;
use vetclinic_scheduling::config::SchedulingConfig;
use vetclinic_scheduling::router::build_router;
use vetclinic_scheduling::state::AppState;
use vetclinic_scheduling_migration::Migrator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = SchedulingConfig::from_env()?;

    let alert = EntityAlert::new(&config.application_name).with_context(|| {
        format!(
            "APPLICATION_NAME {:?} cannot be used in a header name",
            config.application_name
        )
    })?;

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .context("failed to apply migrations")?;
        info!("migrations applied");
    }

    let state = AppState { db, alert };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.scheduling_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("scheduling service listening on {addr}");
    axum::serve(listener, router).await.context("server error")
}
