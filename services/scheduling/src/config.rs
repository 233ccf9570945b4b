use anyhow::Context as _;

/// Scheduling service configuration loaded from environment variables.
#[derive(Debug)]
pub struct SchedulingConfig {
    /// Database connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8080). Env var: `SCHEDULING_PORT`.
    pub scheduling_port: u16,
    /// Prefix of the `x-{app}-alert` / `x-{app}-params` response headers
    /// (default "vetclinicApp"). Env var: `APPLICATION_NAME`.
    pub application_name: String,
    /// Apply pending migrations before serving (default false). Env var: `RUN_MIGRATIONS`.
    pub run_migrations: bool,
}

impl SchedulingConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            database_url: var("DATABASE_URL").context("DATABASE_URL is not set")?,
            scheduling_port: match var("SCHEDULING_PORT") {
                Some(v) => v
                    .parse()
                    .with_context(|| format!("invalid SCHEDULING_PORT: {v}"))?,
                None => 8080,
            },
            application_name: var("APPLICATION_NAME").unwrap_or_else(|| "vetclinicApp".to_owned()),
            run_migrations: var("RUN_MIGRATIONS")
                .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "yes"))
                .unwrap_or(false),
        })
    }
}
