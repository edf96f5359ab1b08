use anyhow::{Context, Result};
use person_crud::config::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = AppConfig::from_env().context("failed to read configuration")?;
    let pool = config.connect_postgres().await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    info!("migrations applied successfully");
    Ok(())
}
