use std::sync::Arc;

use anyhow::{Context, Result};
use person_crud::{
    config::{AppConfig, DatabaseBackend},
    models::Person,
    repository::{PersonRepository, PgPersonRepository},
    service::PersonService,
};
use tracing::{info, warn};

const SAMPLE_PERSONS: [(&str, &str, &str); 4] = [
    ("Alice Johnson", "alice@example.com", "555-0101"),
    ("Bob Smith", "bob@example.com", "555-0102"),
    ("Carol White", "carol@example.com", "555-0103"),
    ("Dave Brown", "dave@example.com", "555-0104"),
];

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = AppConfig::from_env().context("failed to read configuration")?;
    if config.database_backend == DatabaseBackend::InMemory {
        warn!("DATABASE_BACKEND is memory; seeding postgres at DATABASE_URL instead");
    }

    let repo: Arc<dyn PersonRepository> =
        Arc::new(PgPersonRepository::new(config.connect_postgres().await?));
    repo.init().await.context("failed to initialize person schema")?;

    let service = PersonService::new(repo);
    for (name, email, mobile) in SAMPLE_PERSONS {
        let saved = service
            .save_person(Person::new(name, email, mobile))
            .await
            .with_context(|| format!("failed to insert {name}"))?;
        info!(id = ?saved.id, name, "seeded person");
    }

    Ok(())
}
