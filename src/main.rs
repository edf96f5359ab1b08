use std::sync::Arc;

use anyhow::{Context, Result};
use person_crud::{
    build_router,
    config::{AppConfig, DatabaseBackend},
    repository::{InMemoryPersonRepository, PersonRepository, PgPersonRepository},
    service::PersonService,
    state::AppState,
    views::Views,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env().context("failed to load application configuration")?;

    let repository: Arc<dyn PersonRepository> = match config.database_backend {
        DatabaseBackend::Postgres => {
            info!("database backend: postgres");
            let pool = config.connect_postgres().await?;
            Arc::new(PgPersonRepository::new(pool))
        }
        DatabaseBackend::InMemory => {
            info!("database backend: in-memory");
            Arc::new(InMemoryPersonRepository::new())
        }
    };

    if config.auto_migrate {
        repository
            .init()
            .await
            .context("failed to initialize person schema")?;
    }

    let views = Views::new(config.template_cache, &config.template_dir)
        .with_context(|| format!("failed to load templates (cache: {})", config.template_cache))?;

    let app = build_router(AppState::new(PersonService::new(repository), views));

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(address = %addr, "person crud server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("person_crud=debug,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "unable to install Ctrl+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "unable to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
