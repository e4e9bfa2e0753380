//! Profile Dispatch server
//!
//! Loads configuration, wires the adapters into the application handlers
//! and serves the profile routes over HTTP.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use profile_dispatch::adapters::http::{app_router, ProfileHandlers};
use profile_dispatch::adapters::{
    InMemoryProfileRepository, InMemoryProfileTypeRegistry, JsonFormPresenter,
    PgProfileRepository,
};
use profile_dispatch::application::{
    AddProfileHandler, DeleteProfileHandler, EditProfileHandler, ProfileDispatchResolver,
};
use profile_dispatch::config::AppConfig;
use profile_dispatch::ports::{FormPresenter, ProfileRepository, ProfileTypeReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let profile_types = config.profile_types()?;
    tracing::info!(
        environment = ?config.server.environment,
        profile_types = profile_types.len(),
        "Starting profile dispatch"
    );

    let repository: Arc<dyn ProfileRepository> = match &config.database {
        Some(database) => {
            let pool = database.connect().await?;
            if database.run_migrations {
                sqlx::migrate!("./migrations").run(&pool).await?;
                tracing::info!("Database migrations applied");
            }
            Arc::new(PgProfileRepository::new(pool))
        }
        None => {
            tracing::warn!("No database configured, profiles are kept in memory");
            Arc::new(InMemoryProfileRepository::new())
        }
    };
    let registry: Arc<dyn ProfileTypeReader> =
        Arc::new(InMemoryProfileTypeRegistry::new(profile_types));
    let presenter: Arc<dyn FormPresenter> = Arc::new(JsonFormPresenter::new());

    let handlers = ProfileHandlers::new(
        Arc::new(ProfileDispatchResolver::new(
            repository.clone(),
            presenter.clone(),
        )),
        Arc::new(AddProfileHandler::new(presenter.clone())),
        Arc::new(EditProfileHandler::new(
            repository.clone(),
            presenter.clone(),
        )),
        Arc::new(DeleteProfileHandler::new(repository, presenter)),
        registry,
    );
    let app = app_router(handlers, config.server.request_timeout());

    let addr = config.server.socket_addr().await?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Profile dispatch shutting down");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, initiating graceful shutdown"),
        _ = terminate => tracing::info!("Received terminate signal, initiating graceful shutdown"),
    }
}
