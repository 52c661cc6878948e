use std::sync::Arc;
use std::time::Duration;

use session_todos::adapters::http::{
    build_router, CookieSigner, SessionCookie, SessionState, TodoHandlers,
};
use session_todos::adapters::{InMemorySessionStore, RedisSessionStore, TitleRules};
use session_todos::config::{AppConfig, ServerConfig, SessionStoreKind};
use session_todos::ports::{SessionStore, TitleValidator};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    let store: Arc<dyn SessionStore> = match config.session.store {
        SessionStoreKind::Memory => {
            info!("session store: memory");
            let store = InMemorySessionStore::new();
            spawn_session_purge(store.clone(), config.session.purge_interval());
            Arc::new(store)
        }
        SessionStoreKind::Redis => {
            info!("session store: redis");
            let store = RedisSessionStore::connect(&config.redis.url)
                .await?
                .with_key_prefix(config.redis.key_prefix.clone());
            Arc::new(store)
        }
    };

    let cookie = SessionCookie {
        name: config.session.cookie_name.clone(),
        max_age: config.session.max_age(),
        secure: config.session.secure_cookie,
    };
    let sessions = SessionState::new(store, CookieSigner::new(config.session.secret()), cookie)
        .with_demo_data(config.session.seed_demo_data);

    let validator: Arc<dyn TitleValidator> = Arc::new(TitleRules::new());
    let app = build_router(
        TodoHandlers::new(validator),
        sessions,
        config.server.request_timeout(),
    );

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, environment = ?config.server.environment, "session todos started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn spawn_session_purge(store: InMemorySessionStore, every: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let purged = store.purge_expired().await;
            if purged > 0 {
                tracing::debug!(purged, "Purged expired sessions");
            }
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "unable to install Ctrl+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

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
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
