//! MoodScape HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use application::{
    MoodService, NotificationService, SupportChatService,
    ports::{AlertMailerPort, ClassifierPort, GenerativePort},
};
use infrastructure::{AlertMailerAdapter, AppConfig, ClassifierAdapter, GenerativeAdapter};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodscape_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("MoodScape v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        classifier = ?config.classifier.backend,
        "Configuration loaded"
    );

    // Classifier backend
    let classifier: Arc<dyn ClassifierPort> = Arc::new(
        ClassifierAdapter::from_config(&config.classifier)
            .map_err(|e| anyhow::anyhow!("Failed to initialize classifier: {e}"))?,
    );

    // Generative engine; absent key means degraded chat, not startup failure
    let generative: Option<Arc<dyn GenerativePort>> =
        match GenerativeAdapter::from_config(&config.generative) {
            Ok(Some(adapter)) => Some(Arc::new(adapter)),
            Ok(None) => {
                warn!("No generative API key configured, chat runs degraded");
                None
            },
            Err(e) => {
                warn!(error = %e, "Generative engine unavailable, chat runs degraded");
                None
            },
        };

    // Alert mailer
    let mailer: Arc<dyn AlertMailerPort> = Arc::new(AlertMailerAdapter::new(config.mail.clone()));

    // Services
    let mood_service = MoodService::new(classifier);
    let notification_service = Arc::new(NotificationService::new(mailer));
    let chat_service = SupportChatService::new(generative, notification_service);

    let state = AppState {
        mood_service: Arc::new(mood_service),
        chat_service: Arc::new(chat_service),
    };

    // Build router
    let mut app = routes::create_router(state).layer(TraceLayer::new_for_http());

    if config.server.cors_enabled {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
