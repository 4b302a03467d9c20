//! docintake HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{
    HealthService, Logger, MessageProcessorPort, ServiceProbePort, WebhookIngestionService,
};
use infrastructure::{
    AcknowledgingProcessor, AppConfig, CapabilityProbe, DatabaseProbe, HttpLogSink,
    HttpMessageProcessor, SqlxDatabaseHealth, init_tracing,
};
use presentation_http::{AppState, ShutdownOutcome, create_app, serve};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before tracing so the log format can follow it
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(&config.server.log_filter, config.server.json_logs())?;

    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    info!(
        "📄 docintake v{} starting ({})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    // Structured logger, with the external sink outside development
    let mut logger = Logger::tracing(config.is_development());
    if let Some(sink) = HttpLogSink::from_config(&config.log_sink)? {
        info!("Error entries will be forwarded to the log sink");
        logger = logger.with_sink(Arc::new(sink));
    }

    // Processing collaborator
    let processor: Arc<dyn MessageProcessorPort> =
        match HttpMessageProcessor::from_config(&config.processing)? {
            Some(processor) => {
                info!(endpoint = %processor.endpoint(), "Processing endpoint configured");
                Arc::new(processor)
            },
            None => {
                warn!("No processing endpoint configured; messages will only be acknowledged");
                Arc::new(AcknowledgingProcessor)
            },
        };

    // Health probes
    let database: Arc<dyn ServiceProbePort> = if config.database.demo_mode {
        info!("Database demo mode enabled; database probe disabled");
        Arc::new(DatabaseProbe::demo())
    } else {
        let health = SqlxDatabaseHealth::connect_lazy(&config.database)?;
        Arc::new(DatabaseProbe::live(Arc::new(health)))
    };
    let health_service = HealthService::new(
        database,
        Arc::new(CapabilityProbe::ai(&config.ai)),
        Arc::new(CapabilityProbe::sms(&config.sms)),
        logger.clone(),
    );

    let webhook_service = WebhookIngestionService::new(processor, logger);

    let addr = config.server.bind_addr();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    let app = create_app(AppState::new(webhook_service, health_service, config));

    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);
    info!("📨 SMS webhook: POST http://{}/api/webhooks/sms", addr);

    match serve(listener, app, shutdown_signal(), shutdown_timeout).await? {
        ShutdownOutcome::Drained => info!("👋 Server shutdown complete"),
        ShutdownOutcome::TimedOut => warn!("👋 Server shut down with requests still in flight"),
    }

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
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
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
