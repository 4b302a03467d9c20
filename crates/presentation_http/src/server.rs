//! Server lifecycle
//!
//! Serves the router until a shutdown signal arrives, then gives in-flight
//! requests a bounded time to finish.

use std::{
    future::{Future, IntoFuture},
    time::Duration,
};

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{info, warn};

/// How the server stopped after the shutdown signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every open connection finished within the drain timeout
    Drained,
    /// Connections were still open when the drain timeout expired
    TimedOut,
}

/// Serve `app` until `signal` resolves, then drain for at most `drain_timeout`
pub async fn serve(
    listener: TcpListener,
    app: Router,
    signal: impl Future<Output = ()> + Send + 'static,
    drain_timeout: Duration,
) -> std::io::Result<ShutdownOutcome> {
    let (signalled_tx, signalled_rx) = oneshot::channel();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.await;
            let _ = signalled_tx.send(());
        })
        .into_future();
    let mut server = std::pin::pin!(server);

    tokio::select! {
        result = &mut server => {
            result?;
            return Ok(ShutdownOutcome::Drained);
        }
        Ok(()) = signalled_rx => {}
    }

    info!("⏳ Waiting up to {:?} for connections to close...", drain_timeout);

    match tokio::time::timeout(drain_timeout, server).await {
        Ok(result) => {
            result?;
            Ok(ShutdownOutcome::Drained)
        },
        Err(_) => {
            warn!(
                "Connections still open after {:?}; shutting down anyway",
                drain_timeout
            );
            Ok(ShutdownOutcome::TimedOut)
        },
    }
}
