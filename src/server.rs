//! Service identities and the shared serve loop

use std::fmt;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

/// The three standalone services shipped by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    User,
    Employee,
    Payroll,
}

impl ServiceKind {
    pub fn default_port(self) -> u16 {
        match self {
            ServiceKind::User => 5000,
            ServiceKind::Employee => 8001,
            ServiceKind::Payroll => 8002,
        }
    }

    /// Prefix for environment overrides, e.g. `USER_SERVICE_SERVER_PORT`
    pub fn env_prefix(self) -> &'static str {
        match self {
            ServiceKind::User => "USER_SERVICE",
            ServiceKind::Employee => "EMPLOYEE_SERVICE",
            ServiceKind::Payroll => "PAYROLL_SERVICE",
        }
    }

    pub fn binary_name(self) -> &'static str {
        match self {
            ServiceKind::User => "user-service",
            ServiceKind::Employee => "employee-service",
            ServiceKind::Payroll => "payroll-service",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ServiceKind::User => "User Lookup Service",
            ServiceKind::Employee => "Service A: REST API with JSON",
            ServiceKind::Payroll => "Service B: API with XML",
        }
    }

    pub fn protocol(self) -> &'static str {
        match self {
            ServiceKind::User | ServiceKind::Employee => "HTTP + JSON",
            ServiceKind::Payroll => "HTTP + XML",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary_name())
    }
}

/// Bind the configured address and serve `router` until Ctrl+C or SIGTERM.
pub async fn serve(kind: ServiceKind, config: &AppConfig, router: Router) -> Result<()> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    let url = format!("http://{}", listener.local_addr()?);

    tracing::info!(service = %kind, "{}", kind.title());
    tracing::info!(
        service = %kind,
        %url,
        protocol = kind.protocol(),
        "Listening for HTTP traffic"
    );

    let router = router.layer(TraceLayer::new_for_http());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!(service = %kind, "Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
