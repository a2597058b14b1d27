//! User lookup service binary

use anyhow::Context;

use polyglot_services::api::{create_user_router, AppState};
use polyglot_services::config::AppConfig;
use polyglot_services::server::{self, ServiceKind};
use polyglot_services::telemetry::init_tracing;
use polyglot_services::types::UserDirectory;

const KIND: ServiceKind = ServiceKind::User;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(KIND).context("failed to load configuration")?;

    init_tracing(&config);

    let users = UserDirectory::builtin();
    tracing::info!(users = users.len(), "Loaded user directory");

    let router = create_user_router(AppState::new(users));

    server::serve(KIND, &config, router).await?;

    Ok(())
}
