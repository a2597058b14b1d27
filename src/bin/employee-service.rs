//! Employee query service binary (JSON)

use anyhow::Context;

use polyglot_services::api::create_employee_router;
use polyglot_services::config::AppConfig;
use polyglot_services::server::{self, ServiceKind};
use polyglot_services::telemetry::init_tracing;

const KIND: ServiceKind = ServiceKind::Employee;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(KIND).context("failed to load configuration")?;

    init_tracing(&config);

    server::serve(KIND, &config, create_employee_router()).await?;

    Ok(())
}
