use clap::Parser;
use hello_world_mcp::config::Config;
use hello_world_mcp::router::create_app_router;
use hello_world_mcp::state::AppState;
use hello_world_mcp::widget::WidgetBundle;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_level.parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Fetch the widget bundle before accepting any request
    let bundle =
        WidgetBundle::load(config.widget_repo_url.as_deref(), config.fetch_timeout()).await;
    info!(source = ?bundle.source, bytes = bundle.script.len(), "widget bundle ready");

    let state = Arc::new(AppState::new(&bundle)?);
    let app = create_app_router(state);

    let addr = config.bind_addr().await?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await.inspect_err(|e| {
        error!("server error: {}", e);
    })?;

    Ok(())
}
