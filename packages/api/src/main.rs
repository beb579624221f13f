use kodeks_api::{app, AppConfig, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let addr = config.addr;
    tracing::info!(
        delimiter = %config.parser.title_delimiter,
        sql_style = %config.parser.sql_style,
        max_upload_bytes = config.max_upload_bytes,
        "configuration loaded"
    );

    let router = app(AppState::new(config));

    tracing::info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to bind on {addr}");
            std::process::exit(1);
        });

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
