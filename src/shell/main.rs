use std::sync::Arc;

use book_reviews::shared::infrastructure::notification_channel::NotificationChannel;
use book_reviews::shared::infrastructure::notification_channel::emailjs::EmailJsChannel;
use book_reviews::shell::config::AppConfig;
use book_reviews::shell::http::router;
use book_reviews::shell::logging;
use book_reviews::shell::state::AppState;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let config = AppConfig::from_env()?;

    let channel = EmailJsChannel::new(config.emailjs.clone());
    if !channel.is_configured() {
        tracing::warn!("EmailJS is not configured, notifications will be refused");
    }
    let channel: Arc<dyn NotificationChannel> = Arc::new(channel);

    // In-memory stores for now
    let state = AppState::in_memory(config.session.clone(), config.capacity, channel);
    let app = router(state);

    tracing::info!(
        addr = %config.addr,
        default_year = config.session.default_year,
        capacity = config.capacity,
        "book reviews listening, GraphQL at /gql"
    );
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
