use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use relbooks::{config, demo};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relbooks=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    let config = config::Config::from_env();
    let database_url = config.database.connection_url();

    let mut stdout = std::io::stdout();
    if let Err(e) = demo::run(&database_url, &mut stdout).await {
        tracing::error!("demo aborted: {}", e);
    }
}
