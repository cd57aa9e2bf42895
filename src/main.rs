//! Server entry point: reads settings, connects to MySQL once, serves the item API.

use items_api::{app, store, AppState, MySqlItemStore, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("items_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let pool = match store::connect(&settings).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, host = %settings.db_host, "database connection failed");
            return Err(e.into());
        }
    };
    tracing::info!(database = %settings.db_name, "database is connected");

    let state = AppState::new(MySqlItemStore::new(pool));
    let listener = TcpListener::bind(settings.listen_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state, settings.body_limit_bytes)).await?;
    Ok(())
}
