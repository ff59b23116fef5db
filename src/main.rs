use dotenvy::dotenv;
use product_api::{
    config::{self, database},
    core::ProductStore,
    errors::Result,
    server,
};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars may also be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()?;

    // 4. Connect to the record store and ensure the schema exists
    let db = database::create_connection(&app_config.database.url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|()| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;
    let store = ProductStore::new(db);

    // 5. Serve until Ctrl+C
    let listener = TcpListener::bind(&app_config.server.bind_address)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {}", app_config.server.bind_address, e))?;
    server::run(listener, store.clone(), server::shutdown_signal()).await?;

    // 6. Release the connection pool
    store.close().await?;
    info!("Database connection closed.");

    Ok(())
}
