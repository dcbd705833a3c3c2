use keyword_watch::app::server_router;
use keyword_watch::config::Config;
use keyword_watch::state::{AppState, LazyStore};
use keyword_watch::store::KeywordStore;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("keyword-watch starting");

    let config = Config::from_env()?;
    config.log_startup();

    // Connect once at boot; a failure here aborts startup.
    let store = KeywordStore::connect(&config).await?;

    let public_dir = config.public_dir.clone();
    let addr = format!("{}:{}", config.host, config.port);

    let state = AppState {
        store: LazyStore::preconnected(store),
        config: Arc::new(config),
    };

    let app = server_router(state, Path::new(&public_dir));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Serving on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
