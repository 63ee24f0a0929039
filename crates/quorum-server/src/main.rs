use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use quorum_api::{AppState, AppStateInner};
use quorum_db::{Database, migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quorum=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let db_path = std::env::var("QUORUM_DB_PATH").unwrap_or_else(|_| "questions.db".into());
    let host = std::env::var("QUORUM_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("QUORUM_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;
    let bootstrap = std::env::var("QUORUM_BOOTSTRAP_SCHEMA")
        .map(|v| matches!(v.as_str(), "1" | "true"))
        .unwrap_or(false);

    // Init database
    let db = Database::open(&PathBuf::from(&db_path))?;
    if bootstrap {
        db.with_conn(migrations::run)?;
    }

    let state: AppState = Arc::new(AppStateInner { db });

    let app = quorum_api::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Quorum server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
