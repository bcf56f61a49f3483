mod app_state;
mod error;
mod handlers;
mod models;
mod routes;
mod store;

use std::sync::Arc;

use tracing::Level;

use crate::store::postgres::PgRepo;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let repo = match PgRepo::connect().await {
        Ok(repo) => repo,
        Err(e) => {
            tracing::error!("Error connecting to database: {}", e);
            std::process::exit(1);
        }
    };

    let state = app_state::AppState {
        identity: Arc::new(repo.clone()),
        friends: Arc::new(repo),
    };
    let app = routes::create_routes().with_state(state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();
    tracing::info!("listening on {}", bind_addr);
    axum::serve(listener, app).await.unwrap();
}
