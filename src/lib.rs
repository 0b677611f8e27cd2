pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod tenant;
pub mod validation;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{delete, get},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, store::FilmStore};

#[derive(Clone)]
pub struct AppState {
    pub store: FilmStore,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/films",
            get(routes::list_films)
                .post(routes::create_film)
                .delete(routes::delete_all_films),
        )
        .route("/films/{id}", delete(routes::delete_film))
        .layer(middleware::from_fn(tenant::require_email))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

pub async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,filmlog=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let state = Arc::new(AppState { store: FilmStore::new(db) });

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
