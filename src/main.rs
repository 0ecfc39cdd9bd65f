use std::{env, net::SocketAddr, sync::Arc, time::Duration};

#[macro_use]
extern crate lazy_static;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::header::CONTENT_TYPE,
    http::Method,
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};

use crate::app::{env::Envy, errors::DefaultApiError};

mod app;
mod comments;
mod publications;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port();
    let rate_limit = envy.rate_limit_per_second();
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    let state_env = envy.app_env.to_string();
    let state = AppState {
        envy: Arc::new(envy),
    };

    // app
    let app = routes(state)
        // layers
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::warn!(error = %err, "request rejected by middleware");
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(rate_limit, Duration::from_secs(1))),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(app_env = %state_env, "listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

pub fn routes(state: AppState) -> Router {
    let body_limit = state.envy.body_limit_bytes();

    Router::new()
        .route("/", get(app::controller::get_root))
        // comments
        .route("/comments", post(comments::controller::create_comment))
        // publications
        .route(
            "/publications",
            post(publications::controller::create_publication),
        )
        .route(
            "/publications/:publication_type",
            post(publications::controller::create_publication_by_type),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
