use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    BoxError, Router,
};
use sqlx::postgres::PgPoolOptions;
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::{
    app::{envy::Envy, errors::DefaultApiError},
    transactions::repository::{postgres::PgTransactionsRepository, TransactionsRepository},
};

mod app;
mod transactions;

pub struct AppState {
    pub repository: Arc<dyn TransactionsRepository>,
    pub envy: Arc<Envy>,
}

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(app::controller::get_root))
        // transactions
        .route(
            "/listTransactions",
            get(transactions::controller::get_transactions),
        )
        .route("/statistics", get(transactions::controller::get_statistics))
        .route("/barChart", get(transactions::controller::get_bar_chart))
        .route("/pieChart", get(transactions::controller::get_pie_chart))
        .route(
            "/combinedData",
            get(transactions::controller::get_combined_data),
        )
        .route(
            "/initializeDatabase",
            get(transactions::controller::initialize_database),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3001);
    let allow_origin = match &envy.frontend_url {
        Some(url) => AllowOrigin::exact(
            url.parse::<HeaderValue>()
                .expect("FRONTEND_URL is not a valid origin"),
        ),
        None => AllowOrigin::from(Any),
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::HEAD]);

    let pool = PgPoolOptions::new()
        .max_connections(envy.database_max_connections.unwrap_or(50))
        .idle_timeout(Some(Duration::from_secs(60)))
        .connect(&envy.database_url)
        .await
        .expect("failed to connect to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    tracing::info!("connected to db");

    let state = AppState {
        repository: Arc::new(PgTransactionsRepository::new(pool)),
        envy: Arc::new(envy),
    };

    // app
    let app = routes(Arc::new(state))
        // layers
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::error!(%err);
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(50, Duration::from_secs(1))),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
