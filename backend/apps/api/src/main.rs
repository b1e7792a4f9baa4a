//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{AuthConfig, AuthMiddlewareState, PgEmployeeRepository, TokenService};
use axum::{
    Router, http,
    http::{Method, header},
};
use museum::{ImageStore, PgMuseumRepository, exhibits_router, scores_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod seed;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,museum=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup seeding: default accounts and games on an empty database.
    // Errors here should not prevent server startup.
    let employee_repo = PgEmployeeRepository::new(pool.clone());
    if let Err(e) = seed::seed_employees(&employee_repo).await {
        tracing::warn!(error = %e, "Employee seeding failed, continuing anyway");
    }

    let museum_repo = PgMuseumRepository::new(pool.clone());
    if let Err(e) = seed::seed_games(&museum_repo).await {
        tracing::warn!(error = %e, "Game seeding failed, continuing anyway");
    }

    // Token configuration
    let auth_config = Arc::new(if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load the signing key from environment
        let secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set in production");
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "museum-service".to_string());
        let audience = env::var("JWT_AUDIENCE").unwrap_or_else(|_| "museum-clients".to_string());
        let ttl_minutes = env::var("JWT_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);
        AuthConfig::new(secret.into_bytes(), issuer, audience, ttl_minutes)
    });

    let auth_state = AuthMiddlewareState {
        tokens: Arc::new(TokenService::new(&auth_config)),
    };

    // Image storage root
    let image_root = env::var("IMAGE_ROOT").unwrap_or_else(|_| "./data".to_string());
    let image_store = Arc::new(ImageStore::new(image_root));

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest(
            "/api/auth",
            auth::auth_router(employee_repo, auth_config.clone()),
        )
        .nest(
            "/api/exhibits",
            exhibits_router(museum_repo.clone(), image_store, auth_state),
        )
        .nest("/api/scores", scores_router(museum_repo))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5000u16);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
