//! Atrium Server - Facility Management System
//!
//! A Rust REST API server for facility management.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atrium_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("atrium_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Atrium Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone());

    // Make sure the bootstrap admin account exists
    services
        .users
        .ensure_admin()
        .await
        .expect("Failed to create bootstrap admin account");

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/me", get(api::auth::me))
        // Buildings
        .route("/building", get(api::buildings::list_buildings))
        // Rooms
        .route("/room", get(api::rooms::list_rooms))
        .route("/room", post(api::rooms::create_room))
        .route("/room/free", get(api::rooms::find_free_rooms))
        .route("/room/:id", get(api::rooms::get_room))
        .route("/room/:id", patch(api::rooms::update_room))
        .route("/room/:id", delete(api::rooms::delete_room))
        // Room assets
        .route("/room-assets", get(api::room_assets::list_assets))
        .route("/room-assets", post(api::room_assets::create_asset))
        .route("/room-assets/:id", get(api::room_assets::get_asset))
        .route("/room-assets/:id", patch(api::room_assets::update_asset))
        .route("/room-assets/:id", delete(api::room_assets::delete_asset))
        // Incidents
        .route("/incident", get(api::incidents::list_incidents))
        .route("/incident", post(api::incidents::create_incident))
        .route("/incident/:id", get(api::incidents::get_incident))
        .route("/incident/:id", patch(api::incidents::update_incident))
        .route("/incident/:id", delete(api::incidents::delete_incident))
        // Devices
        .route("/device", get(api::devices::list_devices))
        .route("/device", post(api::devices::create_device))
        .route("/device/:id", get(api::devices::get_device))
        .route("/device/:id", patch(api::devices::update_device))
        // Students
        .route("/student", get(api::students::list_students))
        .route("/student/:id", get(api::students::get_student))
        // Borrow tickets
        .route("/borrow-ticket", get(api::borrow_tickets::list_tickets))
        .route("/borrow-ticket", post(api::borrow_tickets::create_ticket))
        .route("/borrow-ticket/:id", get(api::borrow_tickets::get_ticket))
        .route("/borrow-ticket/:id", patch(api::borrow_tickets::update_ticket))
        // Schedules
        .route("/schedule", get(api::schedules::list_schedules))
        .route("/schedule", post(api::schedules::create_schedule))
        .route("/schedule/week", get(api::schedules::week_grid))
        .route("/schedule/:id", get(api::schedules::get_schedule))
        .route("/schedule/:id", patch(api::schedules::update_schedule_status))
        // Users
        .route("/user", get(api::users::list_users))
        .route("/user", post(api::users::create_user))
        .route("/user/:id", get(api::users::get_user))
        .route("/user/:id", patch(api::users::update_user))
        .route("/user/:id", delete(api::users::delete_user))
        .route("/user/:id/change-password", put(api::users::change_password))
        // Dashboard
        .route("/dashboard", get(api::dashboard::get_dashboard))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
