//! services/api/src/bin/api.rs

use std::sync::Arc;

use api_lib::{
    adapters::DbAdapter,
    config::Config,
    error::ApiError,
    web::{
        create_page_handler, create_topic_handler, create_user_handler, delete_page_handler,
        delete_topic_handler, delete_user_handler, docs::ApiDoc, get_page_handler,
        get_user_handler, hide_page_handler, hide_topic_handler, list_pages_handler,
        list_topics_handler, list_users_handler, state::AppState, update_page_handler,
        update_topic_handler, update_user_handler,
    },
};
use axum::{
    routing::{get, patch, put},
    Router,
};
use course_cms_core::service::{PageService, TopicService, UserService};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Connect to Database & Run Migrations ---
    info!("Connecting to database...");
    let db_pool = PgPoolOptions::new()
        .max_connections(config.pg_max_connections)
        .connect(&config.database_url)
        .await?;
    let db_adapter = Arc::new(DbAdapter::new(db_pool));
    info!("Running database migrations...");
    db_adapter.run_migrations().await?;
    info!("Database migrations complete.");

    // --- 3. Build the Services & Shared AppState ---
    let app_state = Arc::new(AppState {
        topics: TopicService::new(db_adapter.clone()),
        pages: PageService::new(db_adapter.clone()),
        users: UserService::new(db_adapter),
        config: config.clone(),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // --- 4. Create the Web Router ---
    let api_router = Router::new()
        .route("/topic", get(list_topics_handler).post(create_topic_handler))
        .route(
            "/topic/{topicId}",
            put(update_topic_handler).delete(delete_topic_handler),
        )
        .route("/topic/{topicId}/hide", put(hide_topic_handler))
        .route(
            "/topic/{topicId}/pages",
            get(list_pages_handler).post(create_page_handler),
        )
        .route(
            "/topic/{topicId}/pages/{id}",
            get(get_page_handler)
                .patch(update_page_handler)
                .delete(delete_page_handler),
        )
        .route("/topic/{topicId}/pages/{id}/hide", patch(hide_page_handler))
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .patch(update_user_handler)
                .delete(delete_user_handler),
        )
        .layer(cors)
        .with_state(app_state);

    // Merge the API router with the Swagger UI router for a complete
    // application.
    let app = Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 5. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
