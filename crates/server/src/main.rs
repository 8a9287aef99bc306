//! Promovote server entry point.

#![allow(clippy::expect_used)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, middleware};
use promovote_api::{middleware::AppState, router as api_router};
use promovote_common::{Config, RetryConfig, TokenService};
use promovote_core::{
    AccountService, CatalogService, CommentService, ModerationService, OriginService, VoteService,
};
use promovote_db::repositories::{
    CommentRepository, ContestItemRepository, OriginRecordRepository, UserRepository,
    VoteRepository,
};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, initiating graceful shutdown...");
        },
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promovote=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting promovote server...");

    let config = Config::load()?;

    let db = promovote_db::init(&config).await?;
    info!("Connected to database");

    info!("Running database migrations...");
    promovote_db::migrate(&db).await?;
    info!("Migrations completed");

    // Repositories
    let db = Arc::new(db);
    let user_repo = UserRepository::new(Arc::clone(&db));
    let vote_repo = VoteRepository::new(Arc::clone(&db));
    let item_repo = ContestItemRepository::new(Arc::clone(&db));
    let comment_repo = CommentRepository::new(Arc::clone(&db));
    let origin_repo = OriginRecordRepository::new(Arc::clone(&db));

    // Services
    let token_service = TokenService::new(&config.auth.jwt_secret, config.auth.token_expiry_days);
    let origin_service = OriginService::new(origin_repo, config.contest.origin_account_limit);
    let account_service = AccountService::new(
        user_repo.clone(),
        origin_service,
        token_service.clone(),
    );
    let vote_service = VoteService::new(
        vote_repo.clone(),
        item_repo.clone(),
        RetryConfig::default(),
    );
    let catalog_service = CatalogService::new(item_repo.clone(), vote_repo);
    let comment_service = CommentService::new(comment_repo.clone(), user_repo.clone(), item_repo);
    let moderation_service = ModerationService::new(user_repo.clone(), comment_repo);

    let state = AppState {
        account_service,
        vote_service,
        catalog_service,
        comment_service,
        moderation_service,
        token_service,
        user_repo,
        admin_key: config.contest.admin_key.clone(),
    };

    let app = Router::new()
        .nest("/api", api_router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            promovote_api::middleware::auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
