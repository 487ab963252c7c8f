//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, worker spawning, and the Axum
//! server lifecycle including graceful shutdown.

use crate::application::click_worker::{ClickWorker, run_click_worker};
use crate::application::services::{AnalyticsService, LinkService};
use crate::config::{CacheBackend, Config};
use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache, RedisCache};
use crate::infrastructure::detection::{WootheeDeviceClassifier, region_classifier};
use crate::infrastructure::persistence::{PgClickRepository, PgLinkRepository};
use crate::routes::{app_router, normalize};
use crate::state::AppState;
use crate::utils::code_generator::CodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::mpsc;

/// Time allowed for queued clicks to be written after the server stops.
const CLICK_DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Cache backend (Redis, in-memory or none)
/// - Region and device classifiers
/// - Background click worker
/// - Axum HTTP server
///
/// On SIGINT/SIGTERM the server stops accepting requests, finishes in-flight
/// ones, drains the click queue and closes the pool.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_database(&config).await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    let cache = build_cache(&config).await;

    let pool_arc = Arc::new(pool.clone());
    let link_repository = Arc::new(PgLinkRepository::new(pool_arc.clone()));
    let click_repository = Arc::new(PgClickRepository::new(pool_arc));

    let link_service = Arc::new(
        LinkService::new(link_repository, cache.clone())
            .with_code_generator(CodeGenerator::new(config.code_length))
            .with_cache_ttl(config.cache_ttl())
            .with_max_code_attempts(config.code_max_attempts),
    );
    let analytics_service = Arc::new(AnalyticsService::new(click_repository));

    let click_worker = Arc::new(ClickWorker::new(
        analytics_service.clone(),
        region_classifier(config.geoip_db_path.as_deref()),
        Arc::new(WootheeDeviceClassifier::new()),
    ));

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    let worker_handle = tokio::spawn(run_click_worker(
        click_rx,
        click_worker,
        config.click_worker_concurrency,
    ));

    let state = AppState::new(link_service, analytics_service, cache, click_tx)
        .with_behind_proxy(config.behind_proxy);

    let app = normalize(app_router(state));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // The router (and every click sender in it) is gone, so the worker sees
    // the channel close once the backlog is consumed.
    tracing::info!("Draining click queue");
    match tokio::time::timeout(CLICK_DRAIN_TIMEOUT, worker_handle).await {
        Ok(Ok(())) => tracing::info!("Click queue drained"),
        Ok(Err(e)) => tracing::error!("Click worker failed: {}", e),
        Err(_) => tracing::warn!(
            "Click queue not drained within {}s, pending clicks are lost",
            CLICK_DRAIN_TIMEOUT.as_secs()
        ),
    }

    pool.close().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn connect_database(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!(
        max_connections = config.db_max_connections,
        "Connected to database"
    );

    Ok(pool)
}

/// Selects the cache backend. An unreachable Redis degrades to the in-memory
/// cache instead of failing startup.
async fn build_cache(config: &Config) -> Arc<dyn CacheService> {
    match (config.cache_backend, config.redis_url.as_deref()) {
        (CacheBackend::Redis, Some(redis_url)) => {
            match RedisCache::connect(redis_url, &config.cache_key_prefix).await {
                Ok(redis) => {
                    tracing::info!("Cache enabled (Redis)");
                    Arc::new(redis)
                }
                Err(e) => {
                    tracing::warn!("Failed to connect to Redis: {}. Using in-memory cache.", e);
                    Arc::new(MemoryCache::new(config.cache_max_capacity))
                }
            }
        }
        (CacheBackend::None, _) => {
            tracing::info!("Cache disabled");
            Arc::new(NullCache::new())
        }
        _ => {
            tracing::info!(
                capacity = config.cache_max_capacity,
                "Cache enabled (in-memory)"
            );
            Arc::new(MemoryCache::new(config.cache_max_capacity))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
