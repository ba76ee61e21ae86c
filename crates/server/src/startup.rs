use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::rate_limit::RateLimiter;
use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

fn load_rate_limit() -> configs::RateLimitConfig {
    let mut cfg = configs::load_default().map(|c| c.rate_limit).unwrap_or_default();
    cfg.normalize_from_env();
    cfg
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    // DB connection; a missing DATABASE_URL is a startup failure
    let db = models::db::connect().await?;
    Migrator::up(&db, None).await?;

    let rate_limit = load_rate_limit();
    let limiter = Arc::new(RateLimiter::new(&rate_limit));

    let state = AppState { db, limiter };
    let cors = build_cors();
    let app: Router = routes::build_router(state, cors);

    // Bind and serve; connect info feeds the per-IP rate limiter
    let addr = load_bind_addr()?;
    info!(%addr, rate_limit_enabled = rate_limit.enabled, "starting api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
