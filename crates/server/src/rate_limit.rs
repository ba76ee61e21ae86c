use std::net::{IpAddr, SocketAddr};
use std::time::Instant;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dashmap::DashMap;
use tracing::{debug, warn};

use configs::RateLimitConfig;

use crate::routes::AppState;

#[derive(Debug)]
struct TokenBucket {
    capacity: u64,
    tokens: u64,
    refill_rate: u64, // tokens per second
    last_refill: Instant,
}

impl TokenBucket {
    fn new(capacity: u64, refill_rate: u64) -> Self {
        Self {
            capacity,
            tokens: capacity,
            refill_rate,
            last_refill: Instant::now(),
        }
    }

    fn try_acquire(&mut self, tokens: u64) -> bool {
        self.refill();

        if self.tokens >= tokens {
            self.tokens -= tokens;
            debug!("token acquired, remaining: {}", self.tokens);
            true
        } else {
            false
        }
    }

    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill);
        let tokens_to_add = (elapsed.as_secs_f64() * self.refill_rate as f64) as u64;

        if tokens_to_add > 0 {
            self.tokens = (self.tokens + tokens_to_add).min(self.capacity);
            self.last_refill = now;
        }
    }
}

/// Per-caller token buckets keyed by remote IP. Lives in the app state and is
/// handed to the middleware explicitly, not kept in a module-level singleton.
pub struct RateLimiter {
    buckets: DashMap<IpAddr, TokenBucket>,
    requests_per_second: u64,
    burst: u64,
    enabled: bool,
}

impl RateLimiter {
    pub fn new(cfg: &RateLimitConfig) -> Self {
        Self {
            buckets: DashMap::new(),
            requests_per_second: cfg.requests_per_second,
            burst: cfg.burst,
            enabled: cfg.enabled,
        }
    }

    pub fn check(&self, ip: IpAddr) -> bool {
        if !self.enabled {
            return true;
        }
        let mut bucket = self
            .buckets
            .entry(ip)
            .or_insert_with(|| TokenBucket::new(self.burst, self.requests_per_second));
        bucket.try_acquire(1)
    }
}

/// Middleware: answer 429 once the caller's bucket runs dry.
pub async fn limit_by_addr(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Response {
    if state.limiter.check(addr.ip()) {
        next.run(req).await
    } else {
        warn!(ip = %addr.ip(), "rate limit exceeded");
        let body = serde_json::json!({"code": 429, "message": "Too Many Requests"});
        (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn cfg(enabled: bool, rps: u64, burst: u64) -> RateLimitConfig {
        RateLimitConfig { enabled, requests_per_second: rps, burst }
    }

    #[test]
    fn token_bucket_drains() {
        let mut bucket = TokenBucket::new(10, 5);

        assert!(bucket.try_acquire(5));
        assert!(bucket.try_acquire(5));
        assert!(!bucket.try_acquire(1));
    }

    #[test]
    fn token_bucket_refills_over_time() {
        let mut bucket = TokenBucket::new(10, 10); // 10 tokens per second

        assert!(bucket.try_acquire(10));
        assert!(!bucket.try_acquire(1));

        std::thread::sleep(Duration::from_millis(1100));
        assert!(bucket.try_acquire(10));
    }

    #[test]
    fn limiter_is_keyed_per_ip() {
        let limiter = RateLimiter::new(&cfg(true, 1, 1));
        let a: IpAddr = "10.0.0.1".parse().unwrap();
        let b: IpAddr = "10.0.0.2".parse().unwrap();

        assert!(limiter.check(a));
        assert!(!limiter.check(a));
        // a drained bucket for one caller does not affect another
        assert!(limiter.check(b));
    }

    #[test]
    fn disabled_limiter_always_allows() {
        let limiter = RateLimiter::new(&cfg(false, 1, 1));
        let ip: IpAddr = "10.0.0.1".parse().unwrap();
        for _ in 0..100 {
            assert!(limiter.check(ip));
        }
    }
}
