// ABOUTME: Rate limiting middleware for HTTP requests
// ABOUTME: Fixed one-minute windows per peer address, expired windows are swept from the map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! # Rate Limiting Middleware
//!
//! Clients are keyed by the TCP peer address. The first `x-forwarded-for`
//! entry is only used when the server runs behind a trusted proxy, since
//! clients can put anything in that header. Every response carries the
//! standard `X-RateLimit-*` headers; requests over the limit are answered
//! with 429.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use dashmap::DashMap;
use http::{HeaderMap, HeaderValue};
use ironlog_core::errors::AppError;
use tracing::warn;

/// HTTP header names for rate limiting
pub mod headers {
    /// Maximum requests allowed in the current window
    pub const X_RATE_LIMIT_LIMIT: &str = "X-RateLimit-Limit";
    /// Remaining requests in the current window
    pub const X_RATE_LIMIT_REMAINING: &str = "X-RateLimit-Remaining";
    /// Window length in seconds
    pub const X_RATE_LIMIT_WINDOW: &str = "X-RateLimit-Window";
    /// Seconds until the window resets
    pub const RETRY_AFTER: &str = "Retry-After";
}

const WINDOW: Duration = Duration::from_secs(60);
const ANONYMOUS_CLIENT: &str = "anonymous";

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

/// Outcome of a rate limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Whether the request may proceed
    pub allowed: bool,
    /// Configured limit
    pub limit: u32,
    /// Requests left in the window
    pub remaining: u32,
    /// Seconds until the window resets
    pub reset_after_secs: u64,
}

/// In-memory fixed-window rate limiter
#[derive(Debug)]
pub struct RateLimiter {
    requests_per_minute: u32,
    trust_forwarded_for: bool,
    windows: DashMap<String, Window>,
    last_sweep: Mutex<Instant>,
}

impl RateLimiter {
    /// Create a limiter; a limit of zero disables limiting
    #[must_use]
    pub fn new(requests_per_minute: u32) -> Self {
        Self {
            requests_per_minute,
            trust_forwarded_for: false,
            windows: DashMap::new(),
            last_sweep: Mutex::new(Instant::now()),
        }
    }

    /// Key clients on `x-forwarded-for` instead of the peer address
    #[must_use]
    pub fn trusting_forwarded_for(mut self, trust: bool) -> Self {
        self.trust_forwarded_for = trust;
        self
    }

    /// Number of clients with a tracked window
    #[must_use]
    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }

    /// Drop windows that ended before `now`
    pub fn evict_expired(&self, now: Instant) {
        self.windows
            .retain(|_, window| now.duration_since(window.started) < WINDOW);
    }

    // At most one sweep per window length; concurrent callers skip it
    fn maybe_sweep(&self, now: Instant) {
        let Ok(mut last) = self.last_sweep.try_lock() else {
            return;
        };
        if now.duration_since(*last) >= WINDOW {
            self.evict_expired(now);
            *last = now;
        }
    }

    /// Whether limiting is active
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.requests_per_minute > 0
    }

    /// Count one request for `client` at `now`
    pub fn check_at(&self, client: &str, now: Instant) -> RateLimitDecision {
        let limit = self.requests_per_minute;
        self.maybe_sweep(now);

        let mut entry = self.windows.entry(client.to_owned()).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(entry.started) >= WINDOW {
            *entry = Window {
                started: now,
                count: 0,
            };
        }

        let allowed = entry.count < limit;
        if allowed {
            entry.count += 1;
        }

        let reset_after_secs = WINDOW
            .saturating_sub(now.duration_since(entry.started))
            .as_secs();

        RateLimitDecision {
            allowed,
            limit,
            remaining: limit.saturating_sub(entry.count),
            reset_after_secs,
        }
    }

    /// Count one request for `client` now
    pub fn check(&self, client: &str) -> RateLimitDecision {
        self.check_at(client, Instant::now())
    }
}

fn forwarded_for(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn client_key(request: &Request, trust_forwarded_for: bool) -> String {
    if trust_forwarded_for {
        if let Some(forwarded) = forwarded_for(request.headers()) {
            return forwarded.to_owned();
        }
    }
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| ANONYMOUS_CLIENT.to_owned(), |info| info.0.ip().to_string())
}

fn apply_headers(headers: &mut HeaderMap, decision: &RateLimitDecision) {
    headers.insert(headers::X_RATE_LIMIT_LIMIT, HeaderValue::from(decision.limit));
    headers.insert(
        headers::X_RATE_LIMIT_REMAINING,
        HeaderValue::from(decision.remaining),
    );
    headers.insert(
        headers::X_RATE_LIMIT_WINDOW,
        HeaderValue::from(WINDOW.as_secs()),
    );
    if !decision.allowed {
        headers.insert(
            headers::RETRY_AFTER,
            HeaderValue::from(decision.reset_after_secs),
        );
    }
}

/// axum middleware enforcing the limiter in state
pub async fn rate_limit_middleware(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    if !limiter.is_enabled() {
        return next.run(request).await;
    }

    let client = client_key(&request, limiter.trust_forwarded_for);
    let decision = limiter.check(&client);

    let mut response = if decision.allowed {
        next.run(request).await
    } else {
        warn!(client = %client, limit = decision.limit, "Rate limit exceeded");
        AppError::rate_limit_exceeded(decision.limit).into_response()
    };

    apply_headers(response.headers_mut(), &decision);
    response
}
