// ABOUTME: HTTP server assembly: routes, middleware stack and the serve loop
// ABOUTME: API routes live under the configured prefix; health probes stay at the root
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::{
    rate_limit_middleware, request_id_middleware, security_header_layers, setup_cors, RateLimiter,
};
use crate::resources::ServerResources;
use crate::routes::{
    AuthRoutes, ExerciseLogRoutes, ExerciseRoutes, HealthRoutes, ProgressRoutes, UserRoutes,
    WorkoutRoutes,
};

/// Largest accepted request body
const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

/// Build the complete application router
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let config = Arc::clone(&resources.config);

    let api = Router::new()
        .merge(AuthRoutes::routes(Arc::clone(&resources)))
        .merge(UserRoutes::routes(Arc::clone(&resources)))
        .merge(WorkoutRoutes::routes(Arc::clone(&resources)))
        .merge(ExerciseRoutes::routes(Arc::clone(&resources)))
        .merge(ExerciseLogRoutes::routes(Arc::clone(&resources)))
        .merge(ProgressRoutes::routes(Arc::clone(&resources)));

    let limiter = Arc::new(
        RateLimiter::new(config.rate_limit.requests_per_minute)
            .trusting_forwarded_for(config.rate_limit.trust_forwarded_for),
    );

    let mut router = Router::new()
        .nest(&config.api_prefix, api)
        .merge(HealthRoutes::routes(resources))
        .layer(middleware::from_fn_with_state(limiter, rate_limit_middleware));

    for layer in security_header_layers(config.environment) {
        router = router.layer(layer);
    }

    router
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES))
        .layer(setup_cors(&config))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

/// IronLog HTTP server
pub struct IronLogServer {
    resources: Arc<ServerResources>,
}

impl IronLogServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Bind `port` on all interfaces and serve until Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns an error if the port cannot be bound or the server fails
    pub async fn run(self, port: u16) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!(
            address = %addr,
            api_prefix = %self.resources.config.api_prefix,
            "HTTP server listening"
        );

        // Peer addresses key the rate limiter
        let app =
            build_router(self.resources).into_make_service_with_connect_info::<SocketAddr>();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
