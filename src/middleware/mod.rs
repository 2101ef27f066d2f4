// ABOUTME: HTTP middleware for authentication, CORS, rate limiting and response headers
// ABOUTME: Re-exports the layers and helpers the router assembles in server.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

/// Bearer token authentication for route handlers
pub mod auth;
/// Cross-origin resource sharing configuration
pub mod cors;
/// Fixed-window per-client rate limiting
pub mod rate_limiting;
/// Request id propagation
pub mod request_id;
/// Security response headers
pub mod security_headers;

pub use auth::{authenticate_request, AuthenticatedUser};
pub use cors::setup_cors;
pub use rate_limiting::{rate_limit_middleware, RateLimiter};
pub use request_id::{request_id_middleware, RequestId};
pub use security_headers::security_header_layers;
