// ABOUTME: Security response headers applied to every API response
// ABOUTME: Production adds HSTS; all environments get nosniff, frame denial and a strict CSP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use http::header::{
    CONTENT_SECURITY_POLICY, REFERRER_POLICY, STRICT_TRANSPORT_SECURITY, X_CONTENT_TYPE_OPTIONS,
    X_FRAME_OPTIONS, X_XSS_PROTECTION,
};
use http::{HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::Environment;

/// JSON-only API, so nothing may be loaded or framed
const API_CSP: &str = "default-src 'none'; frame-ancestors 'none'";
const HSTS_PRODUCTION: &str = "max-age=31536000; includeSubDomains";

/// Header name and value pairs for `environment`
#[must_use]
pub fn security_headers(environment: Environment) -> Vec<(HeaderName, HeaderValue)> {
    let mut headers = vec![
        (X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        (X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
        (X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block")),
        (
            REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ),
        (CONTENT_SECURITY_POLICY, HeaderValue::from_static(API_CSP)),
    ];

    if environment.is_production() {
        headers.push((
            STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static(HSTS_PRODUCTION),
        ));
    }

    headers
}

/// One `SetResponseHeaderLayer` per header, keeping handler-set values
#[must_use]
pub fn security_header_layers(environment: Environment) -> Vec<SetResponseHeaderLayer<HeaderValue>> {
    security_headers(environment)
        .into_iter()
        .map(|(name, value)| SetResponseHeaderLayer::if_not_present(name, value))
        .collect()
}
