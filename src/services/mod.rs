// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Progress queries are resolved here on top of a user-scoped data source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! Domain service layer
//!
//! Services take their collaborators as trait objects or generics so they can
//! be exercised without HTTP or a real database.

/// Exercise and workout progress queries
pub mod progress;
