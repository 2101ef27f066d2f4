// ABOUTME: Utility modules shared by the HTTP handlers
// ABOUTME: Slug generation, path id parsing and request field validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

/// URL slug generation
pub mod slug;
/// UUID parsing for path parameters
pub mod uuid;
/// Request field validation
pub mod validation;
