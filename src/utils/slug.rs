// ABOUTME: URL slug generation for workout and exercise names
// ABOUTME: Lowercases, strips punctuation, hyphenates whitespace and collapses repeated hyphens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

/// Build a URL slug from a display name.
///
/// Only `[a-z0-9]`, whitespace and `-` survive; whitespace runs become a
/// single `-`, repeated hyphens collapse and leading/trailing hyphens are
/// trimmed. `"Bench Press (Heavy)!"` becomes `"bench-press-heavy"`.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());

    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if (c.is_whitespace() || c == '-') && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    slug.trim_matches('-').to_owned()
}
