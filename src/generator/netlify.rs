//! Netlify deployment artifacts.
//!
//! Writes the `_redirects` and `_headers` files Netlify picks up from the
//! publish directory. Redirect paths are emitted byte-for-byte as
//! configured; the header file carries the standard security block for
//! every path when header merging is on.
//!
//! # File Formats
//!
//! ```text
//! # _redirects
//! /old-path/ /new-path/ 301
//!
//! # _headers
//! /*
//!   Referrer-Policy: origin
//!   X-Content-Type-Options: nosniff
//! ```

use crate::{
    config::{RedirectRule, SiteConfig},
    log,
};
use anyhow::{Context, Result};
use std::fs;

// ============================================================================
// Constants
// ============================================================================

/// Security headers merged into `_headers` under `/*`.
const SECURITY_HEADERS: [&str; 4] = [
    "Referrer-Policy: origin",
    "X-Content-Type-Options: nosniff",
    "X-Frame-Options: DENY",
    "X-XSS-Protection: 1; mode=block",
];

// ============================================================================
// Public API
// ============================================================================

/// Write the Netlify artifacts into the output directory.
///
/// `_redirects` is only written when redirect rules exist, `_headers` only
/// when security header merging is enabled; with neither, this is a no-op.
pub fn build_netlify(config: &SiteConfig) -> Result<()> {
    if !config.netlify.redirects.is_empty() {
        write_redirects(config)?;
    }
    if config.netlify.merge_security_headers {
        write_headers(config)?;
    }
    Ok(())
}

// ============================================================================
// File Writers
// ============================================================================

fn write_redirects(config: &SiteConfig) -> Result<()> {
    let path = config.build.output.join("_redirects");
    let content = redirects_content(&config.netlify.redirects);

    fs::write(&path, content)
        .with_context(|| format!("Failed to write redirects to {}", path.display()))?;

    log!("netlify"; "_redirects ({} rules)", config.netlify.redirects.len());
    Ok(())
}

fn write_headers(config: &SiteConfig) -> Result<()> {
    let path = config.build.output.join("_headers");

    fs::write(&path, headers_content())
        .with_context(|| format!("Failed to write headers to {}", path.display()))?;

    log!("netlify"; "_headers");
    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

/// One `from to status` line per rule, paths untouched.
fn redirects_content(rules: &[RedirectRule]) -> String {
    let mut content = String::new();
    for rule in rules {
        content.push_str(&format!("{} {} {}\n", rule.from, rule.to, rule.status));
    }
    content
}

fn headers_content() -> String {
    let mut content = String::from("/*\n");
    for header in SECURITY_HEADERS {
        content.push_str("  ");
        content.push_str(header);
        content.push('\n');
    }
    content
}

// ============================================================================
// Tests
// ============================================================================
