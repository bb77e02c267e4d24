//! Static route enumeration.
//!
//! Derives the list of routes to statically render from markdown files on
//! disk. Each `[generate.routes]` descriptor maps a URL prefix to a glob
//! pattern; a matched file contributes one route:
//!
//! ```text
//! { prefix = "/posts", pattern = "posts/*.md" }
//!     content/posts/hello.md  →  /posts/hello
//!     content/posts/ftp.md    →  /posts/ftp
//! ```
//!
//! Matches are sorted per descriptor so repeated scans of an unchanged tree
//! produce identical output; descriptors keep their declaration order.

use crate::config::{RouteRule, SiteConfig};
use chrono::{DateTime, Utc};
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::SystemTime,
};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while scanning the content tree.
///
/// All of these abort generation; routes cannot be derived without a
/// readable content root.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("content root `{0}` is missing or not a directory")]
    ContentRoot(PathBuf, #[source] io::Error),

    #[error("invalid glob pattern `{0}`")]
    Pattern(String, #[source] glob::PatternError),

    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] io::Error),
}

// ============================================================================
// Route Entries
// ============================================================================

/// One generated route together with its source timestamp.
///
/// The route string is what the framework renders; the timestamp feeds the
/// sitemap.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// Route path (e.g. "/posts/hello").
    pub route: String,
    /// Source modification date, YYYY-MM-DD.
    pub lastmod: Option<String>,
}

impl RouteEntry {
    fn new(prefix: &str, source: &Path) -> Self {
        let stem = source
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let route = join_route(prefix, &stem);
        let lastmod = fs::metadata(source)
            .and_then(|meta| meta.modified())
            .ok()
            .map(format_ymd);

        Self { route, lastmod }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Scan the content root and derive one entry per matched file.
///
/// Fails before evaluating any pattern when the content root is missing or
/// not a directory. An empty match set for a descriptor is not an error.
pub fn scan(config: &SiteConfig) -> Result<Vec<RouteEntry>, RouteError> {
    let content = &config.build.content;
    ensure_content_root(content)?;

    let mut entries = Vec::new();
    for rule in &config.generate.routes {
        entries.extend(scan_rule(content, rule)?);
    }
    Ok(entries)
}

/// Derive the flat route list (the `route` projection of [`scan`]).
pub fn enumerate_routes(config: &SiteConfig) -> Result<Vec<String>, RouteError> {
    Ok(scan(config)?.into_iter().map(|entry| entry.route).collect())
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Verify the content root exists and is a directory.
fn ensure_content_root(content: &Path) -> Result<(), RouteError> {
    let meta = fs::metadata(content)
        .map_err(|err| RouteError::ContentRoot(content.to_path_buf(), err))?;

    if !meta.is_dir() {
        return Err(RouteError::ContentRoot(
            content.to_path_buf(),
            io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }
    Ok(())
}

/// Resolve one descriptor's pattern and map its matches to entries.
fn scan_rule(content: &Path, rule: &RouteRule) -> Result<Vec<RouteEntry>, RouteError> {
    let pattern = content.join(&rule.pattern);
    let paths = glob::glob(&pattern.to_string_lossy())
        .map_err(|err| RouteError::Pattern(rule.pattern.clone(), err))?;

    let mut matched = Vec::new();
    for path in paths {
        let path = path.map_err(|err| {
            let path = err.path().to_path_buf();
            RouteError::Read(path, err.into())
        })?;
        if path.is_file() {
            matched.push(path);
        }
    }
    matched.sort();

    Ok(matched
        .iter()
        .map(|source| RouteEntry::new(&rule.prefix, source))
        .collect())
}

/// Join a URL prefix and a file stem without doubling slashes.
fn join_route(prefix: &str, stem: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), stem)
}

/// Format a timestamp as YYYY-MM-DD (UTC).
fn format_ymd(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).format("%Y-%m-%d").to_string()
}

// ============================================================================
// Tests
// ============================================================================
