//! `[generate]` section configuration.
//!
//! Route descriptors for static export: each entry maps a public URL prefix
//! to a glob pattern resolved against the content root.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// `[generate]` section in site.toml - static route generation.
///
/// # Example
/// ```toml
/// [generate]
/// routes = [
///     { prefix = "/posts", pattern = "posts/*.md" },
///     { prefix = "/notes", pattern = "notes/**/*.md" },
/// ]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    /// Route descriptors, evaluated in declaration order.
    #[serde(default = "defaults::generate::routes")]
    #[educe(Default = defaults::generate::routes())]
    pub routes: Vec<RouteRule>,
}

/// A single route descriptor: URL prefix plus source glob pattern.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RouteRule {
    /// Public URL prefix (e.g. "/posts"). Must be unique.
    pub prefix: String,

    /// Glob pattern relative to the content root (e.g. "posts/*.md").
    pub pattern: String,
}

impl GenerateConfig {
    /// Find the first prefix declared twice, if any.
    pub fn duplicate_prefix(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.routes
            .iter()
            .map(|rule| rule.prefix.as_str())
            .find(|prefix| !seen.insert(*prefix))
    }
}
