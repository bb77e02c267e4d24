//! Generate-phase orchestration.
//!
//! Runs the one-shot pipeline feeding the external rendering framework and
//! the deployment layer.
//!
//! # Architecture
//!
//! ```text
//! run_generate()
//!     │
//!     ├── routes::scan() ───────► route entries (blocking, one-shot)
//!     ├── Manifest::write() ────► floe.manifest.json
//!     ├── write_route_list() ───► routes.json
//!     ├── build_sitemap() ──────► sitemap.xml (+ .gz)
//!     └── build_netlify() ──────► _redirects, _headers
//! ```

use crate::{
    config::SiteConfig,
    generator::{netlify::build_netlify, sitemap::build_sitemap},
    log,
    manifest::Manifest,
    routes,
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

// ============================================================================
// Constants
// ============================================================================

/// Configuration record file name inside the output directory.
const MANIFEST_FILE: &str = "floe.manifest.json";

/// Route list file name inside the output directory.
const ROUTES_FILE: &str = "routes.json";

// ============================================================================
// Public API
// ============================================================================

/// Run the full generate phase.
///
/// The content scan completes before anything is written; artifacts then
/// go out in a fixed order (manifest, route list, sitemap, netlify).
pub fn run_generate(config: &SiteConfig) -> Result<()> {
    let entries = routes::scan(config)?;
    let route_list: Vec<String> = entries.iter().map(|entry| entry.route.clone()).collect();
    let base_url = config.resolve_base_url();

    let output = &config.build.output;
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    let manifest = Manifest::from_config(config, base_url.as_deref(), route_list.clone());
    manifest.write(&output.join(MANIFEST_FILE))?;

    write_route_list(&route_list, &output.join(ROUTES_FILE))?;

    if let Some(base_url) = &base_url {
        build_sitemap(config, base_url, &entries)?;
    }
    build_netlify(config)?;

    log!("generate"; "done ({} routes)", route_list.len());
    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Write the plain route array consumed by external tooling.
fn write_route_list(routes: &[String], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(routes)?;

    fs::write(path, json)
        .with_context(|| format!("Failed to write route list to {}", path.display()))?;

    log!("routes"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
