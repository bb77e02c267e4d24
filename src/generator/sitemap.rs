//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing all generated routes for search
//! engine indexing, with an optional gzip-compressed sibling.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/posts/hello</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{config::SiteConfig, log, routes::RouteEntry};
use anyhow::{Context, Result};
use flate2::{Compression, write::GzEncoder};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

/// Build sitemap if enabled in config.
///
/// Uses the pre-collected scan entries instead of re-scanning the
/// filesystem; `base_url` is the resolved hostname all locations are
/// rooted at.
pub fn build_sitemap(config: &SiteConfig, base_url: &str, entries: &[RouteEntry]) -> Result<()> {
    if config.sitemap.enable {
        let sitemap = Sitemap::from_entries(base_url, entries);
        sitemap.write(config)?;
    }
    Ok(())
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Sitemap data structure
struct Sitemap {
    /// List of URL entries
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Full URL location
    loc: String,
    /// Last modification date (optional, YYYY-MM-DD format)
    lastmod: Option<String>,
}

impl Sitemap {
    /// Build sitemap from the scan entries.
    fn from_entries(base_url: &str, entries: &[RouteEntry]) -> Self {
        let base = base_url.trim_end_matches('/');

        let urls: Vec<UrlEntry> = entries
            .iter()
            .map(|entry| UrlEntry {
                loc: format!("{base}{}", entry.route),
                lastmod: entry.lastmod.clone(),
            })
            .collect();

        Self { urls }
    }

    /// Generate sitemap XML string.
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap (and its gzip sibling, when enabled) to the output dir.
    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.build.output.join(&config.sitemap.filename);
        let xml = self.into_xml();

        fs::write(&sitemap_path, &xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;
        log!("sitemap"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());

        if config.sitemap.gzip {
            let gz_path = gz_sibling(&sitemap_path);
            let compressed = gzip(xml.as_bytes())?;

            fs::write(&gz_path, compressed)
                .with_context(|| format!("Failed to write sitemap to {}", gz_path.display()))?;
            log!("sitemap"; "{}", gz_path.file_name().unwrap_or_default().to_string_lossy());
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Path of the compressed sibling: the same file name with `.gz` appended.
fn gz_sibling(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".gz");
    PathBuf::from(os)
}

/// Gzip-compress a byte slice.
fn gzip(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    let compressed = encoder.finish()?;
    Ok(compressed)
}

// ============================================================================
// Tests
// ============================================================================
