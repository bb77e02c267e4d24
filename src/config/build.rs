//! `[build]` section configuration.
//!
//! Contains build pipeline settings: source and output paths, global CSS
//! entries, CSS purging, the markdown loader rule and the PostCSS chain.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Enums
// ============================================================================

/// Output mode of the markdown loader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownMode {
    /// Emit the rendered HTML body.
    #[default]
    Html,
    /// Emit the parsed frontmatter metadata.
    Meta,
}

// ============================================================================
// Main BuildConfig
// ============================================================================

/// `[build]` section in site.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"      # Markdown source directory
/// output = "dist"          # Artifact output directory
/// css = ["@/assets/css/fonts.css"]
///
/// [build.markdown]
/// pattern = "**/*.md"
/// modes = ["html", "meta"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Content root: the directory markdown sources live under.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Artifact output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Global CSS entries bundled into every page.
    #[serde(default)]
    pub css: Vec<String>,

    /// Unused CSS removal settings.
    #[serde(default)]
    pub purge: PurgeConfig,

    /// Markdown loader registration.
    #[serde(default)]
    pub markdown: MarkdownConfig,

    /// PostCSS plugin chain.
    #[serde(default)]
    pub postcss: PostcssConfig,
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// `[build.purge]` section - unused CSS removal.
///
/// The allowlist names classes generated at runtime (markdown output,
/// third-party embeds) that the purger cannot see statically.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PurgeConfig {
    /// Enable CSS purging in production builds.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Class names exempt from purging.
    #[serde(default = "defaults::build::purge::allowlist")]
    #[educe(Default = defaults::build::purge::allowlist())]
    pub allowlist: Vec<String>,
}

/// `[build.markdown]` section - the loader rule for markdown sources.
///
/// Registered with the framework's build pipeline; the transform itself
/// (markdown to HTML, frontmatter extraction, highlighting) runs inside the
/// framework.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct MarkdownConfig {
    /// Glob pattern selecting loader inputs, relative to the content root.
    #[serde(default = "defaults::build::markdown::pattern")]
    #[educe(Default = defaults::build::markdown::pattern())]
    pub pattern: String,

    /// Loader output modes. Both HTML and metadata by default.
    #[serde(default = "defaults::build::markdown::modes")]
    #[educe(Default = defaults::build::markdown::modes())]
    pub modes: Vec<MarkdownMode>,

    /// Extra syntax-highlighting languages to register.
    #[serde(default = "defaults::build::markdown::highlight")]
    #[educe(Default = defaults::build::markdown::highlight())]
    pub highlight: Vec<String>,
}

/// `[build.postcss]` section - the ordered PostCSS plugin chain.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PostcssConfig {
    /// Plugins in application order.
    #[serde(default = "defaults::build::postcss::plugins")]
    #[educe(Default = defaults::build::postcss::plugins())]
    pub plugins: Vec<PostcssPlugin>,
}

/// A single PostCSS plugin entry.
///
/// # Formats
/// ```toml
/// [[build.postcss.plugins]]
/// name = "tailwindcss"
/// options = "./tailwind.config.js"
///
/// [[build.postcss.plugins]]
/// name = "postcss-nested"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostcssPlugin {
    /// Plugin package name.
    pub name: String,

    /// Plugin options, passed through verbatim (string path, table, ...).
    #[serde(default = "defaults::build::postcss::options")]
    pub options: toml::Value,
}

// ============================================================================
// Tests
// ============================================================================
