//! `[framework]` and `[analytics]` section configuration.
//!
//! Options passed through to the rendering framework untouched: the render
//! mode, the loading indicator, and the plugin/module registration lists.
//! This crate never interprets them.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[framework]` section in site.toml - passthrough framework options.
///
/// # Example
/// ```toml
/// [framework]
/// mode = "universal"
/// plugins = ["@/plugins/disqus"]
/// build_modules = ["@nuxtjs/tailwindcss", "@nuxtjs/google-analytics"]
/// modules = ["@aceforth/nuxt-netlify", "@nuxtjs/sitemap"]
///
/// [framework.loading]
/// color = "#fff"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FrameworkConfig {
    /// Render mode (e.g. "universal", "spa").
    #[serde(default = "defaults::framework::mode")]
    #[educe(Default = defaults::framework::mode())]
    pub mode: String,

    /// Page loading indicator settings.
    #[serde(default)]
    pub loading: LoadingConfig,

    /// Plugin module names, loaded by the framework at startup.
    #[serde(default)]
    pub plugins: Vec<String>,

    /// Build-time module names.
    #[serde(default)]
    pub build_modules: Vec<String>,

    /// Runtime module names.
    #[serde(default)]
    pub modules: Vec<String>,
}

/// `[framework.loading]` section - the progress bar shown during navigation.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct LoadingConfig {
    /// CSS color of the loading bar.
    #[serde(default = "defaults::framework::loading::color")]
    #[educe(Default = defaults::framework::loading::color())]
    pub color: String,
}

/// `[analytics]` section in site.toml - Google Analytics wiring.
///
/// An empty `id` disables analytics entirely; nothing is emitted.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct AnalyticsConfig {
    /// Tracking id (e.g. "UA-134180672-1").
    #[serde(default)]
    pub id: String,

    /// Send events while developing locally.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub dev: bool,
}

impl AnalyticsConfig {
    /// Whether a tracking id is configured.
    pub fn is_enabled(&self) -> bool {
        !self.id.is_empty()
    }
}
