//! Site configuration management for `site.toml`.
//!
//! # Sections
//!
//! | Section       | Purpose                                        |
//! |---------------|------------------------------------------------|
//! | `[base]`      | Site metadata (title, description, url)        |
//! | `[head]`      | Document head tags (meta, link, hid overrides) |
//! | `[framework]` | Passthrough framework options (mode, plugins)  |
//! | `[analytics]` | Google Analytics wiring                        |
//! | `[build]`     | Paths, CSS pipeline, markdown loader rule      |
//! | `[netlify]`   | Redirect table and security headers            |
//! | `[sitemap]`   | Sitemap hostname, gzip, filename               |
//! | `[generate]`  | Route descriptors for static export            |
//! | `[extra]`     | User-defined custom fields                     |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Blog"
//! description = "A personal blog"
//! url = "https://example.com"
//!
//! [build]
//! content = "content"
//! output = "dist"
//!
//! [generate]
//! routes = [{ prefix = "/posts", pattern = "posts/*.md" }]
//!
//! [extra]
//! comments = true
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod framework;
mod generate;
mod head;
mod netlify;
mod sitemap;

// Re-export public types used by other modules
pub use build::{MarkdownMode, PostcssPlugin};
pub use error::ConfigError;
pub use generate::RouteRule;
pub use head::{LinkTag, MetaTag};
pub use netlify::RedirectRule;

// Internal imports used in this module
use base::BaseConfig;
use build::BuildConfig;
use framework::{AnalyticsConfig, FrameworkConfig};
use generate::GenerateConfig;
use head::HeadConfig;
use netlify::NetlifyConfig;
use sitemap::SitemapConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Document head tags
    #[serde(default)]
    pub head: HeadConfig,

    /// Passthrough framework options
    #[serde(default)]
    pub framework: FrameworkConfig,

    /// Analytics wiring
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Deployment settings
    #[serde(default)]
    pub netlify: NetlifyConfig,

    /// Sitemap settings
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// Static route generation
    #[serde(default)]
    pub generate: GenerateConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Get CLI arguments reference
    pub fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// Resolve the base URL all absolute links are rooted at.
    ///
    /// Precedence: `--base-url` on the generate command, then the
    /// `BASE_URL` environment variable, then `[sitemap].hostname`, then
    /// `[base].url`.
    pub fn resolve_base_url(&self) -> Option<String> {
        self.resolve_base_url_with(env_base_url().as_deref())
    }

    /// Same resolution with the environment value supplied by the caller.
    fn resolve_base_url_with(&self, env_base_url: Option<&str>) -> Option<String> {
        let cli_override = self.cli.and_then(|cli| match &cli.command {
            Commands::Generate { base_url, .. } => base_url.clone(),
            _ => None,
        });

        cli_override
            .filter(|url| !url.is_empty())
            .or_else(|| self.sitemap.resolved_hostname_with(env_base_url, &self.base))
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        // Determine the final root path based on command
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => {
                let base = cli
                    .root
                    .as_ref()
                    .cloned()
                    .unwrap_or_else(|| self.get_root().to_owned());
                base.join(name)
            }
            _ => cli
                .root
                .as_ref()
                .cloned()
                .unwrap_or_else(|| self.get_root().to_owned()),
        };

        self.set_root(&root);
        self.update_path_with_root(&root);

        if let Commands::Generate { sitemap, gzip, .. } = &cli.command {
            Self::update_option(&mut self.sitemap.enable, sitemap.as_ref());
            Self::update_option(&mut self.sitemap.gzip, gzip.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let cli = self.get_cli();

        // Apply CLI overrides first
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        // Expand tildes in user-supplied directories
        self.build.content = Self::expand_tilde(&self.build.content);
        self.build.output = Self::expand_tilde(&self.build.output);

        // Normalize root to absolute path
        let root = Self::normalize_path(root);
        self.set_root(&root);

        // Normalize config path
        self.config_path = Self::normalize_path(&root.join(&cli.config));

        // Normalize all directory paths
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Expand a leading tilde to the user's home directory
    fn expand_tilde(path: &Path) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command.
    ///
    /// Only the invariants this layer owns are checked; field semantics the
    /// framework interprets are left alone.
    pub fn validate(&self) -> Result<()> {
        self.validate_with(env_base_url().as_deref())
    }

    fn validate_with(&self, env_base_url: Option<&str>) -> Result<()> {
        let cli = self.get_cli();

        if !self.config_path.exists() {
            bail!("Config file not found");
        }

        if let Some(hid) = self.head.duplicate_hid() {
            bail!(ConfigError::Validation(format!(
                "[head] duplicate hid `{hid}`"
            )));
        }

        if let Some(prefix) = self.generate.duplicate_prefix() {
            bail!(ConfigError::Validation(format!(
                "[generate.routes] duplicate prefix `{prefix}`"
            )));
        }

        if self
            .resolve_base_url_with(env_base_url)
            .is_some_and(|url| !url.starts_with("http"))
        {
            bail!(ConfigError::Validation(
                "base URL must start with http:// or https://".into()
            ));
        }

        if cli.is_generate()
            && self.sitemap.enable
            && self.resolve_base_url_with(env_base_url).is_none()
        {
            bail!(ConfigError::Validation(
                "sitemap generation needs a base URL: set BASE_URL, [sitemap].hostname or [base].url"
                    .into()
            ));
        }

        Ok(())
    }
}

fn env_base_url() -> Option<String> {
    std::env::var("BASE_URL").ok()
}

// ============================================================================
// Tests
// ============================================================================
