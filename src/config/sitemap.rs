//! `[sitemap]` section configuration.
//!
//! Controls the sitemap artifact: the hostname URLs are rooted at, the
//! output filename, and whether a gzipped sibling is written.

use super::{base::BaseConfig, defaults};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[sitemap]` section in site.toml - sitemap generation.
///
/// # Example
/// ```toml
/// [sitemap]
/// hostname = "https://p1ngouin.com"
/// gzip = false
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = defaults::r#true())]
    pub enable: bool,

    /// Hostname override. Falls back to `[base].url`; the `BASE_URL`
    /// environment variable beats both.
    #[serde(default = "defaults::sitemap::hostname")]
    #[educe(Default = defaults::sitemap::hostname())]
    pub hostname: Option<String>,

    /// Also write a gzipped `<filename>.gz` next to the plain file.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub gzip: bool,

    /// Output filename, relative to the output directory.
    #[serde(default = "defaults::sitemap::filename")]
    #[educe(Default = defaults::sitemap::filename())]
    pub filename: PathBuf,
}

impl SitemapConfig {
    /// Resolve the hostname from an explicit environment value and the
    /// configured fallbacks, in precedence order.
    ///
    /// Blank environment values count as unset.
    pub(crate) fn resolved_hostname_with(
        &self,
        env_base_url: Option<&str>,
        base: &BaseConfig,
    ) -> Option<String> {
        env_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(String::from)
            .or_else(|| self.hostname.clone())
            .or_else(|| base.url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_sitemap_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test blog"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert!(config.sitemap.enable);
        assert_eq!(config.sitemap.hostname, None);
        assert!(!config.sitemap.gzip);
        assert_eq!(config.sitemap.filename, PathBuf::from("sitemap.xml"));
    }

    #[test]
    fn test_sitemap_config_full() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test blog"

            [sitemap]
            enable = true
            hostname = "https://p1ngouin.com"
            gzip = true
            filename = "sitemap-index.xml"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(
            config.sitemap.hostname,
            Some("https://p1ngouin.com".to_string())
        );
        assert!(config.sitemap.gzip);
        assert_eq!(config.sitemap.filename, PathBuf::from("sitemap-index.xml"));
    }

    #[test]
    fn test_hostname_env_wins() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test blog"
            url = "https://fallback.example"

            [sitemap]
            hostname = "https://configured.example"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        let resolved = config
            .sitemap
            .resolved_hostname_with(Some("https://env.example"), &config.base);
        assert_eq!(resolved, Some("https://env.example".to_string()));
    }

    #[test]
    fn test_hostname_config_over_base_url() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test blog"
            url = "https://fallback.example"

            [sitemap]
            hostname = "https://configured.example"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        let resolved = config.sitemap.resolved_hostname_with(None, &config.base);
        assert_eq!(resolved, Some("https://configured.example".to_string()));
    }

    #[test]
    fn test_hostname_falls_back_to_base_url() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test blog"
            url = "https://p1ngouin.com"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        let resolved = config.sitemap.resolved_hostname_with(None, &config.base);
        assert_eq!(resolved, Some("https://p1ngouin.com".to_string()));
    }

    #[test]
    fn test_hostname_blank_env_ignored() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test blog"
            url = "https://p1ngouin.com"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        let resolved = config.sitemap.resolved_hostname_with(Some("  "), &config.base);
        assert_eq!(resolved, Some("https://p1ngouin.com".to_string()));
    }

    #[test]
    fn test_hostname_none_when_nothing_set() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test blog"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.sitemap.resolved_hostname_with(None, &config.base), None);
    }
}
