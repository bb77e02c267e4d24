//! `[netlify]` section configuration.
//!
//! Deployment-layer settings: the redirect table written to `_redirects`
//! and the security header block written to `_headers`. Redirect paths are
//! carried verbatim; this layer never normalizes them.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[netlify]` section in site.toml - deployment settings.
///
/// # Example
/// ```toml
/// [netlify]
/// merge_security_headers = true
/// redirects = [
///     { from = "/active-and-passive-ftp-with-docker/", to = "/posts/active-and-passive-ftp-with-docker/" },
/// ]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct NetlifyConfig {
    /// Merge the default security header block into `_headers`.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = defaults::r#true())]
    pub merge_security_headers: bool,

    /// Redirect rules applied by the deployment layer.
    #[serde(default)]
    pub redirects: Vec<RedirectRule>,
}

/// A single redirect rule.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RedirectRule {
    /// Source URL path, as-is.
    pub from: String,

    /// Target URL path, as-is.
    pub to: String,

    /// HTTP status code for the redirect.
    #[serde(default = "defaults::netlify::status")]
    #[educe(Default = defaults::netlify::status())]
    pub status: u16,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_netlify_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test blog"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert!(config.netlify.merge_security_headers);
        assert!(config.netlify.redirects.is_empty());
    }

    #[test]
    fn test_netlify_redirects() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test blog"

            [netlify]
            redirects = [
                { from = "/active-and-passive-ftp-with-docker/", to = "/posts/active-and-passive-ftp-with-docker/" },
                { from = "/old", to = "/new", status = 302 },
            ]
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        let redirects = &config.netlify.redirects;
        assert_eq!(redirects.len(), 2);
        assert_eq!(redirects[0].from, "/active-and-passive-ftp-with-docker/");
        assert_eq!(redirects[0].to, "/posts/active-and-passive-ftp-with-docker/");
        assert_eq!(redirects[0].status, 301);
        assert_eq!(redirects[1].status, 302);
    }

    #[test]
    fn test_redirect_paths_kept_verbatim() {
        // Trailing slashes, double slashes and mixed case survive loading
        let config = r#"
            [base]
            title = "Test"
            description = "Test blog"

            [netlify]
            redirects = [
                { from = "//Weird//Path/", to = "/Target/./path" },
            ]
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.netlify.redirects[0].from, "//Weird//Path/");
        assert_eq!(config.netlify.redirects[0].to, "/Target/./path");
    }

    #[test]
    fn test_merge_security_headers_disabled() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test blog"

            [netlify]
            merge_security_headers = false
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert!(!config.netlify.merge_security_headers);
    }

    #[test]
    fn test_redirect_requires_from_and_to() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test blog"

            [netlify]
            redirects = [{ from = "/only-from" }]
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_netlify_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test"
            [netlify]
            headers_file = "_headers"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
