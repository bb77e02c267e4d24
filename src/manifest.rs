//! Framework configuration record assembly.
//!
//! Builds the immutable record the external rendering framework consumes at
//! startup and serializes it with the key names the framework recognizes
//! (`purgeCSS`, `buildModules`, `googleAnalytics`, ...). This crate only
//! assembles the record; how it is interpreted is the framework's business.
//!
//! The record is pure data. The only conditional pieces are the resolved
//! base URL (evaluated once, before assembly) and two convenience
//! injections: the description meta tag derived from `[base].description`
//! and the analytics preconnect hint.

use crate::config::{LinkTag, MarkdownMode, MetaTag, PostcssPlugin, SiteConfig};
use crate::log;
use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::Path};

// ============================================================================
// Constants
// ============================================================================

/// Analytics collector origin, preconnected when analytics is enabled.
const ANALYTICS_ORIGIN: &str = "https://stats.g.doubleclick.net";

/// Identifier of the injected description meta tag.
const DESCRIPTION_HID: &str = "description";

// ============================================================================
// Record Structure
// ============================================================================

/// The configuration record handed to the rendering framework.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    mode: String,
    head: Head,
    loading: Loading,
    css: Vec<String>,
    #[serde(rename = "purgeCSS")]
    purge_css: PurgeCss,
    plugins: Vec<String>,
    build_modules: Vec<String>,
    modules: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    google_analytics: Option<GoogleAnalytics>,
    netlify: Netlify,
    #[serde(skip_serializing_if = "Option::is_none")]
    sitemap: Option<Sitemap>,
    build: Build,
    generate: Generate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Head {
    title: String,
    html_attrs: HtmlAttrs,
    meta: Vec<MetaTag>,
    link: Vec<LinkTag>,
}

#[derive(Debug, Serialize)]
struct HtmlAttrs {
    lang: String,
}

#[derive(Debug, Serialize)]
struct Loading {
    color: String,
}

#[derive(Debug, Serialize)]
struct PurgeCss {
    enabled: bool,
    whitelist: Vec<String>,
}

#[derive(Debug, Serialize)]
struct GoogleAnalytics {
    id: String,
    dev: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Netlify {
    merge_security_headers: bool,
    redirects: Vec<Redirect>,
}

/// Redirect pair passed through exactly as configured.
#[derive(Debug, Serialize)]
struct Redirect {
    from: String,
    to: String,
}

#[derive(Debug, Serialize)]
struct Sitemap {
    hostname: String,
    gzip: bool,
}

#[derive(Debug, Serialize)]
struct Build {
    postcss: Postcss,
    markdown: Markdown,
}

#[derive(Debug, Serialize)]
struct Postcss {
    plugins: Vec<PostcssPlugin>,
}

/// The markdown loader rule, declaratively.
#[derive(Debug, Serialize)]
struct Markdown {
    pattern: String,
    modes: Vec<MarkdownMode>,
    highlight: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Generate {
    routes: Vec<String>,
}

// ============================================================================
// Assembly
// ============================================================================

impl Manifest {
    /// Assemble the record from the loaded configuration, the resolved base
    /// URL and the enumerated routes.
    pub fn from_config(config: &SiteConfig, base_url: Option<&str>, routes: Vec<String>) -> Self {
        Self {
            mode: config.framework.mode.clone(),
            head: Head::from_config(config),
            loading: Loading {
                color: config.framework.loading.color.clone(),
            },
            css: config.build.css.clone(),
            purge_css: PurgeCss {
                enabled: config.build.purge.enable,
                whitelist: config.build.purge.allowlist.clone(),
            },
            plugins: config.framework.plugins.clone(),
            build_modules: config.framework.build_modules.clone(),
            modules: config.framework.modules.clone(),
            google_analytics: config.analytics.is_enabled().then(|| GoogleAnalytics {
                id: config.analytics.id.clone(),
                dev: config.analytics.dev,
            }),
            netlify: Netlify {
                merge_security_headers: config.netlify.merge_security_headers,
                redirects: config
                    .netlify
                    .redirects
                    .iter()
                    .map(|rule| Redirect {
                        from: rule.from.clone(),
                        to: rule.to.clone(),
                    })
                    .collect(),
            },
            sitemap: match base_url {
                Some(hostname) if config.sitemap.enable => Some(Sitemap {
                    hostname: hostname.to_string(),
                    gzip: config.sitemap.gzip,
                }),
                _ => None,
            },
            build: Build {
                postcss: Postcss {
                    plugins: config.build.postcss.plugins.clone(),
                },
                markdown: Markdown {
                    pattern: config.build.markdown.pattern.clone(),
                    modes: config.build.markdown.modes.clone(),
                    highlight: config.build.markdown.highlight.clone(),
                },
            },
            generate: Generate { routes },
        }
    }

    /// Serialize the record as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }

    /// Write the record to disk.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write manifest to {}", path.display()))?;

        log!("manifest"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

impl Head {
    fn from_config(config: &SiteConfig) -> Self {
        let title = config
            .head
            .title
            .clone()
            .unwrap_or_else(|| config.base.title.clone());

        let mut meta = config.head.meta.clone();
        // The description tag follows [base].description unless the user
        // already pinned one under the same hid.
        if config.head.meta_by_hid(DESCRIPTION_HID).is_none()
            && !config.base.description.is_empty()
        {
            meta.push(MetaTag {
                hid: Some(DESCRIPTION_HID.into()),
                charset: None,
                name: Some(DESCRIPTION_HID.into()),
                content: Some(config.base.description.clone()),
            });
        }

        let mut link = config.head.link.clone();
        if config.analytics.is_enabled()
            && !link.iter().any(|tag| tag.href == ANALYTICS_ORIGIN)
        {
            link.push(LinkTag {
                hid: None,
                rel: "preconnect".into(),
                href: ANALYTICS_ORIGIN.into(),
                r#type: None,
            });
        }

        Self {
            title,
            html_attrs: HtmlAttrs {
                lang: config.base.language.clone(),
            },
            meta,
            link,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn record(toml: &str, base_url: Option<&str>, routes: Vec<String>) -> Value {
        let config = SiteConfig::from_str(toml).unwrap();
        let manifest = Manifest::from_config(&config, base_url, routes);
        serde_json::to_value(&manifest).unwrap()
    }

    const MINIMAL: &str = r#"
        [base]
        title = "p1ngouin.com"
        description = "Full-stack notes"
    "#;

    #[test]
    fn test_record_uses_framework_key_names() {
        let v = record(MINIMAL, Some("https://p1ngouin.com"), vec![]);

        assert!(v.get("head").is_some());
        assert!(v.get("loading").is_some());
        assert!(v.get("css").is_some());
        assert!(v.get("purgeCSS").is_some());
        assert!(v.get("plugins").is_some());
        assert!(v.get("buildModules").is_some());
        assert!(v.get("modules").is_some());
        assert!(v.get("netlify").is_some());
        assert!(v.get("sitemap").is_some());
        assert!(v["build"].get("postcss").is_some());
        assert!(v["generate"].get("routes").is_some());

        // Renames did not leak the Rust field names
        assert!(v.get("purge_css").is_none());
        assert!(v.get("build_modules").is_none());
    }

    #[test]
    fn test_head_defaults() {
        let v = record(MINIMAL, None, vec![]);

        assert_eq!(v["head"]["title"], "p1ngouin.com");
        assert_eq!(v["head"]["htmlAttrs"]["lang"], "en");
        // charset + viewport defaults plus the injected description
        let meta = v["head"]["meta"].as_array().unwrap();
        assert_eq!(meta.len(), 3);
        assert_eq!(meta[0]["charset"], "utf-8");
        assert_eq!(meta[1]["name"], "viewport");
        assert_eq!(meta[2]["hid"], "description");
        assert_eq!(meta[2]["content"], "Full-stack notes");
    }

    #[test]
    fn test_description_not_duplicated() {
        let toml = r#"
            [base]
            title = "Test"
            description = "from base"

            [head]
            meta = [{ hid = "description", name = "description", content = "pinned" }]
        "#;
        let v = record(toml, None, vec![]);

        let meta = v["head"]["meta"].as_array().unwrap();
        let descriptions: Vec<_> = meta
            .iter()
            .filter(|tag| tag["hid"] == "description")
            .collect();
        assert_eq!(descriptions.len(), 1);
        assert_eq!(descriptions[0]["content"], "pinned");
    }

    #[test]
    fn test_head_title_override() {
        let toml = r#"
            [base]
            title = "base title"
            description = "d"

            [head]
            title = "head title"
        "#;
        let v = record(toml, None, vec![]);

        assert_eq!(v["head"]["title"], "head title");
    }

    #[test]
    fn test_analytics_emitted_with_preconnect() {
        let toml = r#"
            [base]
            title = "Test"
            description = "d"

            [analytics]
            id = "UA-134180672-1"
            dev = false
        "#;
        let v = record(toml, None, vec![]);

        assert_eq!(v["googleAnalytics"]["id"], "UA-134180672-1");
        assert_eq!(v["googleAnalytics"]["dev"], false);

        let link = v["head"]["link"].as_array().unwrap();
        let preconnect = link
            .iter()
            .find(|tag| tag["rel"] == "preconnect")
            .unwrap();
        assert_eq!(preconnect["href"], "https://stats.g.doubleclick.net");
    }

    #[test]
    fn test_analytics_absent_when_unconfigured() {
        let v = record(MINIMAL, None, vec![]);

        assert!(v.get("googleAnalytics").is_none());
        let link = v["head"]["link"].as_array().unwrap();
        assert!(link.iter().all(|tag| tag["rel"] != "preconnect"));
    }

    #[test]
    fn test_redirects_pass_through_unmodified() {
        let toml = r#"
            [base]
            title = "Test"
            description = "d"

            [netlify]
            redirects = [
                { from = "/active-and-passive-ftp-with-docker/", to = "/posts/active-and-passive-ftp-with-docker/" },
            ]
        "#;
        let v = record(toml, None, vec![]);

        let redirects = v["netlify"]["redirects"].as_array().unwrap();
        assert_eq!(redirects.len(), 1);
        assert_eq!(redirects[0]["from"], "/active-and-passive-ftp-with-docker/");
        assert_eq!(redirects[0]["to"], "/posts/active-and-passive-ftp-with-docker/");
        // Only the pair crosses the boundary
        assert!(redirects[0].get("status").is_none());
        assert_eq!(v["netlify"]["mergeSecurityHeaders"], true);
    }

    #[test]
    fn test_sitemap_uses_resolved_base_url() {
        let v = record(MINIMAL, Some("https://env.example"), vec![]);

        assert_eq!(v["sitemap"]["hostname"], "https://env.example");
        assert_eq!(v["sitemap"]["gzip"], false);
    }

    #[test]
    fn test_sitemap_absent_when_disabled() {
        let toml = r#"
            [base]
            title = "Test"
            description = "d"

            [sitemap]
            enable = false
        "#;
        let v = record(toml, Some("https://p1ngouin.com"), vec![]);

        assert!(v.get("sitemap").is_none());
    }

    #[test]
    fn test_sitemap_absent_without_base_url() {
        let v = record(MINIMAL, None, vec![]);

        assert!(v.get("sitemap").is_none());
    }

    #[test]
    fn test_generate_routes() {
        let routes = vec!["/posts/a".to_string(), "/posts/b".to_string()];
        let v = record(MINIMAL, None, routes);

        let out = v["generate"]["routes"].as_array().unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], "/posts/a");
        assert_eq!(out[1], "/posts/b");
    }

    #[test]
    fn test_postcss_plugins_in_order() {
        let v = record(MINIMAL, None, vec![]);

        let plugins = v["build"]["postcss"]["plugins"].as_array().unwrap();
        assert_eq!(plugins[0]["name"], "tailwindcss");
        assert_eq!(plugins[0]["options"], "./tailwind.config.js");
        assert_eq!(plugins[1]["name"], "postcss-nested");
    }

    #[test]
    fn test_markdown_loader_rule() {
        let v = record(MINIMAL, None, vec![]);

        let markdown = &v["build"]["markdown"];
        assert_eq!(markdown["pattern"], "**/*.md");
        assert_eq!(markdown["modes"][0], "html");
        assert_eq!(markdown["modes"][1], "meta");
        assert_eq!(markdown["highlight"][0], "dockerfile");
        assert_eq!(markdown["highlight"][1], "diff");
    }

    #[test]
    fn test_purge_css_whitelist() {
        let v = record(MINIMAL, None, vec![]);

        assert_eq!(v["purgeCSS"]["enabled"], true);
        assert_eq!(v["purgeCSS"]["whitelist"][0], "markup");
    }

    #[test]
    fn test_to_json_round_trips() {
        let config = SiteConfig::from_str(MINIMAL).unwrap();
        let manifest = Manifest::from_config(&config, None, vec!["/posts/a".into()]);
        let json = manifest.to_json().unwrap();

        let v: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["generate"]["routes"][0], "/posts/a");
    }
}
