//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn language() -> String {
        "en".into()
    }
}

// ============================================================================
// [head] Section Defaults
// ============================================================================

pub mod head {
    use super::super::head::{LinkTag, MetaTag};

    pub fn title() -> Option<String> {
        None
    }

    pub fn meta() -> Vec<MetaTag> {
        vec![
            MetaTag {
                charset: Some("utf-8".into()),
                ..MetaTag::default()
            },
            MetaTag {
                name: Some("viewport".into()),
                content: Some("width=device-width, initial-scale=1".into()),
                ..MetaTag::default()
            },
        ]
    }

    pub fn link() -> Vec<LinkTag> {
        vec![LinkTag {
            rel: "icon".into(),
            href: "/favicon.ico".into(),
            r#type: Some("image/x-icon".into()),
            hid: None,
        }]
    }
}

// ============================================================================
// [framework] Section Defaults
// ============================================================================

pub mod framework {
    pub fn mode() -> String {
        "universal".into()
    }

    pub mod loading {
        pub fn color() -> String {
            "#fff".into()
        }
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn output() -> PathBuf {
        "dist".into()
    }

    pub mod purge {
        pub fn allowlist() -> Vec<String> {
            vec!["markup".into()]
        }
    }

    pub mod markdown {
        use super::super::super::build::MarkdownMode;

        pub fn pattern() -> String {
            "**/*.md".into()
        }

        pub fn modes() -> Vec<MarkdownMode> {
            vec![MarkdownMode::Html, MarkdownMode::Meta]
        }

        pub fn highlight() -> Vec<String> {
            vec!["dockerfile".into(), "diff".into()]
        }
    }

    pub mod postcss {
        use super::super::super::build::PostcssPlugin;

        pub fn options() -> toml::Value {
            toml::Value::Table(toml::Table::new())
        }

        pub fn plugins() -> Vec<PostcssPlugin> {
            vec![
                PostcssPlugin {
                    name: "tailwindcss".into(),
                    options: toml::Value::String("./tailwind.config.js".into()),
                },
                PostcssPlugin {
                    name: "postcss-nested".into(),
                    options: toml::Value::Table(toml::Table::new()),
                },
            ]
        }
    }
}

// ============================================================================
// [netlify] Section Defaults
// ============================================================================

pub mod netlify {
    pub fn status() -> u16 {
        301
    }
}

// ============================================================================
// [sitemap] Section Defaults
// ============================================================================

pub mod sitemap {
    use std::path::PathBuf;

    pub fn hostname() -> Option<String> {
        None
    }

    pub fn filename() -> PathBuf {
        "sitemap.xml".into()
    }
}

// ============================================================================
// [generate] Section Defaults
// ============================================================================

pub mod generate {
    use super::super::generate::RouteRule;

    pub fn routes() -> Vec<RouteRule> {
        vec![RouteRule {
            prefix: "/posts".into(),
            pattern: "posts/*.md".into(),
        }]
    }
}
