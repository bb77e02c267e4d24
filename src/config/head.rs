//! `[head]` section configuration.
//!
//! Declares the document head handed to the rendering framework: an optional
//! title override plus meta and link tag lists. Tags may carry a `hid` so a
//! page can override the site-wide tag instead of emitting a duplicate.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// `[head]` section in site.toml - document head tags.
///
/// # Example
/// ```toml
/// [head]
/// meta = [
///     { charset = "utf-8" },
///     { hid = "og:site_name", name = "og:site_name", content = "p1ngouin.com" },
/// ]
/// link = [
///     { rel = "icon", type = "image/x-icon", href = "/favicon.ico" },
/// ]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct HeadConfig {
    /// Page title override. Falls back to `[base].title` when unset.
    #[serde(default = "defaults::head::title")]
    #[educe(Default = defaults::head::title())]
    pub title: Option<String>,

    /// Meta tags emitted into `<head>`.
    #[serde(default = "defaults::head::meta")]
    #[educe(Default = defaults::head::meta())]
    pub meta: Vec<MetaTag>,

    /// Link tags emitted into `<head>`.
    #[serde(default = "defaults::head::link")]
    #[educe(Default = defaults::head::link())]
    pub link: Vec<LinkTag>,
}

/// A single `<meta>` tag.
///
/// Either `charset` or a `name`/`content` pair is set; the framework emits
/// whatever attributes are present. `hid` keys the tag for page overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetaTag {
    /// Override identifier. Must be unique across all head tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hid: Option<String>,

    /// `charset` attribute (e.g. "utf-8").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,

    /// `name` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `content` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A single `<link>` tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkTag {
    /// Override identifier. Must be unique across all head tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hid: Option<String>,

    /// `rel` attribute (e.g. "icon", "preconnect").
    pub rel: String,

    /// `href` attribute.
    pub href: String,

    /// `type` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

impl HeadConfig {
    /// Find the first `hid` shared by two head tags, if any.
    ///
    /// Duplicate identifiers would make the framework silently drop one of
    /// the tags, so validation rejects them up front.
    pub fn duplicate_hid(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        let meta_hids = self.meta.iter().filter_map(|tag| tag.hid.as_deref());
        let link_hids = self.link.iter().filter_map(|tag| tag.hid.as_deref());

        meta_hids.chain(link_hids).find(|hid| !seen.insert(*hid))
    }

    /// Look up a meta tag by its `hid`.
    pub fn meta_by_hid(&self, hid: &str) -> Option<&MetaTag> {
        self.meta.iter().find(|tag| tag.hid.as_deref() == Some(hid))
    }
}
