//! `[base]` section configuration.
//!
//! Contains basic site information like title, description and base URL.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in site.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "My Blog"
/// description = "Notes on containers and web development"
/// url = "https://myblog.com"
/// language = "en"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title displayed in browser tab and headers.
    pub title: String,

    /// Site description for SEO meta tags.
    pub description: String,

    /// Base URL for absolute links in the sitemap.
    ///
    /// The `BASE_URL` environment variable and `[sitemap].hostname`
    /// both take precedence; this is the literal fallback.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code emitted as the `<html lang>` attribute.
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,
}
