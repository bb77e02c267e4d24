//! Artifact writers for the generate phase.

pub mod netlify;
pub mod sitemap;
