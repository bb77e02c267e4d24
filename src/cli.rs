//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Floe site configuration and route generation CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: site.toml)
    #[arg(short = 'C', long, default_value = "site.toml")]
    pub config: PathBuf,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Init a template site
    Init {
        /// the name(path) of the site directory, relative to `root`
        name: Option<PathBuf>,
    },

    /// Load and validate the configuration, report the resolved base URL
    Check,

    /// Enumerate the generated routes and print them
    Routes {
        /// print the routes as a JSON array
        #[arg(short, long)]
        json: bool,
    },

    /// Scan content and write the framework record and deployment artifacts
    Generate {
        /// Override the base URL for the site.
        ///
        /// Useful for CI/CD deployments where the production URL differs from
        /// local development. This avoids modifying site.toml, keeping the
        /// source file clean.
        #[arg(long = "base-url")]
        base_url: Option<String>,

        /// enable sitemap generation
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        sitemap: Option<bool>,

        /// gzip-compress the sitemap
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        gzip: Option<bool>,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
    pub const fn is_routes(&self) -> bool {
        matches!(self.command, Commands::Routes { .. })
    }
    pub const fn is_generate(&self) -> bool {
        matches!(self.command, Commands::Generate { .. })
    }
}
