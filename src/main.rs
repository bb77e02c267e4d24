//! Floe - site configuration and static route generation for markdown blogs.

mod cli;
mod config;
mod generate;
mod generator;
mod init;
mod manifest;
mod routes;
mod utils;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use generate::run_generate;
use init::new_site;
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Init { name } => new_site(config, name.is_some()),
        Commands::Check => run_check(config),
        Commands::Routes { json } => run_routes(config, *json),
        Commands::Generate { .. } => run_generate(config),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);

    // Validate config state based on command
    let config_exists = config.config_path.exists();
    match (cli.is_init(), config_exists) {
        (true, true) => {
            bail!("Config file already exists. Remove it manually or init in a different path.")
        }
        (false, false) => bail!("Config file not found."),
        _ => {}
    }

    if !cli.is_init() {
        config.validate()?;
    }

    Ok(config)
}

/// Report the loaded configuration state
fn run_check(config: &SiteConfig) -> Result<()> {
    log!("check"; "{} ok", config.config_path.display());

    match config.resolve_base_url() {
        Some(url) => log!("check"; "base URL {url}"),
        None => log!("check"; "no base URL configured"),
    }
    log!(
        "check";
        "{} route rules, {} redirects",
        config.generate.routes.len(),
        config.netlify.redirects.len()
    );

    Ok(())
}

/// Print the enumerated routes, one per line or as a JSON array
fn run_routes(config: &SiteConfig, json: bool) -> Result<()> {
    let routes = routes::enumerate_routes(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
    } else {
        for route in &routes {
            println!("{route}");
        }
    }

    Ok(())
}
