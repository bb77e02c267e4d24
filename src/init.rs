//! Site initialization module.
//!
//! Creates new site structure with default configuration and a sample post.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Default config filename
const CONFIG_FILE: &str = "site.toml";

/// Default site directory structure
const SITE_DIRS: &[&str] = &["content/posts", "assets/css", "static"];

/// Sample post matching the default route rule.
const SAMPLE_POST: &str = "\
---
title: Hello World
description: The first post on this blog.
---

# Hello World

Write markdown here; every file under `content/posts/` becomes a route.
";

/// Create a new site with default structure
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    // Safety check: if no name was provided (init in current dir),
    // the directory must be completely empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `floe init <SITE_NAME>` to create in a subdirectory."
        );
    }

    init_site_structure(root)?;
    init_default_config(root)?;
    init_sample_post(root)?;
    init_ignored_files(root, config)?;

    log!("init"; "site created at {}", root.display());
    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(root: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(root.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Create site directory structure
fn init_site_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `floe init <SITE_NAME>` instead.",
                path.display()
            );
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}

/// Write a first post so the default route rule matches something
fn init_sample_post(root: &Path) -> Result<()> {
    fs::write(root.join("content/posts/hello-world.md"), SAMPLE_POST)?;
    Ok(())
}

/// Initialize .gitignore and .ignore files with the output directory
fn init_ignored_files(root: &Path, config: &SiteConfig) -> Result<()> {
    let output = config
        .build
        .output
        .file_name()
        .unwrap_or_default()
        .to_string_lossy();
    let content = format!("{output}\nnode_modules\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_rooted_at(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.set_root(root);
        config
    }

    #[test]
    fn test_new_site_scaffolds_everything() {
        let dir = TempDir::new().unwrap();
        let config = config_rooted_at(dir.path());

        new_site(&config, false).unwrap();

        assert!(dir.path().join("site.toml").exists());
        assert!(dir.path().join("content/posts/hello-world.md").exists());
        assert!(dir.path().join("assets/css").is_dir());
        assert!(dir.path().join("static").is_dir());
        assert!(dir.path().join(".gitignore").exists());
        assert!(dir.path().join(".ignore").exists());
    }

    #[test]
    fn test_scaffolded_config_loads_back() {
        let dir = TempDir::new().unwrap();
        let config = config_rooted_at(dir.path());

        new_site(&config, false).unwrap();

        let restored = SiteConfig::from_path(&dir.path().join("site.toml")).unwrap();
        assert_eq!(restored.base.language, "en");
        assert_eq!(restored.generate.routes.len(), 1);
        assert_eq!(restored.generate.routes[0].prefix, "/posts");
    }

    #[test]
    fn test_sample_post_matches_default_rule() {
        let dir = TempDir::new().unwrap();
        let mut config = config_rooted_at(dir.path());

        new_site(&config, false).unwrap();

        config.build.content = dir.path().join("content");
        let routes = crate::routes::enumerate_routes(&config).unwrap();
        assert_eq!(routes, vec!["/posts/hello-world"]);
    }

    #[test]
    fn test_init_refuses_non_empty_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("existing.txt"), "data").unwrap();
        let config = config_rooted_at(dir.path());

        let result = new_site(&config, false);

        assert!(result.is_err());
        assert!(!dir.path().join("site.toml").exists());
    }

    #[test]
    fn test_init_with_name_allows_fresh_subdir() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("my-blog");
        let config = config_rooted_at(&root);

        // has_name skips the emptiness check; the subdir does not exist yet
        new_site(&config, true).unwrap();

        assert!(root.join("site.toml").exists());
    }

    #[test]
    fn test_init_twice_fails() {
        let dir = TempDir::new().unwrap();
        let config = config_rooted_at(dir.path());

        new_site(&config, false).unwrap();
        let result = new_site(&config, false);

        assert!(result.is_err());
    }

    #[test]
    fn test_ignore_files_name_output_dir() {
        let dir = TempDir::new().unwrap();
        let config = config_rooted_at(dir.path());

        new_site(&config, false).unwrap();

        let ignore = fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert!(ignore.contains("dist"));
    }

    #[test]
    fn test_is_dir_empty() {
        let dir = TempDir::new().unwrap();
        assert!(is_dir_empty(dir.path()).unwrap());
        assert!(is_dir_empty(&dir.path().join("missing")).unwrap());

        fs::write(dir.path().join("file"), "x").unwrap();
        assert!(!is_dir_empty(dir.path()).unwrap());
    }
}
