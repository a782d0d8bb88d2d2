//! Site configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    content::Collection,
    error::{CoreError, Result},
};

/// Main configuration structure for Folio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Content collection locations.
    #[serde(default)]
    pub content: ContentConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Site author name, used when a blog post has no `author`.
    pub author: String,
}

/// Where each content collection lives on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding all collection directories.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Blog collection directory, relative to `root`.
    #[serde(default = "default_blog")]
    pub blog: String,

    /// Experience collection directory, relative to `root`.
    #[serde(default = "default_experience")]
    pub experience: String,

    /// Projects collection directory, relative to `root`.
    #[serde(default = "default_projects")]
    pub projects: String,
}

// Default value functions
fn default_root() -> PathBuf {
    PathBuf::from("src/content")
}

fn default_blog() -> String {
    "blog".to_string()
}

fn default_experience() -> String {
    "experience".to_string()
}

fn default_projects() -> String {
    "projects".to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            blog: default_blog(),
            experience: default_experience(),
            projects: default_projects(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `FOLIO__SECTION__KEY` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.author.trim().is_empty() {
            return Err(CoreError::config("site.author cannot be empty"));
        }

        for collection in Collection::ALL {
            if self.collection_name(collection).trim().is_empty() {
                return Err(CoreError::config(format!(
                    "content.{} cannot be empty",
                    collection.name()
                )));
            }
        }

        Ok(())
    }

    /// Directory name configured for a collection.
    fn collection_name(&self, collection: Collection) -> &str {
        match collection {
            Collection::Blog => &self.content.blog,
            Collection::Experience => &self.content.experience,
            Collection::Projects => &self.content.projects,
        }
    }

    /// Base directory of a collection (`content.root` joined with its directory).
    pub fn collection_dir(&self, collection: Collection) -> PathBuf {
        self.content.root.join(self.collection_name(collection))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
title = "Test Folio"
author = "Jane Doe"

[content]
root = "content"
blog = "posts"
projects = "work"
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.title, "Test Folio");
        assert_eq!(config.site.author, "Jane Doe");
        assert_eq!(config.content.root, PathBuf::from("content"));
        assert_eq!(
            config.collection_dir(Collection::Blog),
            PathBuf::from("content/posts")
        );
        assert_eq!(
            config.collection_dir(Collection::Experience),
            PathBuf::from("content/experience")
        );
        assert_eq!(
            config.collection_dir(Collection::Projects),
            PathBuf::from("content/work")
        );
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        let minimal_config = r#"
[site]
title = "Minimal"
author = "Someone"
"#;
        std::fs::write(&config_path, minimal_config).expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.content.root, PathBuf::from("src/content"));
        assert_eq!(
            config.collection_dir(Collection::Blog),
            PathBuf::from("src/content/blog")
        );
        assert_eq!(config.content.projects, "projects");
    }

    #[test]
    fn test_config_validation_empty_author() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        let config_content = r#"
[site]
title = "Test"
author = "  "
"#;
        std::fs::write(&config_path, config_content).expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("author cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_empty_collection_dir() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        let config_content = r#"
[site]
title = "Test"
author = "Someone"

[content]
experience = ""
"#;
        std::fs::write(&config_path, config_content).expect("write");

        let err = Config::load(&config_path).unwrap_err();
        assert!(err.to_string().contains("content.experience"));
    }

    #[test]
    fn test_config_missing_author_is_rejected() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        std::fs::write(&config_path, "[site]\ntitle = \"Test\"\n").expect("write");

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn test_load_with_env_reads_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        let config = Config::load_with_env(&config_path).expect("load config");
        assert_eq!(config.content.blog, "posts");
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/folio.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
