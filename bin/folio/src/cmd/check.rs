//! Check command - validate configuration and content

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use folio_core::{BlogPost, Entry, ExperienceEntry, OgImage, ProjectEntry, Schema, image};
use folio_loader::CollectionLoader;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub entries: usize,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates configuration and every document of every collection.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and content");

    println!("Checking configuration...");
    let config = match crate::load_config(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            c
        }
        Err(e) => {
            println!("  ✗ Configuration invalid: {e:#}");
            return Err(e);
        }
    };

    let loader = CollectionLoader::new(config);
    println!(
        "\nChecking content collections in {}...",
        loader.config().content.root.display()
    );
    let result = check_collections(&loader);

    // Print summary
    println!();
    println!("Summary:");
    println!("  Entries:  {}", result.entries);
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    // Determine exit status
    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Validate all three collections.
pub fn check_collections(loader: &CollectionLoader) -> ValidationResult {
    let mut result = ValidationResult::default();
    let posts = check_collection::<BlogPost>(loader, &mut result);
    check_og_images(&posts, &mut result);
    check_collection::<ExperienceEntry>(loader, &mut result);
    check_collection::<ProjectEntry>(loader, &mut result);
    result
}

/// Validate one collection, record its failures and return its valid entries.
fn check_collection<T: Schema + Send>(
    loader: &CollectionLoader,
    result: &mut ValidationResult,
) -> Vec<Entry<T>> {
    let outcome = loader.load::<T>();
    let collection = outcome.collection;

    if !outcome.dir_exists {
        result.add_warning(format!(
            "Collection directory missing: {} ({collection})",
            outcome.dir.display()
        ));
        println!("  ⚠ {collection}: directory missing");
        return Vec::new();
    }

    let valid = outcome.entries.len();
    let failed = outcome.errors.len();
    result.entries += valid;

    if failed == 0 {
        println!("  ✓ {collection}: all {valid} documents valid");
    } else {
        println!("  ✗ {collection}: {failed}/{} documents have errors", valid + failed);
    }

    for err in outcome.errors {
        result.add_error(err.to_string());
    }

    outcome.entries
}

/// Warn about local-looking `ogImage` values that did not resolve to an image,
/// since their dimensions went unchecked.
fn check_og_images(posts: &[Entry<BlogPost>], result: &mut ValidationResult) {
    for post in posts {
        let Some(og_image @ OgImage::Url(_)) = &post.data.og_image else {
            continue;
        };
        let src = og_image.src();
        if !image::is_external(src) {
            result.add_warning(format!(
                "{}: ogImage `{src}` is not a readable local image, size not checked",
                post.path.display()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn site(root: &Path) -> std::path::PathBuf {
        let config_path = root.join("folio.toml");
        fs::write(
            &config_path,
            "[site]\ntitle = \"Test\"\nauthor = \"Someone\"\n\n[content]\nroot = \"content\"\n",
        )
        .expect("write config");
        for dir in ["blog", "experience", "projects"] {
            fs::create_dir_all(root.join("content").join(dir)).expect("mkdir");
        }
        config_path
    }

    #[test]
    fn test_check_passes_on_valid_site() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = site(dir.path());
        fs::write(
            dir.path().join("content/experience/acme.md"),
            "---\ncompany: Acme\nrole: Dev\nstartDate: 2020-01-01\n---\n",
        )
        .expect("write");

        run(&config_path, true).expect("check passes");
    }

    #[test]
    fn test_check_fails_on_invalid_document() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = site(dir.path());
        fs::write(
            dir.path().join("content/blog/broken.md"),
            "---\ntitle: No date\ndescription: d\n---\n",
        )
        .expect("write");

        let err = run(&config_path, false).unwrap_err();
        assert!(err.to_string().contains("1 error"));
    }

    #[test]
    fn test_strict_fails_on_missing_collection() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = site(dir.path());
        fs::remove_dir(dir.path().join("content/projects")).expect("rmdir");

        assert!(run(&config_path, false).is_ok());
        let err = run(&config_path, true).unwrap_err();
        assert!(err.to_string().contains("strict"));
    }

    #[test]
    fn test_check_collections_counts_entries() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = site(dir.path());
        fs::write(
            dir.path().join("content/projects/a.md"),
            "---\ntitle: A\ndate: 2024-01-01\n---\n",
        )
        .expect("write");

        let config = crate::load_config(&config_path).expect("config");
        let result = check_collections(&CollectionLoader::new(config));
        assert_eq!(result.entries, 1);
        assert!(!result.has_errors());
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_unresolved_local_og_image_is_a_warning() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = site(dir.path());
        fs::write(
            dir.path().join("content/blog/post.md"),
            "---\ntitle: T\npubDatetime: 2024-01-01\ndescription: d\nogImage: missing.png\n---\n",
        )
        .expect("write");
        fs::write(
            dir.path().join("content/blog/remote.md"),
            "---\ntitle: R\npubDatetime: 2024-01-02\ndescription: d\nogImage: https://cdn.example.com/og.png\n---\n",
        )
        .expect("write");

        let config = crate::load_config(&config_path).expect("config");
        let result = check_collections(&CollectionLoader::new(config));
        assert_eq!(result.entries, 2);
        assert!(!result.has_errors());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("missing.png"));

        assert!(run(&config_path, false).is_ok());
        assert!(run(&config_path, true).is_err());
    }
}
