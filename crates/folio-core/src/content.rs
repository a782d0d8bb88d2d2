//! Content collections and loaded entries.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A named group of documents sharing one schema and one source directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Blog posts.
    Blog,
    /// Work experience entries.
    Experience,
    /// Portfolio projects.
    Projects,
}

impl Collection {
    /// All collections, in display order.
    pub const ALL: [Collection; 3] = [Self::Blog, Self::Experience, Self::Projects];

    /// File extension matched by collection discovery (`**/*.md`).
    pub const EXTENSION: &'static str = "md";

    /// Collection name as used in configuration and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Experience => "experience",
            Self::Projects => "projects",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Collection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blog" => Ok(Self::Blog),
            "experience" => Ok(Self::Experience),
            "projects" | "project" => Ok(Self::Projects),
            other => Err(CoreError::config(format!("unknown collection: {other}"))),
        }
    }
}

/// A validated document of a collection.
#[derive(Debug, Clone, Serialize)]
pub struct Entry<T> {
    /// Identifier derived from the path relative to the collection directory.
    pub id: String,

    /// Collection this entry belongs to.
    pub collection: Collection,

    /// Source file path.
    #[serde(skip)]
    pub path: PathBuf,

    /// Validated frontmatter.
    pub data: T,

    /// Document body without frontmatter.
    #[serde(skip)]
    pub body: String,
}

impl<T> AsRef<T> for Entry<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

/// Derive an entry id from a path relative to its collection directory.
///
/// - `hello-world.md` → `hello-world`
/// - `2024/Hello World.md` → `2024/hello-world`
/// - `acme/index.md` → `acme`
pub fn entry_id(relative: &Path) -> String {
    let without_ext = relative.with_extension("");
    let mut segments: Vec<String> = without_ext
        .components()
        .filter_map(|c| match c {
            std::path::Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if segments.len() > 1 && segments.last().is_some_and(|s| s == "index") {
        segments.pop();
    }

    segments
        .iter()
        .map(|s| s.trim().to_lowercase().replace(char::is_whitespace, "-"))
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_from_str() {
        assert_eq!("blog".parse::<Collection>().unwrap(), Collection::Blog);
        assert_eq!(
            "Experience".parse::<Collection>().unwrap(),
            Collection::Experience
        );
        assert_eq!(
            "project".parse::<Collection>().unwrap(),
            Collection::Projects
        );
        assert!("pages".parse::<Collection>().is_err());
    }

    #[test]
    fn test_collection_name_roundtrip() {
        for collection in Collection::ALL {
            assert_eq!(collection.name().parse::<Collection>().unwrap(), collection);
            assert_eq!(collection.to_string(), collection.name());
        }
    }

    #[test]
    fn test_entry_id_simple() {
        assert_eq!(entry_id(Path::new("hello-world.md")), "hello-world");
    }

    #[test]
    fn test_entry_id_nested_and_lowercased() {
        assert_eq!(
            entry_id(Path::new("2024/Hello World.md")),
            "2024/hello-world"
        );
    }

    #[test]
    fn test_entry_id_index_file() {
        assert_eq!(entry_id(Path::new("acme/index.md")), "acme");
        // A top-level index keeps its name.
        assert_eq!(entry_id(Path::new("index.md")), "index");
    }

    #[test]
    fn test_entry_as_ref() {
        let entry = Entry {
            id: "a".to_string(),
            collection: Collection::Blog,
            path: PathBuf::from("a.md"),
            data: 42u32,
            body: String::new(),
        };
        assert_eq!(*entry.as_ref(), 42);
    }
}
