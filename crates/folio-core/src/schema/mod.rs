//! Content schemas.
//!
//! Each collection has one record type. A record is produced by validating
//! the untyped frontmatter of a single document; there are no partial
//! records and no mutation after validation.

mod blog;
mod experience;
mod project;

use std::path::Path;

use serde_yaml::Value;

pub use self::{
    blog::{BlogPost, DEFAULT_BLOG_TAG, EditPost, ImageRef, OG_IMAGE_MIN, OG_IMAGE_TOO_SMALL, OgImage},
    experience::ExperienceEntry,
    project::ProjectEntry,
};
use crate::{
    content::Collection,
    error::Result,
    frontmatter::{RawDocument, parse_document},
    image::ImageResolver,
};

/// Host-supplied inputs to validation.
#[derive(Clone, Copy)]
pub struct SchemaContext<'a> {
    /// Path of the document being validated.
    pub path: &'a Path,

    /// Author used when a blog post does not name one.
    pub default_author: &'a str,

    /// Resolver for image references.
    pub images: &'a dyn ImageResolver,
}

impl<'a> SchemaContext<'a> {
    pub fn new(path: &'a Path, default_author: &'a str, images: &'a dyn ImageResolver) -> Self {
        Self {
            path,
            default_author,
            images,
        }
    }

    /// Same context for another document.
    #[must_use]
    pub fn for_path(self, path: &'a Path) -> Self {
        Self { path, ..self }
    }
}

impl std::fmt::Debug for SchemaContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaContext")
            .field("path", &self.path)
            .field("default_author", &self.default_author)
            .finish_non_exhaustive()
    }
}

/// A record type validated from frontmatter.
pub trait Schema: Sized {
    /// Collection whose documents use this schema.
    const COLLECTION: Collection;

    /// Validate untyped frontmatter into a record.
    fn validate(data: &Value, cx: &SchemaContext<'_>) -> Result<Self>;

    /// Split `content` and validate its frontmatter, returning the record and
    /// the document body.
    fn parse(content: &str, cx: &SchemaContext<'_>) -> Result<(Self, String)> {
        let RawDocument { data, body } = parse_document(content, cx.path)?;
        let record = Self::validate(&data, cx)?;
        Ok((record, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{ImageSize, StaticImageResolver};

    #[test]
    fn test_for_path_keeps_host_inputs() {
        let images = StaticImageResolver::new().with_image("og.png", ImageSize::new(1200, 630));
        let base = SchemaContext::new(Path::new("content/blog"), "Site Author", &images);
        let cx = base.for_path(Path::new("content/blog/hello.md"));

        assert_eq!(cx.path, Path::new("content/blog/hello.md"));
        assert_eq!(cx.default_author, "Site Author");
        assert!(cx.images.resolve(cx.path, "og.png").expect("resolve").is_some());

        let (post, body) = BlogPost::parse(
            "---\ntitle: Hi\npubDatetime: 2024-01-14\ndescription: d\n---\nBody",
            &cx,
        )
        .expect("parse");
        assert_eq!(post.author, "Site Author");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_parse_errors_name_the_document() {
        let images = StaticImageResolver::new();
        let cx = SchemaContext::new(Path::new("content/experience"), "A", &images)
            .for_path(Path::new("content/experience/acme.md"));

        let err = ExperienceEntry::parse("---\ncompany: Acme\n---\n", &cx).unwrap_err();
        assert!(err.to_string().contains("content/experience/acme.md"), "{err}");
    }
}
