//! Image metadata resolution for frontmatter image references.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, Result};

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are at least those of `min`.
    pub fn covers(&self, min: ImageSize) -> bool {
        self.width >= min.width && self.height >= min.height
    }
}

/// Resolves frontmatter image references to their dimensions.
///
/// Implementations return `Ok(None)` when `src` is not an image reference
/// they can resolve; the field then falls back to a plain string.
pub trait ImageResolver: Send + Sync {
    /// Resolve `src` as written in the frontmatter of `document`.
    fn resolve(&self, document: &Path, src: &str) -> Result<Option<ResolvedImage>>;
}

/// An image reference resolved against the file system or a host registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    /// Where the image was found.
    pub path: PathBuf,

    /// Pixel dimensions.
    pub size: ImageSize,
}

/// Whether `src` can only be a URL or a public-root path, never a local
/// image relative to the document.
pub fn is_external(src: &str) -> bool {
    src.contains("://") || src.starts_with("data:") || src.starts_with('/')
}

/// Reads image dimensions from files next to the referencing document.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageResolver;

impl ImageResolver for FsImageResolver {
    fn resolve(&self, document: &Path, src: &str) -> Result<Option<ResolvedImage>> {
        if is_external(src) {
            return Ok(None);
        }

        let base = document.parent().unwrap_or(Path::new(""));
        let path = base.join(src);
        if !path.is_file() {
            debug!(path = %path.display(), "image reference not found, treating as string");
            return Ok(None);
        }

        match imagesize::size(&path) {
            Ok(size) => {
                let (width, height) = (to_u32(size.width, &path)?, to_u32(size.height, &path)?);
                Ok(Some(ResolvedImage {
                    path,
                    size: ImageSize::new(width, height),
                }))
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "unreadable image, treating as string");
                Ok(None)
            }
        }
    }
}

fn to_u32(value: usize, path: &Path) -> Result<u32> {
    u32::try_from(value).map_err(|_| CoreError::image(path, "image dimension out of range"))
}

/// In-memory image registry keyed by the `src` written in frontmatter.
#[derive(Debug, Clone, Default)]
pub struct StaticImageResolver {
    images: HashMap<String, ImageSize>,
}

impl StaticImageResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image under `src`.
    #[must_use]
    pub fn with_image(mut self, src: impl Into<String>, size: ImageSize) -> Self {
        self.images.insert(src.into(), size);
        self
    }
}

impl ImageResolver for StaticImageResolver {
    fn resolve(&self, _document: &Path, src: &str) -> Result<Option<ResolvedImage>> {
        Ok(self.images.get(src).map(|&size| ResolvedImage {
            path: PathBuf::from(src),
            size,
        }))
    }
}
