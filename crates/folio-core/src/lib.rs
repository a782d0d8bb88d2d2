//! Folio Core Library
//!
//! Content schemas, site configuration and error handling for Folio, a typed
//! content layer for a personal blog and portfolio.

pub mod config;
pub mod content;
pub mod error;
pub mod field;
pub mod frontmatter;
pub mod image;
pub mod schema;
pub mod sort;

pub use config::Config;
pub use content::{Collection, Entry};
pub use error::{CoreError, Result};
pub use field::Nullable;
pub use image::{FsImageResolver, ImageResolver, ImageSize, ResolvedImage, StaticImageResolver};
pub use schema::{
    BlogPost, EditPost, ExperienceEntry, OgImage, ProjectEntry, Schema, SchemaContext,
};
pub use sort::sorted_experience;
