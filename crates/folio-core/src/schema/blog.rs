//! Blog post schema.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::{Schema, SchemaContext};
use crate::{
    content::Collection,
    error::{CoreError, Result},
    field::{Nullable, date, non_null, nullable_date, present},
    frontmatter::deserialize_fields,
    image::ImageSize,
};

/// Smallest accepted OpenGraph image.
pub const OG_IMAGE_MIN: ImageSize = ImageSize::new(1200, 630);

/// Error message for an OpenGraph image below [`OG_IMAGE_MIN`].
pub const OG_IMAGE_TOO_SMALL: &str = "OpenGraph image must be at least 1200 X 630 pixels!";

/// Tag given to posts that declare none.
pub const DEFAULT_BLOG_TAG: &str = "others";

fn default_tags() -> Vec<String> {
    vec![DEFAULT_BLOG_TAG.to_string()]
}

/// A validated blog post.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub author: String,
    pub pub_datetime: DateTime<Utc>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub mod_datetime: Nullable<DateTime<Utc>>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<OgImage>,
    pub description: String,
    #[serde(rename = "canonicalURL", skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_post: Option<EditPost>,
}

/// Per-post settings for the "edit this page" link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditPost {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub append_file_path: Option<bool>,
}

/// OpenGraph image: a resolved local image or a plain URL string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OgImage {
    /// An image reference resolved by the host, at least [`OG_IMAGE_MIN`].
    Image(ImageRef),
    /// Anything the resolver did not recognise as an image.
    Url(String),
}

impl OgImage {
    /// The value as written in the frontmatter.
    pub fn src(&self) -> &str {
        match self {
            Self::Image(image) => &image.src,
            Self::Url(url) => url,
        }
    }
}

/// A resolved image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(skip)]
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Frontmatter fields before host-dependent defaults and image resolution.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlogPostFields {
    #[serde(default, deserialize_with = "present")]
    author: Option<String>,
    #[serde(deserialize_with = "date")]
    pub_datetime: DateTime<Utc>,
    #[serde(default, deserialize_with = "nullable_date")]
    mod_datetime: Nullable<DateTime<Utc>>,
    title: String,
    #[serde(default, deserialize_with = "present")]
    featured: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    draft: Option<bool>,
    #[serde(default = "default_tags", deserialize_with = "non_null")]
    tags: Vec<String>,
    #[serde(default, deserialize_with = "present")]
    og_image: Option<String>,
    description: String,
    #[serde(default, rename = "canonicalURL", deserialize_with = "present")]
    canonical_url: Option<String>,
    #[serde(default, deserialize_with = "present")]
    edit_post: Option<EditPost>,
}

impl Schema for BlogPost {
    const COLLECTION: Collection = Collection::Blog;

    fn validate(data: &Value, cx: &SchemaContext<'_>) -> Result<Self> {
        let fields: BlogPostFields = deserialize_fields(data, cx.path)?;

        let og_image = fields
            .og_image
            .map(|src| resolve_og_image(src, cx))
            .transpose()?;

        Ok(Self {
            author: fields
                .author
                .unwrap_or_else(|| cx.default_author.to_string()),
            pub_datetime: fields.pub_datetime,
            mod_datetime: fields.mod_datetime,
            title: fields.title,
            featured: fields.featured,
            draft: fields.draft,
            tags: fields.tags,
            og_image,
            description: fields.description,
            canonical_url: fields.canonical_url,
            edit_post: fields.edit_post,
        })
    }
}

/// Try `src` as an image reference first, then fall back to a plain string.
fn resolve_og_image(src: String, cx: &SchemaContext<'_>) -> Result<OgImage> {
    let Some(image) = cx.images.resolve(cx.path, &src)? else {
        return Ok(OgImage::Url(src));
    };

    if !image.size.covers(OG_IMAGE_MIN) {
        tracing::debug!(
            path = %cx.path.display(),
            width = image.size.width,
            height = image.size.height,
            "OpenGraph image below minimum size"
        );
        return Err(CoreError::schema(cx.path, "ogImage", OG_IMAGE_TOO_SMALL));
    }

    Ok(OgImage::Image(ImageRef {
        src,
        path: image.path,
        width: image.size.width,
        height: image.size.height,
    }))
}

impl BlogPost {
    /// Whether the post is flagged as a draft.
    pub fn is_draft(&self) -> bool {
        self.draft == Some(true)
    }
}
