//! Portfolio project schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::{Schema, SchemaContext};
use crate::{
    content::Collection,
    error::Result,
    field::{date, non_null, present},
    frontmatter::deserialize_fields,
};

/// A validated portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub title: String,
    #[serde(deserialize_with = "date")]
    pub date: DateTime<Utc>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    #[serde(default, deserialize_with = "non_null")]
    pub tags: Vec<String>,
}

impl ProjectEntry {
    /// Whether the project is flagged as a draft.
    pub fn is_draft(&self) -> bool {
        self.draft == Some(true)
    }
}

impl Schema for ProjectEntry {
    const COLLECTION: Collection = Collection::Projects;

    fn validate(data: &Value, cx: &SchemaContext<'_>) -> Result<Self> {
        deserialize_fields(data, cx.path)
    }
}
