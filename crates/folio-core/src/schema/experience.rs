//! Work experience schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::{Schema, SchemaContext};
use crate::{
    content::Collection,
    error::Result,
    field::{Nullable, date, nullable_date, present},
    frontmatter::deserialize_fields,
};

/// A validated work experience entry.
///
/// A missing or `null` end date marks the current position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    #[serde(deserialize_with = "date")]
    pub start_date: DateTime<Utc>,
    #[serde(
        default,
        deserialize_with = "nullable_date",
        skip_serializing_if = "Nullable::is_absent"
    )]
    pub end_date: Nullable<DateTime<Utc>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub company_url: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
}

impl ExperienceEntry {
    /// Whether this is an ongoing position.
    pub fn is_current(&self) -> bool {
        self.end_date.value().is_none()
    }

    /// Whether the entry is flagged as a draft.
    pub fn is_draft(&self) -> bool {
        self.draft == Some(true)
    }

    /// End date used for ordering: the end date, or `now` for ongoing positions.
    pub fn effective_end_date(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.end_date.value().copied().unwrap_or(now)
    }
}

impl AsRef<ExperienceEntry> for ExperienceEntry {
    fn as_ref(&self) -> &ExperienceEntry {
        self
    }
}

impl Schema for ExperienceEntry {
    const COLLECTION: Collection = Collection::Experience;

    fn validate(data: &Value, cx: &SchemaContext<'_>) -> Result<Self> {
        deserialize_fields(data, cx.path)
    }
}
