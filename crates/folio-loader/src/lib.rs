//! Folio Loader Library
//!
//! Discovers the Markdown documents of each content collection and validates
//! their frontmatter against the collection schema.
//!
//! # Modules
//!
//! - [`collector`] - Per-collection discovery and validation
//! - [`site`] - Loading every collection of a site at once

pub mod collector;
pub mod site;

pub use collector::{CollectionLoader, LoadOutcome, LoaderError, Result};
pub use site::SiteContent;
