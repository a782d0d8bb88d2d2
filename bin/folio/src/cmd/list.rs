//! List command - print a validated collection as JSON

use std::path::Path;

use chrono::{DateTime, Utc};
use color_eyre::eyre::{Result, WrapErr};
use folio_core::{
    BlogPost, Collection, Entry, ExperienceEntry, ProjectEntry, Schema, sorted_experience,
};
use folio_loader::CollectionLoader;

/// Run the list command.
///
/// Experience entries are printed in timeline order, which never includes
/// drafts. Other collections keep discovery order and include drafts only
/// when asked to.
pub fn run(config_path: &Path, collection: Collection, drafts: bool) -> Result<()> {
    tracing::info!(?config_path, %collection, drafts, "Listing collection");

    let config = crate::load_config(config_path)?;
    let loader = CollectionLoader::new(config);

    let json = render(&loader, collection, drafts, Utc::now())?;
    println!("{json}");

    Ok(())
}

/// Render `collection` as pretty JSON.
pub fn render(
    loader: &CollectionLoader,
    collection: Collection,
    drafts: bool,
    now: DateTime<Utc>,
) -> Result<String> {
    let json = match collection {
        Collection::Blog => {
            let entries = load_valid::<BlogPost>(loader)?;
            let entries: Vec<_> = entries
                .into_iter()
                .filter(|e| drafts || !e.data.is_draft())
                .collect();
            serde_json::to_string_pretty(&entries)?
        }
        Collection::Experience => {
            if drafts {
                tracing::warn!("--drafts has no effect on the experience timeline");
            }
            let entries = load_valid::<ExperienceEntry>(loader)?;
            serde_json::to_string_pretty(&sorted_experience(&entries, now))?
        }
        Collection::Projects => {
            let entries = load_valid::<ProjectEntry>(loader)?;
            let entries: Vec<_> = entries
                .into_iter()
                .filter(|e| drafts || !e.data.is_draft())
                .collect();
            serde_json::to_string_pretty(&entries)?
        }
    };

    Ok(json)
}

/// Load a collection, failing if any document is invalid.
fn load_valid<T: Schema + Send>(loader: &CollectionLoader) -> Result<Vec<Entry<T>>> {
    let outcome = loader.load::<T>();
    for err in &outcome.errors {
        eprintln!("  ✗ {err}");
    }

    let collection = outcome.collection;
    outcome
        .into_result()
        .wrap_err_with(|| format!("Failed to load collection `{collection}`"))
}
