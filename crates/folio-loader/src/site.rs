//! All content collections of a site.

use chrono::{DateTime, Utc};
use folio_core::{
    BlogPost, Collection, Entry, ExperienceEntry, ProjectEntry, sorted_experience,
};
use tracing::info;

use crate::collector::{CollectionLoader, LoadOutcome, LoaderError};

/// Validated entries of every collection, with the failures met on the way.
#[derive(Debug, Default)]
pub struct SiteContent {
    /// Blog posts, in discovery order.
    pub blog: Vec<Entry<BlogPost>>,

    /// Experience entries, in discovery order.
    pub experience: Vec<Entry<ExperienceEntry>>,

    /// Projects, in discovery order.
    pub projects: Vec<Entry<ProjectEntry>>,

    /// Collections whose base directory does not exist.
    pub missing: Vec<Collection>,

    /// Per-document failures across all collections.
    pub errors: Vec<LoaderError>,
}

impl SiteContent {
    /// Load every collection.
    pub fn load(loader: &CollectionLoader) -> Self {
        let mut content = Self::default();

        let blog = loader.load::<BlogPost>();
        content.blog = content.absorb(blog);
        let experience = loader.load::<ExperienceEntry>();
        content.experience = content.absorb(experience);
        let projects = loader.load::<ProjectEntry>();
        content.projects = content.absorb(projects);

        info!(
            blog = content.blog.len(),
            experience = content.experience.len(),
            projects = content.projects.len(),
            errors = content.errors.len(),
            "site content loaded"
        );

        content
    }

    fn absorb<T>(&mut self, outcome: LoadOutcome<T>) -> Vec<Entry<T>> {
        if !outcome.dir_exists {
            self.missing.push(outcome.collection);
        }
        self.errors.extend(outcome.errors);
        outcome.entries
    }

    /// Whether every document loaded.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of valid entries.
    pub fn len(&self) -> usize {
        self.blog.len() + self.experience.len() + self.projects.len()
    }

    /// Whether no collection has any entry.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Published experience entries, most recent first.
    pub fn experience_timeline(&self, now: DateTime<Utc>) -> Vec<Entry<ExperienceEntry>> {
        sorted_experience(&self.experience, now)
    }
}
