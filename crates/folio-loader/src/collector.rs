//! Content collection loading.
//!
//! Walks a collection directory for `**/*.md` documents and validates each one
//! against the collection schema.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use folio_core::{
    Collection, Config, CoreError, Entry, FsImageResolver, ImageResolver, Schema, SchemaContext,
    content::entry_id,
};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Collection loading errors.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// A document could not be read.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A document was rejected by its schema.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// One or more documents of a collection failed to load.
    #[error("{} document(s) in collection `{collection}` failed to load", .errors.len())]
    Collection {
        collection: Collection,
        errors: Vec<LoaderError>,
    },
}

impl LoaderError {
    /// Whether this error reports invalid content rather than a read failure.
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Core(e) => e.is_validation(),
            Self::Collection { errors, .. } => errors.iter().all(Self::is_validation),
            Self::Io { .. } | Self::Walk { .. } => false,
        }
    }
}

/// Result type for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Entries and per-document failures of one collection.
#[derive(Debug)]
pub struct LoadOutcome<T> {
    /// Collection that was loaded.
    pub collection: Collection,

    /// Base directory that was searched.
    pub dir: PathBuf,

    /// Whether the base directory exists.
    pub dir_exists: bool,

    /// Valid entries, in discovery order.
    pub entries: Vec<Entry<T>>,

    /// One error per document that could not be loaded.
    pub errors: Vec<LoaderError>,
}

impl<T> LoadOutcome<T> {
    /// Whether every discovered document loaded.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Entries if every document loaded, otherwise all failures.
    pub fn into_result(self) -> Result<Vec<Entry<T>>> {
        if self.errors.is_empty() {
            Ok(self.entries)
        } else {
            Err(LoaderError::Collection {
                collection: self.collection,
                errors: self.errors,
            })
        }
    }
}

/// Loads content collections from the directories named in the configuration.
pub struct CollectionLoader {
    config: Config,
    images: Box<dyn ImageResolver>,
}

impl std::fmt::Debug for CollectionLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionLoader")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CollectionLoader {
    /// Create a loader that resolves images from the file system.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            images: Box::new(FsImageResolver),
        }
    }

    /// Replace the image resolver.
    #[must_use]
    pub fn with_images(mut self, images: impl ImageResolver + 'static) -> Self {
        self.images = Box::new(images);
        self
    }

    /// Site configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load and validate every document of `T`'s collection.
    pub fn load<T: Schema + Send>(&self) -> LoadOutcome<T> {
        let collection = T::COLLECTION;
        let dir = self.config.collection_dir(collection);
        info!(%collection, dir = %dir.display(), "loading collection");

        let dir_exists = dir.is_dir();
        if !dir_exists {
            warn!(%collection, dir = %dir.display(), "collection directory does not exist");
        }

        let files = match find_documents(&dir) {
            Ok(files) => files,
            Err(e) => {
                return LoadOutcome {
                    collection,
                    dir,
                    dir_exists,
                    entries: Vec::new(),
                    errors: vec![e],
                };
            }
        };
        debug!(%collection, count = files.len(), "found documents");

        let base = SchemaContext::new(&dir, &self.config.site.author, self.images.as_ref());

        // Indexed parallel iteration keeps discovery order.
        let results: Vec<Result<Entry<T>>> = files
            .par_iter()
            .map(|path| Self::load_file(base.for_path(path), &dir))
            .collect();

        let mut entries = Vec::with_capacity(results.len());
        let mut errors = Vec::new();
        for result in results {
            match result {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    if e.is_validation() {
                        warn!(%collection, error = %e, "invalid document");
                    } else {
                        tracing::error!(%collection, error = %e, "failed to read document");
                    }
                    errors.push(e);
                }
            }
        }

        warn_duplicate_ids(collection, &entries);

        info!(
            %collection,
            entries = entries.len(),
            errors = errors.len(),
            "collection loaded"
        );

        LoadOutcome {
            collection,
            dir,
            dir_exists,
            entries,
            errors,
        }
    }

    /// Read and validate a single document.
    fn load_file<T: Schema>(cx: SchemaContext<'_>, dir: &Path) -> Result<Entry<T>> {
        let path = cx.path;
        debug!(path = %path.display(), "parsing file");

        let content = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (data, body) = T::parse(&content, &cx)?;

        let relative = path.strip_prefix(dir).unwrap_or(path);
        Ok(Entry {
            id: entry_id(relative),
            collection: T::COLLECTION,
            path: path.to_path_buf(),
            data,
            body,
        })
    }
}

/// Whether a walk entry is hidden (dot-prefixed name).
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Find `**/*.md` under `dir`, skipping hidden files and directories.
///
/// Symbolic links are not followed; a linked document is skipped with a
/// debug message.
///
/// Children are visited in file name order, so the result is deterministic.
/// A missing directory yields no documents.
pub fn find_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(|source| LoaderError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;

        let is_document = entry
            .path()
            .extension()
            .is_some_and(|ext| ext == Collection::EXTENSION);

        if entry.path_is_symlink() {
            // Links are not followed.
            if is_document {
                debug!(path = %entry.path().display(), "skipping symlinked document");
            }
            continue;
        }

        if is_document && entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Two documents mapping to one id (e.g. `a.md` and `a/index.md`) are both
/// kept, but only one can be addressed by id.
fn warn_duplicate_ids<T>(collection: Collection, entries: &[Entry<T>]) {
    let mut seen: HashMap<&str, &Path> = HashMap::new();
    for entry in entries {
        if let Some(first) = seen.insert(entry.id.as_str(), entry.path.as_path()) {
            warn!(
                %collection,
                id = %entry.id,
                first = %first.display(),
                second = %entry.path.display(),
                "duplicate entry id"
            );
        }
    }
}
