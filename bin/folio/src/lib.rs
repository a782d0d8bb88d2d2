//! Folio CLI Library
//!
//! Command implementations for the `folio` binary, exposed as a library so
//! they can be driven from tests.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (check, list)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use folio::cmd;
//!
//! // Validate every content collection
//! cmd::check::run(Path::new("folio.toml"), false).unwrap();
//! ```

pub mod cmd;

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
// Re-export core types for convenience
pub use folio_core::{Collection, Config};
pub use folio_loader::{CollectionLoader, SiteContent};

/// Load configuration from `path`, honouring `FOLIO__*` overrides.
///
/// A relative `content.root` is resolved against the directory holding the
/// configuration file.
pub fn load_config(path: &Path) -> Result<Config> {
    let mut config = Config::load_with_env(path).wrap_err("Failed to load configuration")?;

    if config.content.root.is_relative()
        && let Some(base) = path.parent()
    {
        config.content.root = base.join(&config.content.root);
    }

    tracing::debug!(?config, "Loaded configuration");
    Ok(config)
}

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
