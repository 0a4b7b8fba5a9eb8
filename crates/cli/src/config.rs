//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BEGETO_MEASUREMENTS_PATH` - Where the measurement draft JSON is kept
//!   (default: `measurements.json` in the working directory)
//! - `BEGETO_CATALOG` - Path to a catalog JSON file; when unset, the
//!   built-in demo catalog is used

use std::path::PathBuf;

use begeto_session::catalog::{CatalogError, CatalogStore, fixtures};

/// Default measurement draft location.
const DEFAULT_MEASUREMENTS_PATH: &str = "measurements.json";

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Where the measurement draft is persisted.
    pub measurements_path: PathBuf,
    /// Optional catalog file overriding the built-in demo catalog.
    pub catalog_path: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from the environment.
    ///
    /// Every variable has a default, so loading never fails.
    #[must_use]
    pub fn load() -> Self {
        // Load .env if present; ignore a missing file
        dotenvy::dotenv().ok();

        let measurements_path = std::env::var("BEGETO_MEASUREMENTS_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_MEASUREMENTS_PATH), PathBuf::from);
        let catalog_path = std::env::var("BEGETO_CATALOG").ok().map(PathBuf::from);

        Self {
            measurements_path,
            catalog_path,
        }
    }

    /// Open the configured catalog: the file from `BEGETO_CATALOG` when set,
    /// the built-in demo catalog otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured catalog file cannot be loaded.
    pub fn open_catalog(&self) -> Result<CatalogStore, CatalogError> {
        self.catalog_path
            .as_deref()
            .map_or_else(|| Ok(fixtures::demo_catalog()), CatalogStore::load)
    }
}
