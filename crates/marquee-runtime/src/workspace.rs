use std::path::{Path, PathBuf};

use marquee_store::Database;
use marquee_types::Catalog;

use crate::catalog::load_catalog;
use crate::config::{Config, resolve_workspace_path};
use crate::session::Planner;
use crate::{Error, Result};

/// Handle on the marquee data directory (config + database).
pub struct Workspace {
    data_dir: PathBuf,
}

impl Workspace {
    pub fn resolve(explicit_path: Option<&str>) -> Result<Self> {
        Ok(Self {
            data_dir: resolve_workspace_path(explicit_path)?,
        })
    }

    pub fn at(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("marquee.db")
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from(&self.config_path())
    }

    /// Point the workspace at a catalog and set up storage.
    ///
    /// Loads the catalog first so a bad path fails before anything is
    /// written. The stored path is canonicalized when possible so the
    /// config keeps working after the shell's working directory changes.
    pub fn init(&self, catalog_path: &Path, share_header: Option<String>) -> Result<Catalog> {
        let catalog = load_catalog(catalog_path)?;

        std::fs::create_dir_all(&self.data_dir)?;

        let stored_path = std::fs::canonicalize(catalog_path)
            .unwrap_or_else(|_| catalog_path.to_path_buf());
        let config = Config {
            catalog_path: Some(stored_path),
            share_header,
        };
        config.save_to(&self.config_path())?;

        // Create the database up front so first use is not a surprise write.
        Database::open(&self.db_path())?;

        Ok(catalog)
    }

    /// Open a planning session against the configured catalog.
    pub fn open_planner(&self) -> Result<Planner> {
        let config = self.load_config()?;
        let Some(catalog_path) = config.catalog_path else {
            return Err(Error::NotInitialized(
                "no catalog configured; run 'marquee init --catalog <path>' first".to_string(),
            ));
        };

        let catalog = load_catalog(&catalog_path)?;
        let db = Database::open(&self.db_path())?;
        Planner::open(catalog, db)
    }
}
