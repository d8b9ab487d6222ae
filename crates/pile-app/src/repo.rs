// Rust guideline compliant 2026-10-19

//! Pile directory discovery and path management utilities.

use crate::error::{AppError, Result};
use pile_core::validation::validate_steam_id;
use pile_core::{Config, Storage, UserDirectory};
use std::path::{Path, PathBuf};

/// Name of the data directory under the root.
const PILE_DIR: &str = ".pile";

/// Path metadata for a Pile data directory.
#[derive(Debug, Clone)]
pub struct RepoContext {
    root: PathBuf,
    pile_dir: PathBuf,
    piles_dir: PathBuf,
    users_path: PathBuf,
    config_path: PathBuf,
}

impl RepoContext {
    fn at(root: PathBuf) -> Self {
        let pile_dir = root.join(PILE_DIR);
        Self {
            root,
            piles_dir: pile_dir.join("piles"),
            users_path: pile_dir.join("users.jsonl"),
            config_path: pile_dir.join("config.toml"),
            pile_dir,
        }
    }

    fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
        Ok(match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        })
    }

    /// Discovers a Pile data directory starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `root` - Optional root to pin discovery (defaults to the current directory)
    ///
    /// # Returns
    ///
    /// A `RepoContext` with resolved paths.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The root cannot be resolved
    /// - The `.pile` directory is missing
    pub fn discover(root: Option<&Path>) -> Result<Self> {
        let context = Self::at(Self::resolve_root(root)?);
        if !context.pile_dir.exists() {
            return Err(AppError::RepoNotInitialized {
                path: context.pile_dir.clone(),
            });
        }
        Ok(context)
    }

    /// Creates the `.pile` layout under a root, keeping anything already there.
    ///
    /// # Returns
    ///
    /// The context and whether a default config file was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories or config file cannot be created.
    pub fn init(root: Option<&Path>) -> Result<(Self, bool)> {
        let context = Self::at(Self::resolve_root(root)?);
        std::fs::create_dir_all(&context.piles_dir)?;

        if !context.users_path.exists() {
            std::fs::File::create(&context.users_path)?;
        }

        let created_config = !context.config_path.exists();
        if created_config {
            Config::default().save(&context.pile_dir)?;
        }

        Ok((context, created_config))
    }

    /// Returns the root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.pile` directory path.
    #[must_use]
    pub fn pile_dir(&self) -> &Path {
        self.pile_dir.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Returns the user directory JSONL path.
    #[must_use]
    pub fn users_path(&self) -> &Path {
        self.users_path.as_path()
    }

    /// Opens storage for one user's pile.
    ///
    /// The Steam ID is validated before it is used to build a path.
    ///
    /// # Errors
    ///
    /// Returns an error if the Steam ID is malformed.
    pub fn open_storage(&self, steam_id: &str) -> Result<Storage> {
        let steam_id = validate_steam_id(steam_id)?;
        Ok(Storage::new(
            self.piles_dir.join(format!("{}.jsonl", steam_id)),
        )?)
    }

    /// Opens the user directory.
    #[must_use]
    pub fn users(&self) -> UserDirectory {
        UserDirectory::new(self.users_path.clone())
    }

    /// Loads configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.pile_dir())?)
    }
}
