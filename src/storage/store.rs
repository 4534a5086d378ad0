//! A filesystem backed registry.
//!
//! The [`Store`] pairs a [`Registry`] with the root directory it was loaded
//! from, along with the [`Config`] found there.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    domain::{Config, Registry},
    storage::{Snapshot, SnapshotError},
};

/// A registry loaded from, and written back to, a roster root directory.
#[derive(Debug)]
pub struct Store {
    root: PathBuf,
    config: Config,
    registry: Registry,
}

/// Errors raised while loading a store.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The snapshot file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The snapshot path.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// The snapshot file is not a valid snapshot.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// The snapshot path.
        path: PathBuf,
        /// The underlying error.
        source: serde_yaml::Error,
    },
    /// The snapshot parsed but its records do not fit together.
    #[error("inconsistent snapshot {}: {source}", .path.display())]
    Inconsistent {
        /// The snapshot path.
        path: PathBuf,
        /// The rejected entry.
        source: SnapshotError,
    },
}

/// Errors raised while writing a store.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The registry could not be serialized.
    #[error("failed to serialize registry: {0}")]
    Serialize(#[from] serde_yaml::Error),
    /// The snapshot file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        /// The snapshot path.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
}

impl Store {
    /// Open the roster rooted at `root`.
    ///
    /// Reads `config.toml` (falling back to defaults) and the snapshot it
    /// names. A missing snapshot yields the sample records, or an empty
    /// registry when seeding is disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot exists but cannot be read, parsed or
    /// replayed.
    pub fn open(root: PathBuf) -> Result<Self, LoadError> {
        let config = Self::load_config(&root);
        Self::open_with_config(root, config)
    }

    /// Open the roster rooted at `root` using the given configuration.
    ///
    /// # Errors
    ///
    /// See [`Store::open`].
    pub fn open_with_config(root: PathBuf, config: Config) -> Result<Self, LoadError> {
        let path = root.join(config.data_file());

        let registry = match fs::read_to_string(&path) {
            Ok(yaml) => {
                let snapshot = Snapshot::from_yaml(&yaml).map_err(|source| LoadError::Parse {
                    path: path.clone(),
                    source,
                })?;
                let registry = snapshot
                    .into_registry()
                    .map_err(|source| LoadError::Inconsistent {
                        path: path.clone(),
                        source,
                    })?;
                tracing::debug!("Loaded registry from {}", path.display());
                registry
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No registry at {}, starting fresh", path.display());
                if config.seed {
                    Registry::seeded()
                } else {
                    Registry::new()
                }
            }
            Err(source) => return Err(LoadError::Io { path, source }),
        };

        Ok(Self {
            root,
            config,
            registry,
        })
    }

    /// Read the configuration in `root`.
    ///
    /// A missing file yields the defaults. An invalid file is reported as a
    /// warning and the defaults are used.
    #[must_use]
    pub fn load_config(root: &Path) -> Config {
        let path = root.join(Config::FILE_NAME);
        if !path.exists() {
            return Config::default();
        }
        Config::load(&path).unwrap_or_else(|e| {
            tracing::warn!("{e}; using default configuration");
            Config::default()
        })
    }

    /// The root directory of the roster.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The path of the snapshot file.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.root.join(self.config.data_file())
    }

    /// The configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The loaded registry.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable access to the loaded registry.
    ///
    /// Changes are not written until [`Store::flush`] is called.
    pub const fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Write the registry back to its snapshot file.
    ///
    /// Parent directories are created if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be serialized or the file
    /// cannot be written.
    pub fn flush(&self) -> Result<(), SaveError> {
        let path = self.data_path();
        let yaml = Snapshot::from(&self.registry).to_yaml()?;

        let io_error = |source| SaveError::Io {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(&path, yaml).map_err(io_error)?;

        tracing::debug!("Saved registry to {}", path.display());
        Ok(())
    }
}
