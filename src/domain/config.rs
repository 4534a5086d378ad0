use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for the roster tool.
///
/// Stored as `config.toml` in the roster root. Every field is optional in the
/// file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// File name of the registry snapshot, relative to the roster root.
    data_file: PathBuf,

    /// Whether a root without a snapshot starts from the sample records.
    ///
    /// When `false`, a fresh root starts with an empty registry.
    pub seed: bool,

    /// Password length used when none is given on the command line.
    password_length: usize,

    /// Longest password the generator will produce.
    max_password_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            seed: true,
            password_length: default_password_length(),
            max_password_length: default_max_password_length(),
        }
    }
}

impl Config {
    /// Name of the configuration file within the roster root.
    pub const FILE_NAME: &'static str = "config.toml";

    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The snapshot file name, relative to the roster root.
    #[must_use]
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Default password length.
    #[must_use]
    pub const fn password_length(&self) -> usize {
        self.password_length
    }

    /// Upper bound on generated password length.
    #[must_use]
    pub const fn max_password_length(&self) -> usize {
        self.max_password_length
    }

    /// Sets the default password length.
    pub const fn set_password_length(&mut self, length: usize) {
        self.password_length = length;
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("registry.yaml")
}

const fn default_seed() -> bool {
    true
}

const fn default_password_length() -> usize {
    12
}

const fn default_max_password_length() -> usize {
    crate::password::DEFAULT_MAX_LENGTH
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_data_file")]
        data_file: PathBuf,

        #[serde(default = "default_seed")]
        seed: bool,

        #[serde(default = "default_password_length")]
        password_length: usize,

        #[serde(default = "default_max_password_length")]
        max_password_length: usize,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                data_file,
                seed,
                password_length,
                max_password_length,
            } => Self {
                data_file,
                seed,
                password_length,
                max_password_length,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            data_file: config.data_file,
            seed: config.seed,
            password_length: config.password_length,
            max_password_length: config.max_password_length,
        }
    }
}
