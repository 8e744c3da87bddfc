//! Config module.
//!
//! This module contains the representation of the user configuration
//! file. The configuration is optional: every setting has a default
//! or can be given from the command line.

use anyhow::{anyhow, Context, Result};
use dirs::{config_dir, home_dir};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use shellexpand_utils::{canonicalize, expand};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    backend::{MemoryBackend, Snapshot},
    rule::RuleFmt,
};

/// Default file rules are exported to.
pub const DEFAULT_EXPORT_FILE: &str = "rules.txt";

/// Represents the user config file.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TomlConfig {
    /// Path to the snapshot of the mail system stores.
    pub snapshot: Option<PathBuf>,
    /// Store used when no store name is given.
    pub default_store: Option<String>,
    pub export: Option<ExportConfig>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ExportConfig {
    pub file: Option<PathBuf>,
    pub format: Option<RuleFmt>,
}

impl TomlConfig {
    /// Read and parse the TOML configuration at the given path.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("reading config at {path:?}");

        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file at {path:?}"))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("cannot parse config file at {path:?}"))?;

        trace!("{config:#?}");
        Ok(config)
    }

    /// Read and parse the TOML configuration at the optional given
    /// path.
    ///
    /// If no path is given, the first valid default path is used. A
    /// missing default configuration falls back to defaults.
    pub fn from_opt_path(path: Option<&Path>) -> Result<Self> {
        match path.map(Path::to_owned).or_else(Self::first_valid_default_path) {
            Some(path) => Self::from_path(&path),
            None => {
                debug!("cannot find config file from default paths, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Return the default configuration paths.
    ///
    /// Tries paths in this order:
    ///
    /// - `"$XDG_CONFIG_HOME/rules-export/config.toml"` (or its
    ///   equivalent on other OSes)
    /// - `"$HOME/.config/rules-export/config.toml"`
    /// - `"$HOME/.rules-exportrc"`
    pub fn default_paths() -> Vec<PathBuf> {
        let name = env!("CARGO_PKG_NAME");
        let mut paths = Vec::new();

        if let Some(dir) = config_dir() {
            paths.push(dir.join(name).join("config.toml"));
        }

        if let Some(dir) = home_dir() {
            paths.push(dir.join(".config").join(name).join("config.toml"));
            paths.push(dir.join(format!(".{name}rc")));
        }

        paths
    }

    pub fn first_valid_default_path() -> Option<PathBuf> {
        Self::default_paths().into_iter().find(|path| path.exists())
    }

    /// Open the backend the stores and rules are read from.
    pub fn open_backend(&self) -> Result<MemoryBackend> {
        let path = self.snapshot.as_ref().ok_or_else(|| {
            anyhow!("cannot find store snapshot, use --snapshot or set `snapshot` in your config")
        })?;
        let path = path_parser(&path.to_string_lossy()).map_err(|err| anyhow!(err))?;

        Ok(Snapshot::from_path(&path)?.into())
    }

    /// Find the store name to use, giving priority to the given one.
    pub fn store_name(&self, name: Option<String>) -> Result<String> {
        name.or_else(|| self.default_store.clone())
            .ok_or_else(|| anyhow!("cannot find store name, give one or set `default-store`"))
    }

    pub fn export_file(&self) -> PathBuf {
        self.export
            .as_ref()
            .and_then(|export| export.file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE))
    }

    pub fn export_format(&self) -> RuleFmt {
        self.export
            .as_ref()
            .and_then(|export| export.format)
            .unwrap_or_default()
    }
}

/// Parse a configuration file path as [`PathBuf`].
///
/// The path is shell-expanded then canonicalized (if applicable).
pub fn path_parser(path: &str) -> Result<PathBuf, String> {
    expand::try_path(path)
        .map(canonicalize::path)
        .map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use tempfile::NamedTempFile;

    use super::*;

    fn make_config(config: &str) -> Result<TomlConfig> {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", config).unwrap();
        TomlConfig::from_path(file.path())
    }

    #[test]
    fn empty_config() {
        let config = make_config("").unwrap();

        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.export_file(), PathBuf::from("rules.txt"));
        assert_eq!(config.export_format(), RuleFmt::Text);
    }

    #[test]
    fn full_config() {
        let config = make_config(
            "snapshot = \"/tmp/stores.toml\"
            default-store = \"Work\"

            [export]
            file = \"filters.csv\"
            format = \"csv\"",
        )
        .unwrap();

        assert_eq!(config.snapshot, Some(PathBuf::from("/tmp/stores.toml")));
        assert_eq!(config.store_name(None).unwrap(), "Work");
        assert_eq!(config.store_name(Some("Home".into())).unwrap(), "Home");
        assert_eq!(config.export_file(), PathBuf::from("filters.csv"));
        assert_eq!(config.export_format(), RuleFmt::Csv);
    }

    #[test]
    fn unknown_field() {
        let err = make_config("mailbox = \"Work\"").unwrap_err();

        assert!(format!("{err:#}").contains("unknown field `mailbox`"));
    }

    #[test]
    fn missing_store_name() {
        let err = TomlConfig::default().store_name(None).unwrap_err();

        assert_eq!(
            err.to_string(),
            "cannot find store name, give one or set `default-store`"
        );
    }

    #[test]
    fn missing_snapshot() {
        let err = TomlConfig::default().open_backend().unwrap_err();

        assert!(err.to_string().starts_with("cannot find store snapshot"));
    }
}
