//! Snapshot module.
//!
//! A snapshot is a TOML dump of the stores of a mail system and of
//! their native rules, as exposed by the mail store. It is the
//! on-disk source of the [`MemoryBackend`].

use std::{fs, path::Path};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::{Error, MemoryBackend, RawRule, Result};

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Snapshot {
    #[serde(default)]
    pub stores: Vec<StoreSnapshot>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StoreSnapshot {
    pub name: String,
    #[serde(default)]
    pub rules: Vec<RawRule>,
}

impl Snapshot {
    /// Read and parse the snapshot at the given path.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("reading snapshot at {path:?}");

        let content = fs::read_to_string(path)
            .map_err(|err| Error::ReadSnapshotError(err, path.to_owned()))?;
        let snapshot: Self = toml::from_str(&content)
            .map_err(|err| Error::ParseSnapshotError(err, path.to_owned()))?;

        trace!("{snapshot:#?}");
        Ok(snapshot)
    }
}

impl From<Snapshot> for MemoryBackend {
    fn from(snapshot: Snapshot) -> Self {
        snapshot
            .stores
            .into_iter()
            .fold(MemoryBackend::default(), |backend, store| {
                backend.with_store(store.name, store.rules)
            })
    }
}
