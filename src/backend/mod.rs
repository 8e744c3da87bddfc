//! Backend module.
//!
//! This module exposes the backend trait, which abstracts the mail
//! store rules are read from. A backend enumerates stores (mailboxes
//! or archive files) and hands out the native rules of a store as
//! [`RawRule`]s.

pub mod memory;
pub mod rule;
pub mod snapshot;

use std::{io, path::PathBuf, result};

use thiserror::Error;

use crate::store::{Store, Stores};

pub use self::{memory::MemoryBackend, rule::*, snapshot::Snapshot};

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot find store {0}")]
    StoreNotFound(String),
    #[error("cannot find any store")]
    NoStores,

    #[error("cannot read snapshot at {1}")]
    ReadSnapshotError(#[source] io::Error, PathBuf),
    #[error("cannot parse snapshot at {1}")]
    ParseSnapshotError(#[source] toml::de::Error, PathBuf),
}

pub type Result<T> = result::Result<T, Error>;

pub trait Backend {
    /// Lists all stores available in the mail system.
    fn list_stores(&self) -> Result<Stores>;

    /// Reads the native rules of the given store, in store order.
    fn get_rules(&self, store: &Store) -> Result<Vec<RawRule>>;

    /// Resolves a store by its display name.
    ///
    /// Names are compared case-insensitively, the way mail clients
    /// resolve store display names. An empty store list is reported
    /// as [`Error::NoStores`], distinct from [`Error::StoreNotFound`].
    fn get_store(&self, name: &str) -> Result<Store> {
        let stores = self.list_stores()?;

        if stores.is_empty() {
            return Err(Error::NoStores);
        }

        stores
            .iter()
            .find(|store| store.name == name)
            .or_else(|| {
                stores
                    .iter()
                    .find(|store| store.name.eq_ignore_ascii_case(name))
            })
            .cloned()
            .ok_or_else(|| Error::StoreNotFound(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_store_without_stores() {
        let backend = MemoryBackend::default();

        assert!(matches!(backend.get_store("Work"), Err(Error::NoStores)));
    }

    #[test]
    fn get_store_not_found() {
        let backend = MemoryBackend::default().with_store("Work", vec![]);

        match backend.get_store("Home") {
            Err(Error::StoreNotFound(name)) => assert_eq!(name, "Home"),
            res => panic!("unexpected result {res:?}"),
        }
    }

    #[test]
    fn get_store_prefers_exact_name() {
        let backend = MemoryBackend::default()
            .with_store("work", vec![])
            .with_store("Work", vec![]);

        assert_eq!(backend.get_store("Work").unwrap().name, "Work");
        assert_eq!(backend.get_store("WORK").unwrap().name, "work");
    }
}
