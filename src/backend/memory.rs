use log::debug;

use crate::store::{Store, Stores};

use super::{Backend, Error, RawRule, Result};

/// A backend holding stores and their rules in memory.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MemoryBackend {
    stores: Vec<(Store, Vec<RawRule>)>,
}

impl MemoryBackend {
    pub fn with_store(mut self, name: impl ToString, rules: Vec<RawRule>) -> Self {
        self.add_store(name, rules);
        self
    }

    pub fn add_store(&mut self, name: impl ToString, rules: Vec<RawRule>) {
        self.stores.push((Store::new(name), rules));
    }
}

impl Backend for MemoryBackend {
    fn list_stores(&self) -> Result<Stores> {
        Ok(self.stores.iter().map(|(store, _)| store.clone()).collect())
    }

    fn get_rules(&self, store: &Store) -> Result<Vec<RawRule>> {
        let rules = self
            .stores
            .iter()
            .find(|(s, _)| s == store)
            .map(|(_, rules)| rules.clone())
            .ok_or_else(|| Error::StoreNotFound(store.name.clone()))?;

        debug!("found {} rule(s) in store {}", rules.len(), store.name);
        Ok(rules)
    }
}
