pub mod arg;
pub mod command;

use anyhow::Result;
use serde::Serialize;
use std::ops;

use crate::printer::{print_lines, Print, WriteColor};

/// A store (mailbox or archive file) of the mail system.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Store {
    pub name: String,
}

impl Store {
    pub fn new(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Stores(Vec<Store>);

impl Stores {
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|store| store.name.as_str()).collect()
    }
}

impl ops::Deref for Stores {
    type Target = Vec<Store>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Store> for Stores {
    fn from_iter<T: IntoIterator<Item = Store>>(iter: T) -> Self {
        Stores(iter.into_iter().collect())
    }
}

impl Print for Stores {
    fn print(&self, writer: &mut dyn WriteColor) -> Result<()> {
        print_lines(writer, self.names())
    }
}
