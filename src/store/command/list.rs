use anyhow::Result;
use clap::Parser;
use log::info;

use crate::{backend::Backend, printer::Printer};

/// List all stores.
///
/// This command lists the display name of every store available in
/// the mail system. Any of them can be given to rule commands.
#[derive(Debug, Parser)]
pub struct StoreListCommand {}

impl StoreListCommand {
    pub fn execute(self, printer: &mut impl Printer, backend: &impl Backend) -> Result<()> {
        info!("executing store list command");

        let stores = backend.list_stores()?;
        printer.print(stores)
    }
}
