mod list;

use anyhow::Result;
use clap::Subcommand;

use crate::{backend::Backend, printer::Printer};

use self::list::StoreListCommand;

/// Manage stores.
///
/// A store (as known as mailbox, or data file) holds the rules of
/// one mailbox. This subcommand allows you to discover them.
#[derive(Debug, Subcommand)]
pub enum StoreSubcommand {
    #[command(alias = "lst")]
    List(StoreListCommand),
}

impl StoreSubcommand {
    pub fn execute(self, printer: &mut impl Printer, backend: &impl Backend) -> Result<()> {
        match self {
            Self::List(cmd) => cmd.execute(printer, backend),
        }
    }
}
