use anyhow::Result;
use clap::Parser;
use log::info;

use crate::{
    backend::Backend,
    config::TomlConfig,
    printer::Printer,
    rule::RuleFmt,
    store::arg::name::StoreNameOptionalArg,
};

use super::load_rules;

/// Print the rules of a store as CSV.
///
/// This command prints one `FROM;FOLDER` row per enabled rule: the
/// sender addresses and the folder matching emails are moved to.
/// Values are not escaped.
#[derive(Debug, Parser)]
pub struct RuleCsvCommand {
    #[command(flatten)]
    pub store: StoreNameOptionalArg,
}

impl RuleCsvCommand {
    pub fn execute(
        self,
        printer: &mut impl Printer,
        config: &TomlConfig,
        backend: &impl Backend,
    ) -> Result<()> {
        info!("executing rule csv command");

        let store_name = config.store_name(self.store.name)?;
        let rules = load_rules(printer, backend, &store_name, RuleFmt::Csv)?;

        printer.print(rules)
    }
}
