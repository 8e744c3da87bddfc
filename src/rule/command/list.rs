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

/// List the rules of a store.
///
/// This command prints one descriptive sentence per enabled rule,
/// like "If an email from [jane@co.com] then move to [Clients]".
#[derive(Debug, Parser)]
pub struct RuleListCommand {
    #[command(flatten)]
    pub store: StoreNameOptionalArg,
}

impl RuleListCommand {
    pub fn execute(
        self,
        printer: &mut impl Printer,
        config: &TomlConfig,
        backend: &impl Backend,
    ) -> Result<()> {
        info!("executing rule list command");

        let store_name = config.store_name(self.store.name)?;
        let rules = load_rules(printer, backend, &store_name, RuleFmt::Text)?;

        printer.print(rules)
    }
}
