mod csv;
mod export;
mod list;

use anyhow::Result;
use clap::Subcommand;
use log::{debug, warn};

use crate::{
    backend::{self, Backend},
    config::TomlConfig,
    printer::Printer,
    rule::{normalize_all, RuleFmt, Rules},
    store::Store,
};

use self::{csv::RuleCsvCommand, export::RuleExportCommand, list::RuleListCommand};

/// Export rules.
///
/// A rule filters incoming emails of a store. This subcommand allows
/// you to print or export the enabled rules of a store, normalized
/// as Gmail-style filter descriptions.
#[derive(Debug, Subcommand)]
pub enum RuleSubcommand {
    #[command(alias = "lst")]
    List(RuleListCommand),

    #[command()]
    Csv(RuleCsvCommand),

    #[command(alias = "write")]
    Export(RuleExportCommand),
}

impl RuleSubcommand {
    pub fn execute(
        self,
        printer: &mut impl Printer,
        config: &TomlConfig,
        backend: &impl Backend,
    ) -> Result<()> {
        match self {
            Self::List(cmd) => cmd.execute(printer, config, backend),
            Self::Csv(cmd) => cmd.execute(printer, config, backend),
            Self::Export(cmd) => cmd.execute(printer, config, backend),
        }
    }
}

/// Read and normalize the enabled rules of the given store.
///
/// Resolution failures do not stop the export: they are logged and,
/// in plain mode, printed as warnings. JSON output carries them in
/// the serialized rules instead.
pub(crate) fn load_rules(
    printer: &mut impl Printer,
    backend: &impl Backend,
    store_name: &str,
    fmt: RuleFmt,
) -> Result<Rules> {
    let store = find_store(printer, backend, store_name)?;
    let raw_rules = backend.get_rules(&store)?;
    debug!("normalizing {} rule(s) of store {}", raw_rules.len(), store.name);

    let rules = Rules::new(normalize_all(&raw_rules, &store.name), fmt);

    for warning in rules.warnings() {
        warn!("rule {:?}: {}", warning.rule_name, warning.diagnostic);
        if !printer.is_json() {
            printer.print_log(warning)?;
        }
    }

    Ok(rules)
}

fn find_store(
    printer: &mut impl Printer,
    backend: &impl Backend,
    store_name: &str,
) -> Result<Store> {
    match backend.get_store(store_name) {
        Ok(store) => Ok(store),
        Err(err @ backend::Error::StoreNotFound(_)) => {
            let names = backend.list_stores()?.names().join(", ");
            printer.print_log(format!("available stores: {names}"))?;
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use anyhow::Result;
    use std::{fmt::Debug, io};
    use termcolor::ColorSpec;

    use crate::printer::{Print, Printer};

    #[derive(Debug, Default, Clone)]
    pub struct StringWriter {
        pub content: String,
    }

    impl io::Write for StringWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.content
                .push_str(&String::from_utf8(buf.to_vec()).unwrap());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl termcolor::WriteColor for StringWriter {
        fn supports_color(&self) -> bool {
            false
        }

        fn set_color(&mut self, _spec: &ColorSpec) -> io::Result<()> {
            io::Result::Ok(())
        }

        fn reset(&mut self) -> io::Result<()> {
            io::Result::Ok(())
        }
    }

    #[derive(Debug, Default)]
    pub struct PrinterServiceTest {
        pub writer: StringWriter,
        pub log_writer: StringWriter,
        pub json: bool,
    }

    impl PrinterServiceTest {
        pub fn json() -> Self {
            Self {
                json: true,
                ..Default::default()
            }
        }
    }

    impl Printer for PrinterServiceTest {
        fn print<T: Debug + Print + serde::Serialize>(&mut self, data: T) -> Result<()> {
            if self.json {
                Ok(serde_json::to_writer(&mut self.writer, &data)?)
            } else {
                data.print(&mut self.writer)
            }
        }

        fn print_log<T: Debug + Print>(&mut self, data: T) -> Result<()> {
            data.print(&mut self.log_writer)
        }

        fn is_json(&self) -> bool {
            self.json
        }
    }
}
