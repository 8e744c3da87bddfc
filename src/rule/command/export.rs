use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    backend::Backend,
    config::{self, TomlConfig},
    printer::{Print, Printer, WriteColor},
    rule::{RuleFmt, RuleWarning, Rules},
    store::arg::name::StoreNameOptionalArg,
};

use super::load_rules;

/// Export the rules of a store to a file.
///
/// This command writes one line per enabled rule to the given file,
/// which is created or overridden.
#[derive(Debug, Parser)]
pub struct RuleExportCommand {
    #[command(flatten)]
    pub store: StoreNameOptionalArg,

    /// The file rules are written to.
    ///
    /// Defaults to `export.file` from your TOML configuration file,
    /// or to `rules.txt` in the current directory.
    #[arg(long, short)]
    #[arg(value_name = "PATH", value_parser = config::path_parser)]
    pub file: Option<PathBuf>,

    /// The format of exported lines.
    ///
    /// Defaults to `export.format` from your TOML configuration file,
    /// or to descriptive sentences.
    #[arg(long, short = 'F')]
    #[arg(value_name = "FORMAT", value_enum)]
    pub format: Option<RuleFmt>,
}

impl RuleExportCommand {
    pub fn execute(
        self,
        printer: &mut impl Printer,
        config: &TomlConfig,
        backend: &impl Backend,
    ) -> Result<()> {
        info!("executing rule export command");

        let store_name = config.store_name(self.store.name)?;
        let path = self.file.unwrap_or_else(|| config.export_file());
        let fmt = self.format.unwrap_or_else(|| config.export_format());
        debug!("exporting rules of store {store_name} to {path:?} as {fmt:?}");

        let rules = load_rules(printer, backend, &store_name, fmt)?;

        let content = rules
            .to_lines()
            .into_iter()
            .fold(String::new(), |mut content, line| {
                content.push_str(&line);
                content.push('\n');
                content
            });

        fs::write(&path, content).with_context(|| format!("cannot write rules to {path:?}"))?;

        printer.print(ExportReport::new(&path, &rules))
    }
}

/// What an export wrote, and the diagnostics met on the way.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExportReport<'a> {
    pub path: &'a Path,
    pub exported: usize,
    pub warnings: Vec<RuleWarning<'a>>,
}

impl<'a> ExportReport<'a> {
    pub fn new(path: &'a Path, rules: &'a Rules) -> Self {
        Self {
            path,
            exported: rules.len(),
            warnings: rules.warnings().collect(),
        }
    }
}

impl Print for ExportReport<'_> {
    fn print(&self, writer: &mut dyn WriteColor) -> Result<()> {
        format!(
            "{} rule(s) successfully exported to {:?}!",
            self.exported, self.path
        )
        .print(writer)
    }
}
