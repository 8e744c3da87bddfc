use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser};
use clap_mangen::Man;
use log::{debug, info};
use std::{fs, path::Path, path::PathBuf};

use crate::{cli::Cli, config, printer::Printer};

/// Generate manual pages to a directory.
///
/// One man page is generated for the main command and for every
/// subcommand, nested ones included (`rules-export-rule-export.1`).
/// The directory is created if needed, existing man pages are
/// overridden.
#[derive(Debug, Parser)]
pub struct ManualGenerateCommand {
    /// Directory where man files should be generated in.
    #[arg(value_parser = config::path_parser)]
    pub dir: PathBuf,
}

impl ManualGenerateCommand {
    pub fn execute(self, printer: &mut impl Printer) -> Result<()> {
        info!("executing manual generate command");

        fs::create_dir_all(&self.dir)
            .with_context(|| format!("cannot create man directory {:?}", self.dir))?;

        let count = render_man_pages(printer, Cli::command(), None, &self.dir)?;

        printer.print(format!(
            "{count} man page(s) successfully generated in {:?}!",
            self.dir
        ))
    }
}

/// Render the man page of the given command then recurse into its
/// subcommands. Returns the number of pages written.
fn render_man_pages(
    printer: &mut impl Printer,
    cmd: Command,
    parent: Option<&str>,
    dir: &Path,
) -> Result<usize> {
    let name = match parent {
        Some(parent) => format!("{parent}-{}", cmd.get_name()),
        None => cmd.get_name().to_owned(),
    };
    let subcmds = cmd.get_subcommands().cloned().collect::<Vec<_>>();

    let mut buffer = Vec::new();
    Man::new(cmd).render(&mut buffer)?;

    let path = dir.join(format!("{name}.1"));
    debug!("writing man page at {path:?}");
    printer.print_log(format!("Generating man page for command {name}…"))?;
    fs::write(&path, buffer).with_context(|| format!("cannot write man page at {path:?}"))?;

    let mut count = 1;
    for subcmd in subcmds {
        count += render_man_pages(printer, subcmd, Some(&name), dir)?;
    }

    Ok(count)
}
