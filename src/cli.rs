use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::{
    completion::command::CompletionGenerateCommand,
    config::{self, TomlConfig},
    manual::command::ManualGenerateCommand,
    output::{ColorFmt, OutputFmt},
    printer::Printer,
    rule::command::RuleSubcommand,
    store::command::StoreSubcommand,
};

#[derive(Parser, Debug)]
#[command(
    name = "rules-export",
    author,
    version,
    about,
    propagate_version = true,
    infer_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: RulesExportCommand,

    /// Override the default configuration file path
    ///
    /// The given path is shell-expanded then canonicalized (if
    /// applicable). If no path is given, the first existing default
    /// path is used. Without configuration file, defaults apply.
    #[arg(long, short, global = true)]
    #[arg(value_name = "PATH", value_parser = config::path_parser)]
    pub config: Option<PathBuf>,

    /// Override the store snapshot path
    ///
    /// The snapshot is the TOML dump of the mail system stores and
    /// of their rules. It takes precedence over the `snapshot` entry
    /// of the configuration file.
    #[arg(long, short, global = true)]
    #[arg(value_name = "PATH", value_parser = config::path_parser)]
    pub snapshot: Option<PathBuf>,

    /// Customize the output format
    ///
    /// The output format determine how to display commands output to
    /// the terminal.
    ///
    /// The possible values are:
    ///
    ///  - json: output will be in a form of a JSON-compatible object
    ///
    ///  - plain: output will be in a form of plain text, one line per
    ///    rule or store
    #[arg(long, short, global = true)]
    #[arg(value_name = "FORMAT", value_enum, default_value_t = Default::default())]
    pub output: OutputFmt,

    /// Control when to use colors
    ///
    /// The possible values are:
    ///
    ///  - never: colors will never be used
    ///
    ///  - always: colors will always be used regardless of where output is sent
    ///
    ///  - ansi: like 'always', but emits ANSI escapes (even in a Windows console)
    ///
    ///  - auto: colors are used when the terminal supports them
    #[arg(long, short = 'C', global = true)]
    #[arg(value_name = "MODE", value_enum, default_value_t = Default::default())]
    pub color: ColorFmt,
}

#[derive(Subcommand, Debug)]
pub enum RulesExportCommand {
    /// Discover stores
    #[command(subcommand)]
    #[command(alias = "stores", alias = "mailboxes")]
    Store(StoreSubcommand),

    /// Print or export rules
    #[command(subcommand)]
    #[command(alias = "rules", alias = "filters")]
    Rule(RuleSubcommand),

    /// Generate manual pages to a directory
    #[command(arg_required_else_help = true)]
    #[command(alias = "manuals", alias = "mans")]
    Manual(ManualGenerateCommand),

    /// Print completion script for a shell to stdout
    #[command(arg_required_else_help = true)]
    #[command(alias = "completions")]
    Completion(CompletionGenerateCommand),
}

impl RulesExportCommand {
    pub fn execute(self, printer: &mut impl Printer, config: &TomlConfig) -> Result<()> {
        match self {
            Self::Store(cmd) => cmd.execute(printer, &config.open_backend()?),
            Self::Rule(cmd) => cmd.execute(printer, config, &config.open_backend()?),
            Self::Manual(cmd) => cmd.execute(printer),
            Self::Completion(cmd) => cmd.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_rule_export() {
        let cli = Cli::try_parse_from([
            "rules-export",
            "rule",
            "export",
            "Work",
            "--format",
            "csv",
            "-o",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.output, OutputFmt::Json);
        match cli.command {
            RulesExportCommand::Rule(RuleSubcommand::Export(cmd)) => {
                assert_eq!(cmd.store.name.as_deref(), Some("Work"));
                assert_eq!(cmd.format, Some(crate::rule::RuleFmt::Csv));
                assert_eq!(cmd.file, None);
            }
            cmd => panic!("unexpected command {cmd:?}"),
        }
    }
}
