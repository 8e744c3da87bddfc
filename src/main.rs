use anyhow::Result;
use clap::Parser;
use log::{debug, trace};

use rules_export::{
    cli::{Cli, RulesExportCommand},
    config::TomlConfig,
    printer::StdoutPrinter,
};

fn main() -> Result<()> {
    let default_env_filter = env_logger::DEFAULT_FILTER_ENV;
    env_logger::init_from_env(env_logger::Env::default().filter_or(default_env_filter, "off"));

    let cli = Cli::parse();
    let mut printer = StdoutPrinter::new(cli.output, cli.color);

    // Completion and manual commands do not need any configuration.
    let config = match cli.command {
        RulesExportCommand::Completion(_) | RulesExportCommand::Manual(_) => TomlConfig::default(),
        _ => {
            let mut config = TomlConfig::from_opt_path(cli.config.as_deref())?;
            if let Some(path) = cli.snapshot {
                debug!("overriding snapshot path with {path:?}");
                config.snapshot = Some(path);
            }
            config
        }
    };
    trace!("{config:#?}");

    cli.command.execute(&mut printer, &config)
}
