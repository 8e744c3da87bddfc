use clap::Parser;

/// The optional store name argument parser.
#[derive(Debug, Default, Parser)]
pub struct StoreNameOptionalArg {
    /// The display name of the store (mailbox) to read rules from.
    ///
    /// If omitted, the store set as `default-store` in your TOML
    /// configuration file is used.
    #[arg(name = "store-name", value_name = "STORE")]
    pub name: Option<String>,
}
