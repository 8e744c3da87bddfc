//! Module related to output formatting.

use clap::ValueEnum;
use termcolor::ColorChoice;

/// Represents the available output formats.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, ValueEnum)]
pub enum OutputFmt {
    #[default]
    Plain,
    Json,
}

/// Represents the available color modes.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, ValueEnum)]
pub enum ColorFmt {
    Never,
    Always,
    Ansi,
    #[default]
    Auto,
}

impl From<ColorFmt> for ColorChoice {
    fn from(fmt: ColorFmt) -> Self {
        match fmt {
            ColorFmt::Never => Self::Never,
            ColorFmt::Always => Self::Always,
            ColorFmt::Ansi => Self::AlwaysAnsi,
            ColorFmt::Auto => Self::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_output_fmt() {
        assert_eq!(OutputFmt::from_str("json", true).unwrap(), OutputFmt::Json);
        assert_eq!(OutputFmt::from_str("PLAIN", true).unwrap(), OutputFmt::Plain);
        assert!(OutputFmt::from_str("xml", true).is_err());
    }

    #[test]
    fn color_fmt_to_color_choice() {
        assert_eq!(ColorChoice::from(ColorFmt::Ansi), ColorChoice::AlwaysAnsi);
        assert_eq!(ColorChoice::from(ColorFmt::default()), ColorChoice::Auto);
        assert!(ColorFmt::from_str("rainbow", true).is_err());
    }
}
