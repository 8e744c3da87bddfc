use anyhow::{Context, Result};
use std::fmt::Display;

use crate::printer::WriteColor;

/// The plain text form of a value.
pub trait Print {
    fn print(&self, writer: &mut dyn WriteColor) -> Result<()>;
}

/// Write every item on its own line, then reset colors.
pub fn print_lines<T: Display>(
    writer: &mut dyn WriteColor,
    lines: impl IntoIterator<Item = T>,
) -> Result<()> {
    for line in lines {
        writeln!(writer, "{line}").context("cannot write line to writer")?;
    }
    writer.reset().context("cannot reset writer colors")
}

impl Print for &str {
    fn print(&self, writer: &mut dyn WriteColor) -> Result<()> {
        print_lines(writer, [self])
    }
}

impl Print for String {
    fn print(&self, writer: &mut dyn WriteColor) -> Result<()> {
        print_lines(writer, [self])
    }
}
