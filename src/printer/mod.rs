//! Printer module.
//!
//! Commands never write to the terminal directly: they hand
//! [`Print`]able and serializable values to a [`Printer`], which
//! decides between plain text and JSON.

pub mod print;
#[allow(clippy::module_inception)]
pub mod printer;

use std::io;

pub use print::*;
pub use printer::*;

/// A writer able to change colors, like a terminal stream.
pub trait WriteColor: io::Write + termcolor::WriteColor {}

impl<W: io::Write + termcolor::WriteColor> WriteColor for W {}
