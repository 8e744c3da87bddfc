//! Rule module.
//!
//! This module contains the normalized representation of a mail rule:
//! every recognized condition and action of a native rule flattened
//! into plain, order-independent fields. See [`normalize`] for the
//! mapping from native rules and [`NormalizedRule::render`] for the
//! descriptive sentence.

pub mod command;
mod normalize;
mod render;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use termcolor::{Color, ColorSpec};

use crate::printer::{print_lines, Print, WriteColor};

pub use self::normalize::{clean_folder_path, normalize, normalize_all};

/// One flattened record per enabled mail rule.
///
/// Text fields are `None` when the matching condition or action was
/// not enabled on the source rule. A present empty string is still a
/// present value.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NormalizedRule {
    /// Comma-joined sender addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    /// Comma-joined recipient addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
    pub cc: bool,
    pub to_or_cc: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_address_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_address_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_or_subject_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_to_folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_to_folder: Option<String>,
    pub move_to_trash: bool,
    pub delete_permanently: bool,
}

/// The field a diagnostic relates to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleField {
    FromAddress,
    ToAddress,
    MoveToFolder,
    CopyToFolder,
    MoveToTrash,
    DeletePermanently,
}

impl fmt::Display for RuleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self {
            Self::FromAddress => "from address",
            Self::ToAddress => "sent-to address",
            Self::MoveToFolder => "move-to-folder action",
            Self::CopyToFolder => "copy-to-folder action",
            Self::MoveToTrash => "move-to-trash action",
            Self::DeletePermanently => "delete-permanently action",
        };
        write!(f, "{field}")
    }
}

/// A non-fatal resolution failure met while normalizing a rule.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Diagnostic {
    pub field: RuleField,
    pub reason: String,
}

impl Diagnostic {
    pub fn new(field: RuleField, reason: impl ToString) -> Self {
        Self {
            field,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot resolve {}: {}", self.field, self.reason)
    }
}

/// The outcome of normalizing one enabled rule.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Normalized {
    pub rule_name: String,
    pub rule: NormalizedRule,
    pub diagnostics: Vec<Diagnostic>,
}

impl Normalized {
    pub fn warnings(&self) -> impl Iterator<Item = RuleWarning<'_>> {
        self.diagnostics.iter().map(|diagnostic| RuleWarning {
            rule_name: &self.rule_name,
            diagnostic,
        })
    }
}

/// A diagnostic together with the name of the rule it comes from,
/// printed as a warning.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuleWarning<'a> {
    pub rule_name: &'a str,
    pub diagnostic: &'a Diagnostic,
}

impl Print for RuleWarning<'_> {
    fn print(&self, writer: &mut dyn WriteColor) -> Result<()> {
        writer.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(writer, "warning:")?;
        writer.reset()?;
        writeln!(writer, " rule {:?}: {}", self.rule_name, self.diagnostic)?;
        Ok(())
    }
}

/// The line format of exported rules.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RuleFmt {
    /// One descriptive sentence per rule.
    #[default]
    Text,
    /// One `from;move-to-folder` row per rule.
    Csv,
}

impl NormalizedRule {
    pub fn format(&self, fmt: RuleFmt) -> String {
        match fmt {
            RuleFmt::Text => self.render(),
            RuleFmt::Csv => self.to_csv_row(),
        }
    }
}

/// Normalized rules bound to the line format they print with.
///
/// Plain output only shows the formatted lines. The JSON form keeps
/// the rule names and the diagnostics of every rule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rules {
    rules: Vec<Normalized>,
    fmt: RuleFmt,
}

impl Rules {
    pub fn new(rules: Vec<Normalized>, fmt: RuleFmt) -> Self {
        Self { rules, fmt }
    }

    pub fn to_lines(&self) -> Vec<String> {
        self.rules
            .iter()
            .map(|normalized| normalized.rule.format(self.fmt))
            .collect()
    }

    pub fn warnings(&self) -> impl Iterator<Item = RuleWarning<'_>> {
        self.rules.iter().flat_map(|normalized| normalized.warnings())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

impl Print for Rules {
    fn print(&self, writer: &mut dyn WriteColor) -> Result<()> {
        print_lines(writer, self.to_lines())
    }
}

impl Serialize for Rules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rules.serialize(serializer)
    }
}
