use std::fmt;

use super::NormalizedRule;

const CSV_SEP: &str = ";";

impl NormalizedRule {
    /// Render the rule as a descriptive sentence.
    ///
    /// Clauses always come in the same order: conditions first, then
    /// actions. Absent or false fields add nothing.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Render the rule as a `from;move-to-folder` row.
    ///
    /// Absent values render as empty strings. Embedded separators are
    /// not escaped.
    pub fn to_csv_row(&self) -> String {
        [
            self.from_address.as_deref().unwrap_or_default(),
            self.move_to_folder.as_deref().unwrap_or_default(),
        ]
        .join(CSV_SEP)
    }
}

impl fmt::Display for NormalizedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "If an email")?;

        if let Some(addr) = &self.from_address {
            write!(f, " from [{addr}]")?;
        }

        if let Some(addr) = &self.to_address {
            write!(f, " sent to [{addr}]")?;
        }

        if self.cc {
            write!(f, " sent to me in CC")?;
        }

        if self.to_or_cc {
            write!(f, " sent to me directly or in CC")?;
        }

        if let Some(text) = &self.sender_address_contains {
            write!(f, " with text in sender addresses [{text}]")?;
        }

        if let Some(text) = &self.recipient_address_contains {
            write!(f, " with text in recipient addresses [{text}]")?;
        }

        if let Some(text) = &self.subject_contains {
            write!(f, " with text in subject [{text}]")?;
        }

        if let Some(text) = &self.body_contains {
            write!(f, " with text in body [{text}]")?;
        }

        if let Some(text) = &self.body_or_subject_contains {
            write!(f, " with text in subject or body [{text}]")?;
        }

        if let Some(folder) = &self.move_to_folder {
            write!(f, " then move to [{folder}]")?;
        }

        if let Some(folder) = &self.copy_to_folder {
            write!(f, " then copy to [{folder}]")?;
        }

        if self.move_to_trash {
            write!(f, " then move to trash")?;
        }

        if self.delete_permanently {
            write!(f, " then delete permanently")?;
        }

        Ok(())
    }
}
