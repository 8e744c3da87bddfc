//! Raw rule module.
//!
//! This module contains the native representation of a mail rule, as
//! exposed by a mail store: a bag of independently enabled condition
//! and action objects. Every value the store may fail to resolve is
//! wrapped in a [`Resolution`].

use serde::{Deserialize, Serialize};

/// A value read from the mail store, or the reason it could not be
/// resolved.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Resolution<T> {
    Failed { error: String },
    Resolved(T),
}

impl<T> Resolution<T> {
    pub fn failed(error: impl ToString) -> Self {
        Self::Failed {
            error: error.to_string(),
        }
    }

    pub fn as_result(&self) -> Result<&T, &str> {
        match self {
            Self::Resolved(value) => Ok(value),
            Self::Failed { error } => Err(error),
        }
    }
}

impl<T: Default> Default for Resolution<T> {
    fn default() -> Self {
        Self::Resolved(T::default())
    }
}

impl<T> From<T> for Resolution<T> {
    fn from(value: T) -> Self {
        Self::Resolved(value)
    }
}

/// One native rule of a store.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawRule {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub conditions: Conditions,
    #[serde(default)]
    pub actions: Actions,
}

impl RawRule {
    pub fn new(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            enabled: true,
            ..Default::default()
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Conditions {
    pub from: RecipientsCondition,
    pub sent_to: RecipientsCondition,
    pub cc: ToggleCondition,
    pub to_or_cc: ToggleCondition,
    pub subject: TextCondition,
    pub body: TextCondition,
    pub body_or_subject: TextCondition,
    pub sender_address: TextCondition,
    pub recipient_address: TextCondition,
}

/// A condition matching a list of address book entries.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RecipientsCondition {
    pub enabled: bool,
    pub recipients: Vec<Resolution<AddressEntry>>,
}

impl RecipientsCondition {
    pub fn new<R>(recipients: impl IntoIterator<Item = R>) -> Self
    where
        R: Into<Resolution<AddressEntry>>,
    {
        Self {
            enabled: true,
            recipients: recipients.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ToggleCondition {
    pub enabled: bool,
}

impl ToggleCondition {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }
}

/// A condition matching any of the given words.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TextCondition {
    pub enabled: bool,
    pub text: Vec<String>,
}

impl TextCondition {
    pub fn new(text: impl IntoIterator<Item = impl ToString>) -> Self {
        Self {
            enabled: true,
            text: text.into_iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The kind of an address book entry.
///
/// Unknown kinds deserialize as [`AddressEntryUserType::Other`], so a
/// store reporting a new kind never breaks the snapshot.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressEntryUserType {
    /// A user of the local organization directory.
    ExchangeUser,
    /// A user of a remote organization directory.
    ExchangeRemoteUser,
    ExchangeDistributionList,
    ExchangePublicFolder,
    ExchangeAgent,
    ExchangeOrganization,
    OutlookContact,
    OutlookDistributionList,
    Ldap,
    /// A plain routable address.
    Smtp,
    #[default]
    #[serde(other)]
    Other,
}

impl AddressEntryUserType {
    pub fn is_directory_user(&self) -> bool {
        matches!(self, Self::ExchangeUser | Self::ExchangeRemoteUser)
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AddressEntry {
    #[serde(rename = "type", default)]
    pub user_type: AddressEntryUserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_user: Option<Resolution<DirectoryUser>>,
}

impl AddressEntry {
    pub fn smtp(address: impl ToString) -> Self {
        Self {
            user_type: AddressEntryUserType::Smtp,
            address: Some(address.to_string()),
            directory_user: None,
        }
    }

    pub fn directory_user(user: impl Into<Resolution<DirectoryUser>>) -> Self {
        Self {
            user_type: AddressEntryUserType::ExchangeUser,
            address: None,
            directory_user: Some(user.into()),
        }
    }
}

/// An organization directory user.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DirectoryUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_smtp_address: Option<String>,
}

impl DirectoryUser {
    pub fn new(primary_smtp_address: impl ToString) -> Self {
        Self {
            primary_smtp_address: Some(primary_smtp_address.to_string()),
        }
    }
}

/// The kind of an action slot.
///
/// Native action lists are ordered by kind, move-to-folder holding
/// the second slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    Unknown,
    MoveToFolder,
    AssignToCategory,
    Delete,
    DeletePermanently,
    CopyToFolder,
    #[serde(other)]
    Other,
}

impl ActionKind {
    pub fn default_slots() -> Vec<Self> {
        vec![
            Self::Unknown,
            Self::MoveToFolder,
            Self::AssignToCategory,
            Self::Delete,
            Self::DeletePermanently,
            Self::CopyToFolder,
        ]
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Actions {
    pub slots: Vec<ActionKind>,
    pub move_to_folder: Resolution<FolderAction>,
    pub copy_to_folder: Resolution<FolderAction>,
    pub delete: Resolution<ToggleAction>,
    pub delete_permanently: Resolution<ToggleAction>,
}

impl Default for Actions {
    fn default() -> Self {
        Self {
            slots: ActionKind::default_slots(),
            move_to_folder: Default::default(),
            copy_to_folder: Default::default(),
            delete: Default::default(),
            delete_permanently: Default::default(),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FolderAction {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<Resolution<Folder>>,
}

impl FolderAction {
    pub fn new(path: impl ToString) -> Self {
        Self {
            enabled: true,
            folder: Some(Folder::new(path).into()),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Folder {
    /// Full native path, like `\\Store\Inbox\Sub`.
    pub path: String,
}

impl Folder {
    pub fn new(path: impl ToString) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ToggleAction {
    pub enabled: bool,
}

impl ToggleAction {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_rule_with_defaults() {
        let rule: RawRule = toml::from_str(
            r#"
            name = "Newsletters"
            enabled = true

            [conditions.subject]
            enabled = true
            text = ["weekly", "digest"]
            "#,
        )
        .unwrap();

        assert_eq!(rule.name, "Newsletters");
        assert_eq!(rule.conditions.subject, TextCondition::new(["weekly", "digest"]));
        assert!(!rule.conditions.from.enabled);
        assert_eq!(rule.actions, Actions::default());
    }

    #[test]
    fn deserialize_resolution_failures() {
        let rule: RawRule = toml::from_str(
            r#"
            enabled = true

            [conditions.from]
            enabled = true
            recipients = [
                { error = "malformed entry" },
                { type = "exchange-user", directory-user = { error = "offline" } },
                { type = "smtp", address = "jane@co.com" },
            ]

            [actions]
            delete = { error = "access denied" }
            "#,
        )
        .unwrap();

        let recipients = &rule.conditions.from.recipients;
        assert_eq!(recipients[0], Resolution::failed("malformed entry"));
        assert_eq!(
            recipients[1],
            Resolution::Resolved(AddressEntry::directory_user(Resolution::<DirectoryUser>::failed("offline")))
        );
        assert_eq!(recipients[2], Resolution::Resolved(AddressEntry::smtp("jane@co.com")));
        assert_eq!(rule.actions.delete, Resolution::failed("access denied"));
    }

    #[test]
    fn deserialize_unknown_kinds() {
        let rule: RawRule = toml::from_str(
            r#"
            enabled = true

            [conditions.from]
            enabled = true
            recipients = [
                { type = "ldap", address = "x@y.com" },
                { type = "carrier-pigeon", address = "z@y.com" },
                { type = "smtp", address = "jane@co.com" },
            ]

            [actions]
            slots = ["unknown", "run-script"]
            "#,
        )
        .unwrap();

        let recipients = &rule.conditions.from.recipients;
        let user_types: Vec<_> = recipients
            .iter()
            .map(|entry| entry.as_result().unwrap().user_type)
            .collect();
        assert_eq!(
            user_types,
            vec![
                AddressEntryUserType::Ldap,
                AddressEntryUserType::Other,
                AddressEntryUserType::Smtp,
            ]
        );
        assert_eq!(rule.actions.slots, vec![ActionKind::Unknown, ActionKind::Other]);
    }
}
