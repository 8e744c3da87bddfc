use log::{debug, trace};

use crate::backend::{
    ActionKind, Actions, AddressEntry, AddressEntryUserType, FolderAction, RawRule,
    RecipientsCondition, Resolution, TextCondition, ToggleAction,
};

use super::{Diagnostic, Normalized, NormalizedRule, RuleField};

const ADDRESS_SEP: &str = ",";
const TEXT_SEP: &str = " OR ";

/// Slot the move-to-folder action is expected at.
const MOVE_TO_FOLDER_SLOT: usize = 1;

/// The value produced by one mapping step, together with the
/// failures it recovered from.
struct Mapped<T> {
    value: T,
    diagnostics: Vec<Diagnostic>,
}

impl<T> Mapped<T> {
    fn ok(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    fn unwrap_into(self, diagnostics: &mut Vec<Diagnostic>) -> T {
        diagnostics.extend(self.diagnostics);
        self.value
    }
}

impl<T: Default> Mapped<T> {
    fn failed(diagnostic: Diagnostic) -> Self {
        Self {
            value: T::default(),
            diagnostics: vec![diagnostic],
        }
    }
}

/// Normalize one native rule.
///
/// Returns `None` for disabled rules. Every field is mapped by its
/// own step, so a resolution failure only leaves its own field
/// absent and is reported in [`Normalized::diagnostics`].
pub fn normalize(raw: &RawRule, store_name: &str) -> Option<Normalized> {
    if !raw.enabled {
        debug!("skipping disabled rule {:?}", raw.name);
        return None;
    }

    let conditions = &raw.conditions;
    let actions = &raw.actions;
    let mut diagnostics = Vec::new();

    let rule = NormalizedRule {
        from_address: map_addresses(&conditions.from, RuleField::FromAddress)
            .unwrap_into(&mut diagnostics),
        to_address: map_addresses(&conditions.sent_to, RuleField::ToAddress)
            .unwrap_into(&mut diagnostics),
        cc: conditions.cc.enabled,
        to_or_cc: conditions.to_or_cc.enabled,
        sender_address_contains: join_text(&conditions.sender_address),
        recipient_address_contains: join_text(&conditions.recipient_address),
        subject_contains: join_text(&conditions.subject),
        body_contains: join_text(&conditions.body),
        body_or_subject_contains: join_text(&conditions.body_or_subject),
        move_to_folder: map_move_to_folder(actions, store_name).unwrap_into(&mut diagnostics),
        copy_to_folder: map_folder(&actions.copy_to_folder, store_name, RuleField::CopyToFolder)
            .unwrap_into(&mut diagnostics),
        move_to_trash: map_toggle(&actions.delete, RuleField::MoveToTrash)
            .unwrap_into(&mut diagnostics),
        delete_permanently: map_toggle(&actions.delete_permanently, RuleField::DeletePermanently)
            .unwrap_into(&mut diagnostics),
    };

    trace!("normalized rule {:?}: {rule:#?}", raw.name);

    Some(Normalized {
        rule_name: raw.name.clone(),
        rule,
        diagnostics,
    })
}

/// Normalize a sequence of native rules, in order, skipping the
/// disabled ones.
pub fn normalize_all<'a>(
    rules: impl IntoIterator<Item = &'a RawRule>,
    store_name: &str,
) -> Vec<Normalized> {
    rules
        .into_iter()
        .filter_map(|rule| normalize(rule, store_name))
        .collect()
}

/// Turn a native folder path into a store-relative, slash-separated
/// path.
///
/// Every `\\<store_name>\` prefix is removed, then remaining
/// backslashes become forward slashes.
pub fn clean_folder_path(path: &str, store_name: &str) -> String {
    path.replace(&format!("\\\\{store_name}\\"), "")
        .replace('\\', "/")
}

fn map_addresses(condition: &RecipientsCondition, field: RuleField) -> Mapped<Option<String>> {
    if !condition.enabled {
        return Mapped::ok(None);
    }

    let mut addresses = Vec::new();
    let mut diagnostics = Vec::new();

    for entry in &condition.recipients {
        match resolve_address(entry) {
            Ok(Some(address)) if !address.is_empty() => addresses.push(address),
            Ok(_) => (),
            Err(reason) => diagnostics.push(Diagnostic::new(field, reason)),
        }
    }

    let value = if addresses.is_empty() {
        None
    } else {
        Some(addresses.join(ADDRESS_SEP))
    };

    Mapped { value, diagnostics }
}

/// Resolve the routable address of a recipient entry.
///
/// Directory users resolve to their primary SMTP address, plain SMTP
/// entries to their own address. Other entry kinds have no routable
/// address and resolve to `None`.
fn resolve_address(entry: &Resolution<AddressEntry>) -> Result<Option<String>, String> {
    let entry = entry.as_result()?;

    if entry.user_type.is_directory_user() {
        let user = entry
            .directory_user
            .as_ref()
            .ok_or("missing directory user")?
            .as_result()?;
        let address = user
            .primary_smtp_address
            .clone()
            .ok_or("missing primary SMTP address")?;
        Ok(Some(address))
    } else if entry.user_type == AddressEntryUserType::Smtp {
        Ok(entry.address.clone())
    } else {
        Ok(None)
    }
}

fn join_text(condition: &TextCondition) -> Option<String> {
    if condition.enabled && !condition.text.is_empty() {
        Some(condition.text.join(TEXT_SEP))
    } else {
        None
    }
}

/// Map the move-to-folder action, provided the store reports it at
/// its expected slot. Rules without an enabled move action are left
/// alone whatever the slot order.
fn map_move_to_folder(actions: &Actions, store_name: &str) -> Mapped<Option<String>> {
    let mapped = map_folder(&actions.move_to_folder, store_name, RuleField::MoveToFolder);

    if mapped.value.is_none() {
        return mapped;
    }

    match actions.slots.get(MOVE_TO_FOLDER_SLOT) {
        Some(ActionKind::MoveToFolder) => mapped,
        Some(kind) => Mapped::failed(Diagnostic::new(
            RuleField::MoveToFolder,
            format!("expected move-to-folder action at slot {MOVE_TO_FOLDER_SLOT}, got {kind:?}"),
        )),
        None => Mapped::failed(Diagnostic::new(
            RuleField::MoveToFolder,
            format!("missing action slot {MOVE_TO_FOLDER_SLOT}"),
        )),
    }
}

fn map_folder(
    action: &Resolution<FolderAction>,
    store_name: &str,
    field: RuleField,
) -> Mapped<Option<String>> {
    let action = match action.as_result() {
        Ok(action) => action,
        Err(reason) => return Mapped::failed(Diagnostic::new(field, reason)),
    };

    if !action.enabled {
        return Mapped::ok(None);
    }

    match &action.folder {
        None => Mapped::ok(None),
        Some(folder) => match folder.as_result() {
            Ok(folder) => Mapped::ok(Some(clean_folder_path(&folder.path, store_name))),
            Err(reason) => Mapped::failed(Diagnostic::new(field, reason)),
        },
    }
}

fn map_toggle(action: &Resolution<ToggleAction>, field: RuleField) -> Mapped<bool> {
    match action.as_result() {
        Ok(action) => Mapped::ok(action.enabled),
        Err(reason) => Mapped::failed(Diagnostic::new(field, reason)),
    }
}
