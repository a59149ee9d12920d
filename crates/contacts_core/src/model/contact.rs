//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record exchanged with callers.
//! - Define the sparse patch shape used by partial updates.
//! - Own the "replace only when present" merge policy.
//!
//! # Invariants
//! - `id` is assigned by storage and never changes afterwards.
//! - Text fields are never null; absent values are empty strings.
//! - `favorite` is always a `bool` at this layer.

use serde::{Deserialize, Serialize};

/// Storage-assigned identifier for a contact row.
pub type ContactId = i64;

/// Placeholder first name given to freshly created contacts.
pub const PLACEHOLDER_FIRST: &str = "New";
/// Placeholder last name given to freshly created contacts.
pub const PLACEHOLDER_LAST: &str = "Contact";

/// Canonical contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub first: String,
    pub last: String,
    /// Social handle, stored verbatim.
    pub twitter: String,
    pub notes: String,
    pub favorite: bool,
    /// Inline image payload (data URL) or empty string.
    pub avatar: String,
}

impl Contact {
    /// Builds the placeholder record persisted by `create_empty`.
    ///
    /// The id is filled in by storage once the row exists.
    pub fn placeholder(id: ContactId) -> Self {
        Self {
            id,
            first: PLACEHOLDER_FIRST.to_string(),
            last: PLACEHOLDER_LAST.to_string(),
            twitter: String::new(),
            notes: String::new(),
            favorite: false,
            avatar: String::new(),
        }
    }

    /// Returns `"first last"` trimmed, or `None` when both names are empty.
    pub fn display_name(&self) -> Option<String> {
        let joined = format!("{} {}", self.first, self.last);
        let trimmed = joined.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn has_avatar(&self) -> bool {
        !self.avatar.is_empty()
    }
}

/// Sparse set of field values for a partial update.
///
/// `None` means "keep the stored value". Deserializing from JSON treats
/// missing keys as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl ContactPatch {
    /// Returns whether no field is present.
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
            && self.last.is_none()
            && self.twitter.is_none()
            && self.notes.is_none()
            && self.favorite.is_none()
            && self.avatar.is_none()
    }

    /// Applies the merge policy to `current` and returns the merged record.
    ///
    /// Each field takes the patch value when present and keeps the current
    /// value otherwise. `id` is never touched.
    pub fn apply_to(&self, current: &Contact) -> Contact {
        Contact {
            id: current.id,
            first: merge_field(&self.first, &current.first),
            last: merge_field(&self.last, &current.last),
            twitter: merge_field(&self.twitter, &current.twitter),
            notes: merge_field(&self.notes, &current.notes),
            favorite: self.favorite.unwrap_or(current.favorite),
            avatar: merge_field(&self.avatar, &current.avatar),
        }
    }
}

fn merge_field(incoming: &Option<String>, current: &str) -> String {
    incoming.clone().unwrap_or_else(|| current.to_string())
}

/// Parses the external (string) form of a contact id.
///
/// Returns `None` for anything that is not a base-10 integer; callers treat
/// that the same as an id with no matching row.
pub fn parse_contact_id(raw: &str) -> Option<ContactId> {
    raw.trim().parse::<ContactId>().ok()
}

#[cfg(test)]
mod tests {
    use super::{parse_contact_id, Contact, ContactPatch};

    #[test]
    fn placeholder_uses_fixed_values() {
        let contact = Contact::placeholder(7);
        assert_eq!(contact.id, 7);
        assert_eq!(contact.first, "New");
        assert_eq!(contact.last, "Contact");
        assert!(contact.twitter.is_empty());
        assert!(contact.notes.is_empty());
        assert!(!contact.favorite);
        assert!(!contact.has_avatar());
    }

    #[test]
    fn empty_patch_keeps_every_field() {
        let mut current = Contact::placeholder(3);
        current.notes = "met at a conference".to_string();
        current.favorite = true;

        let patch = ContactPatch::default();
        assert!(patch.is_empty());
        assert_eq!(patch.apply_to(&current), current);
    }

    #[test]
    fn patch_replaces_only_present_fields() {
        let current = Contact::placeholder(1);
        let patch = ContactPatch {
            first: Some("Ada".to_string()),
            favorite: Some(true),
            ..ContactPatch::default()
        };

        let merged = patch.apply_to(&current);
        assert_eq!(merged.id, 1);
        assert_eq!(merged.first, "Ada");
        assert_eq!(merged.last, "Contact");
        assert!(merged.favorite);
        assert_eq!(merged.twitter, "");
    }

    #[test]
    fn patch_with_empty_string_clears_field() {
        let mut current = Contact::placeholder(1);
        current.twitter = "@ada".to_string();
        let patch = ContactPatch {
            twitter: Some(String::new()),
            ..ContactPatch::default()
        };
        assert_eq!(patch.apply_to(&current).twitter, "");
    }

    #[test]
    fn display_name_handles_blank_names() {
        let mut contact = Contact::placeholder(1);
        assert_eq!(contact.display_name().as_deref(), Some("New Contact"));

        contact.first.clear();
        assert_eq!(contact.display_name().as_deref(), Some("Contact"));

        contact.last.clear();
        assert_eq!(contact.display_name(), None);
    }

    #[test]
    fn parse_contact_id_accepts_integers_only() {
        assert_eq!(parse_contact_id("42"), Some(42));
        assert_eq!(parse_contact_id(" 42 "), Some(42));
        assert_eq!(parse_contact_id("-1"), Some(-1));
        assert_eq!(parse_contact_id("abc"), None);
        assert_eq!(parse_contact_id(""), None);
        assert_eq!(parse_contact_id("4.2"), None);
    }
}
