// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored activity record.
///
/// Records are created and updated elsewhere; the search core only reads them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Document ID
    pub id: String,
    /// Activity name/title
    #[serde(default)]
    pub name: Option<String>,
    /// Category, either a canonical code ("3") or a label ("RUN", "Rando")
    #[serde(default)]
    pub category: Option<String>,
    /// Free-text comments
    #[serde(default)]
    pub comments: Option<String>,
    /// Start date/time
    #[serde(default)]
    pub begin: Option<DateTime<Utc>>,
    #[serde(default)]
    pub visibility: Visibility,
    /// Owning user
    #[serde(default)]
    pub owner: Option<OwnerRef>,
}

impl Activity {
    /// Minimal record, mostly useful for tests and fixtures.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            category: None,
            comments: None,
            begin: None,
            visibility: Visibility::default(),
            owner: None,
        }
    }

    /// Whether the given user owns this activity.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner.as_ref().is_some_and(|o| o.refers_to(user_id))
    }
}

/// Read visibility of an activity.
///
/// Anything other than `public` is treated as restricted to the owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Private,
    /// Unknown value stored by an older client.
    #[serde(other)]
    Restricted,
}

impl Visibility {
    /// Value as stored in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Restricted => "restricted",
        }
    }
}

/// Reference to the owning user.
///
/// Documents store the owner either inline (`"owner": "u1"`) or as a
/// reference wrapper (`"owner": {"id": "u1"}`). Both name the same user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredOwnerRef", into = "StoredOwnerRef")]
pub enum OwnerRef {
    DirectId(String),
    LinkedId(String),
}

impl OwnerRef {
    /// The referenced user ID, regardless of encoding.
    pub fn id(&self) -> &str {
        match self {
            OwnerRef::DirectId(id) | OwnerRef::LinkedId(id) => id,
        }
    }

    /// Single equality rule for both encodings.
    pub fn refers_to(&self, user_id: &str) -> bool {
        self.id() == user_id
    }
}

/// Document shape of [`OwnerRef`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredOwnerRef {
    Direct(String),
    Linked { id: String },
}

impl From<StoredOwnerRef> for OwnerRef {
    fn from(stored: StoredOwnerRef) -> Self {
        match stored {
            StoredOwnerRef::Direct(id) => OwnerRef::DirectId(id),
            StoredOwnerRef::Linked { id } => OwnerRef::LinkedId(id),
        }
    }
}

impl From<OwnerRef> for StoredOwnerRef {
    fn from(owner: OwnerRef) -> Self {
        match owner {
            OwnerRef::DirectId(id) => StoredOwnerRef::Direct(id),
            OwnerRef::LinkedId(id) => StoredOwnerRef::Linked { id },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_ref_both_encodings_deserialize() {
        let direct: Activity =
            serde_json::from_str(r#"{"id": "a1", "owner": "u1", "visibility": "private"}"#)
                .unwrap();
        let linked: Activity =
            serde_json::from_str(r#"{"id": "a2", "owner": {"id": "u1"}, "visibility": "private"}"#)
                .unwrap();

        assert_eq!(direct.owner, Some(OwnerRef::DirectId("u1".to_string())));
        assert_eq!(linked.owner, Some(OwnerRef::LinkedId("u1".to_string())));
        assert!(direct.is_owned_by("u1"));
        assert!(linked.is_owned_by("u1"));
        assert!(!linked.is_owned_by("u2"));
    }

    #[test]
    fn test_linked_owner_serializes_as_wrapper() {
        let mut activity = Activity::new("a1");
        activity.owner = Some(OwnerRef::LinkedId("u9".to_string()));

        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["owner"]["id"], "u9");
    }

    #[test]
    fn test_unknown_visibility_is_restricted() {
        let activity: Activity =
            serde_json::from_str(r#"{"id": "a1", "visibility": "friends"}"#).unwrap();
        assert_eq!(activity.visibility, Visibility::Restricted);
    }

    #[test]
    fn test_missing_fields_default() {
        let activity: Activity = serde_json::from_str(r#"{"id": "a1"}"#).unwrap();
        assert_eq!(activity.visibility, Visibility::Private);
        assert!(activity.name.is_none());
        assert!(activity.begin.is_none());
        assert!(activity.owner.is_none());
    }
}
