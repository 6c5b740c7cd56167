//! Booking form snapshots.
//!
//! A [`FormSnapshot`] is the value of every form field at the moment the
//! visitor pressed submit. It serializes as a flat JSON object of field name
//! to string, which is also the shape persisted for each inquiry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field name of the visitor's name input.
pub const FIELD_NAME: &str = "name";
/// Field name of the phone input.
pub const FIELD_PHONE: &str = "phone";
/// Field name of the optional email input.
pub const FIELD_EMAIL: &str = "email";
/// Field name of the privacy-consent checkbox.
pub const FIELD_PRIVACY: &str = "privacy";
/// Key the inquiry log stamps on every stored record.
pub const FIELD_TIMESTAMP: &str = "timestamp";

/// Keys with a fixed meaning in the serialized form. They never live in
/// [`FormSnapshot::extra`], where they would shadow the real value.
pub const RESERVED_FIELDS: [&str; 5] = [
    FIELD_NAME,
    FIELD_PHONE,
    FIELD_EMAIL,
    FIELD_PRIVACY,
    FIELD_TIMESTAMP,
];

/// Immutable capture of the booking form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    /// Optional; an empty string means the visitor left it blank.
    #[serde(default)]
    pub email: String,
    #[serde(
        rename = "privacy",
        default,
        with = "checkbox",
        skip_serializing_if = "is_unchecked"
    )]
    pub privacy_accepted: bool,
    /// Free-form fields (`checkin`, `message`, `guests`, ...) carried through
    /// without validation.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl FormSnapshot {
    /// Builds a snapshot from the four validated fields with no extras.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        privacy_accepted: bool,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            privacy_accepted,
            extra: BTreeMap::new(),
        }
    }

    /// Builds a snapshot from raw `(field, value)` entries, the way a browser
    /// serializes a submitted form.
    ///
    /// An unchecked checkbox is simply absent, so `privacy` only counts as
    /// accepted when present with a truthy value. Later duplicates win, and a
    /// `timestamp` entry is dropped since the log assigns its own.
    #[must_use]
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut snapshot = Self::default();
        for (field, value) in entries {
            snapshot.set(field.into(), value.into());
        }
        snapshot
    }

    /// Returns a copy with `field` set. Known fields go to their own slot
    /// exactly as in [`FormSnapshot::from_entries`]; anything else is kept
    /// as a pass-through extra.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field.into(), value.into());
        self
    }

    /// Removes extras whose key is one of [`RESERVED_FIELDS`].
    ///
    /// Only needed when `extra` was filled directly; the constructors never
    /// put reserved keys there.
    pub fn strip_reserved_extras(&mut self) {
        self.extra.retain(|field, _| !is_reserved_field(field));
    }

    /// Looks up an extra field such as `checkin` or `message`.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        self.extra.get(field).map(String::as_str)
    }

    fn set(&mut self, field: String, value: String) {
        match field.as_str() {
            FIELD_NAME => self.name = value,
            FIELD_PHONE => self.phone = value,
            FIELD_EMAIL => self.email = value,
            FIELD_PRIVACY => self.privacy_accepted = is_checked(&value),
            FIELD_TIMESTAMP => {}
            _ => {
                self.extra.insert(field, value);
            }
        }
    }
}

#[must_use]
pub fn is_reserved_field(field: &str) -> bool {
    RESERVED_FIELDS.contains(&field)
}

/// Returns `true` for the values a checked checkbox may be submitted with.
fn is_checked(value: &str) -> bool {
    let value = value.trim();
    ["on", "true", "yes", "1"]
        .iter()
        .any(|truthy| value.eq_ignore_ascii_case(truthy))
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_unchecked(accepted: &bool) -> bool {
    !*accepted
}

/// Serde adapter storing a checkbox as `"on"` like a browser form does.
mod checkbox {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub(super) fn serialize<S>(checked: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if *checked { "on" } else { "off" })
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().is_some_and(super::is_checked))
    }
}
