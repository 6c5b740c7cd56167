//! Append-only log of submitted inquiries.

use chrono::{DateTime, SubsecRound, Utc};
use pinecamp_core::FormSnapshot;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::storage::KeyValueStore;
use crate::StoreError;

/// A submitted snapshot stamped with the time it was stored.
///
/// Serializes as one flat object: every form field plus `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryRecord {
    #[serde(flatten)]
    pub snapshot: FormSnapshot,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl InquiryRecord {
    /// Stamps `snapshot` with `at`, truncated to whole milliseconds so the
    /// record equals what a later read returns. Extras named like a record
    /// field are dropped for the same reason.
    #[must_use]
    pub fn new(mut snapshot: FormSnapshot, at: DateTime<Utc>) -> Self {
        snapshot.strip_reserved_extras();
        Self {
            snapshot,
            timestamp: at.trunc_subsecs(3),
        }
    }
}

/// Handle to the inquiry log stored under one key of a [`KeyValueStore`].
#[derive(Debug)]
pub struct InquiryStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> InquiryStore<S> {
    #[must_use]
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Appends `snapshot` stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the storage backend cannot be read or written.
    pub fn append(&mut self, snapshot: FormSnapshot) -> Result<InquiryRecord, StoreError> {
        self.append_at(snapshot, Utc::now())
    }

    /// Appends `snapshot` stamped with `at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the storage backend cannot be read or written.
    pub fn append_at(
        &mut self,
        snapshot: FormSnapshot,
        at: DateTime<Utc>,
    ) -> Result<InquiryRecord, StoreError> {
        let record = InquiryRecord::new(snapshot, at);
        self.append_record(&record)?;
        Ok(record)
    }

    /// Writes an already stamped record to the end of the log.
    ///
    /// Existing entries are carried over verbatim, including ones this
    /// version cannot interpret; only content that is not a JSON array is
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the storage backend cannot be read or written.
    pub fn append_record(&mut self, record: &InquiryRecord) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.push(serde_json::to_value(record)?);
        let serialized = serde_json::to_string(&entries)?;
        self.storage.set_item(&self.key, &serialized)?;
        tracing::info!(key = %self.key, total = entries.len(), "inquiry stored");
        Ok(())
    }

    /// Returns the stored inquiries, oldest first.
    ///
    /// Entries that do not parse as an inquiry are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the storage backend cannot be read.
    pub fn records(&self) -> Result<Vec<InquiryRecord>, StoreError> {
        let records = self
            .read_entries()?
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(key = %self.key, index, error = %e, "skipping unreadable inquiry");
                    None
                }
            })
            .collect();
        Ok(records)
    }

    /// Number of entries in the log, readable or not.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the storage backend cannot be read.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read_entries()?.len())
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the storage backend cannot be read.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    fn read_entries(&self) -> Result<Vec<Value>, StoreError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => Ok(entries),
            Ok(Value::Null) => Ok(Vec::new()),
            Ok(_) => {
                tracing::warn!(key = %self.key, "stored inquiries are not a list; starting over");
                Ok(Vec::new())
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "stored inquiries are unparseable; starting over");
                Ok(Vec::new())
            }
        }
    }
}

/// ISO-8601 UTC timestamps with millisecond precision, e.g.
/// `2026-10-19T08:30:00.000Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|at| at.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "inquiries_test.rs"]
mod tests;
