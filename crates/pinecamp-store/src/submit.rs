//! Submission pipeline: validate, then persist, then confirm.
//!
//! Validation always runs first and a rejected snapshot never reaches the
//! store. A storage failure does not turn an accepted inquiry into a
//! rejection: the stored copy is only a local backup, so the visitor still
//! gets the confirmation and the failure travels along as a warning.

use chrono::{DateTime, Utc};
use pinecamp_core::{canonical_phone, validate, Confirmation, FormSnapshot, ValidationResult};

use crate::inquiries::{InquiryRecord, InquiryStore};
use crate::storage::KeyValueStore;
use crate::StoreError;

/// An accepted inquiry and whether its local copy was written.
#[derive(Debug)]
pub struct Receipt {
    pub record: InquiryRecord,
    /// Set when the record could not be persisted.
    pub storage_warning: Option<StoreError>,
}

impl Receipt {
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.storage_warning.is_none()
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// At least one field failed validation; nothing was stored.
    Rejected(ValidationResult),
    Accepted(Receipt),
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }

    /// The success notification to show, for accepted submissions only.
    #[must_use]
    pub fn confirmation(&self) -> Option<Confirmation> {
        match self {
            SubmitOutcome::Accepted(_) => Some(Confirmation::default()),
            SubmitOutcome::Rejected(_) => None,
        }
    }

    /// Field errors to render, empty for accepted submissions.
    #[must_use]
    pub fn errors(&self) -> &[pinecamp_core::FieldError] {
        match self {
            SubmitOutcome::Rejected(result) => result.errors(),
            SubmitOutcome::Accepted(_) => &[],
        }
    }
}

/// Validates `snapshot` and, if it passes, appends it to `store` stamped
/// with the current time.
#[must_use]
pub fn submit<S: KeyValueStore>(
    store: &mut InquiryStore<S>,
    snapshot: FormSnapshot,
) -> SubmitOutcome {
    submit_at(store, snapshot, Utc::now())
}

/// Like [`submit`] with an explicit submission time.
///
/// Accepted phone numbers are stored in their canonical hyphenated form.
#[must_use]
pub fn submit_at<S: KeyValueStore>(
    store: &mut InquiryStore<S>,
    mut snapshot: FormSnapshot,
    at: DateTime<Utc>,
) -> SubmitOutcome {
    let result = validate(&snapshot);
    if !result.is_valid() {
        tracing::debug!(errors = result.len(), "inquiry rejected");
        return SubmitOutcome::Rejected(result);
    }

    snapshot.phone = canonical_phone(&snapshot.phone);
    let record = InquiryRecord::new(snapshot, at);

    let storage_warning = match store.append_record(&record) {
        Ok(()) => None,
        Err(e) => {
            tracing::warn!(key = %store.key(), error = %e, "inquiry accepted but not stored locally");
            Some(e)
        }
    };

    SubmitOutcome::Accepted(Receipt {
        record,
        storage_warning,
    })
}
