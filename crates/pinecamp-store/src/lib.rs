//! Persistence for booking inquiries and the submit pipeline that feeds it.
//!
//! Storage is a plain key-value text store ([`KeyValueStore`]); the inquiry
//! log is one JSON array under a single key, appended to and never edited.

pub mod error;
pub mod inquiries;
pub mod storage;
pub mod submit;

pub use error::StoreError;
pub use inquiries::{InquiryRecord, InquiryStore};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage};
pub use submit::{submit, submit_at, Receipt, SubmitOutcome};
