use chrono::TimeZone;

use super::*;
use crate::storage::MemoryStorage;

const KEY: &str = "pc_inquiries";

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, hour, minute, 0).unwrap()
}

fn snapshot(name: &str) -> FormSnapshot {
    FormSnapshot::new(name, "010-1234-5678", "", true)
}

fn store() -> InquiryStore<MemoryStorage> {
    InquiryStore::new(MemoryStorage::new(), KEY)
}

#[test]
fn empty_store_has_no_records() {
    let store = store();
    assert!(store.records().unwrap().is_empty());
    assert!(store.is_empty().unwrap());
}

#[test]
fn append_grows_by_one_and_keeps_prior_records_in_order() {
    let mut store = store();
    store.append_at(snapshot("Kim"), at(8, 0)).unwrap();
    store.append_at(snapshot("Lee"), at(8, 5)).unwrap();
    let before = store.records().unwrap();

    let appended = store.append_at(snapshot("Park"), at(8, 10)).unwrap();
    let after = store.records().unwrap();

    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.last(), Some(&appended));
    let names: Vec<&str> = after.iter().map(|r| r.snapshot.name.as_str()).collect();
    assert_eq!(names, ["Kim", "Lee", "Park"]);
}

#[test]
fn append_stamps_timestamp_with_millisecond_precision() {
    let mut store = store();
    let precise = at(9, 15) + chrono::Duration::nanoseconds(123_456_789);
    let record = store.append_at(snapshot("Kim"), precise).unwrap();

    assert_eq!(
        record.timestamp,
        at(9, 15) + chrono::Duration::milliseconds(123)
    );
    assert_eq!(store.records().unwrap(), vec![record]);
}

#[test]
fn append_uses_current_time() {
    let mut store = store();
    let before = Utc::now().trunc_subsecs(3);
    let record = store.append(snapshot("Kim")).unwrap();
    let after = Utc::now();
    assert!(record.timestamp >= before && record.timestamp <= after);
}

#[test]
fn persisted_form_is_flat_string_map() {
    let mut store = store();
    store
        .append_at(snapshot("Kim").with_field("checkin", "2026-11-01"), at(8, 30))
        .unwrap();

    let raw = store.storage().get_item(KEY).unwrap().unwrap();
    let value: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "name": "Kim",
            "phone": "010-1234-5678",
            "email": "",
            "privacy": "on",
            "checkin": "2026-11-01",
            "timestamp": "2026-10-19T08:30:00.000Z",
        }])
    );
}

#[test]
fn timestamp_is_not_captured_as_extra_field() {
    let mut store = store();
    store.append_at(snapshot("Kim"), at(8, 30)).unwrap();
    let records = store.records().unwrap();
    assert!(records[0].snapshot.extra.is_empty());
}

#[test]
fn unparseable_content_is_treated_as_empty() {
    let mut storage = MemoryStorage::new();
    storage.set_item(KEY, "{not json").unwrap();
    let mut store = InquiryStore::new(storage, KEY);

    assert!(store.records().unwrap().is_empty());
    store.append_at(snapshot("Kim"), at(8, 0)).unwrap();
    assert_eq!(store.len().unwrap(), 1);
}

#[test]
fn non_list_content_is_treated_as_empty() {
    for content in ["null", "{}", "\"text\"", "42"] {
        let mut storage = MemoryStorage::new();
        storage.set_item(KEY, content).unwrap();
        let mut store = InquiryStore::new(storage, KEY);
        store.append_at(snapshot("Kim"), at(8, 0)).unwrap();
        assert_eq!(store.len().unwrap(), 1, "content {content:?}");
    }
}

#[test]
fn foreign_entries_are_preserved_but_not_listed() {
    let mut storage = MemoryStorage::new();
    storage
        .set_item(KEY, r#"[{"name":"legacy","guests":2}]"#)
        .unwrap();
    let mut store = InquiryStore::new(storage, KEY);

    store.append_at(snapshot("Kim"), at(8, 0)).unwrap();

    assert_eq!(store.len().unwrap(), 2);
    let records = store.records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].snapshot.name, "Kim");

    let raw = store.storage().get_item(KEY).unwrap().unwrap();
    let value: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0], serde_json::json!({"name": "legacy", "guests": 2}));
}

#[test]
fn records_written_by_the_site_are_readable() {
    let mut storage = MemoryStorage::new();
    storage
        .set_item(
            KEY,
            r#"[{"name":"Kim","phone":"010-1234-5678","email":"","checkin":"2026-11-01","message":"","privacy":"on","timestamp":"2026-10-19T08:30:00.000Z"}]"#,
        )
        .unwrap();
    let store = InquiryStore::new(storage, KEY);

    let records = store.records().unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.snapshot.name, "Kim");
    assert!(record.snapshot.privacy_accepted);
    assert_eq!(record.snapshot.field("checkin"), Some("2026-11-01"));
    assert_eq!(record.snapshot.field("message"), Some(""));
    assert_eq!(record.timestamp, at(8, 30));
}

#[test]
fn store_uses_its_own_key() {
    let mut storage = MemoryStorage::new();
    storage.set_item("other", "[1,2,3]").unwrap();
    let mut store = InquiryStore::new(storage, KEY);
    store.append_at(snapshot("Kim"), at(8, 0)).unwrap();

    assert_eq!(store.key(), KEY);
    assert_eq!(
        store.storage().get_item("other").unwrap().as_deref(),
        Some("[1,2,3]")
    );
}
