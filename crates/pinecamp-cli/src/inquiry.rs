//! Inquiry command handlers for the CLI.
//!
//! These stand in for the booking page: `submit` plays the form's submit
//! button and `list` reads back what the page kept locally.

use std::io::Write;

use pinecamp_core::{AppConfig, FormSnapshot};
use pinecamp_store::{submit, FileStorage, InquiryRecord, InquiryStore, SubmitOutcome};

/// Parse a `KEY=VALUE` form field argument.
pub(crate) fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("field name is empty in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn open_store(config: &AppConfig) -> InquiryStore<FileStorage> {
    InquiryStore::new(FileStorage::new(&config.data_dir), config.store_key.clone())
}

/// Build the snapshot the form would send and run it through the submit
/// pipeline, printing the confirmation or the field errors.
///
/// Returns whether the inquiry was accepted. Storage problems only produce a
/// warning since the confirmation does not depend on the local copy.
pub(crate) fn run_submit(
    config: &AppConfig,
    name: String,
    phone: String,
    email: String,
    privacy: bool,
    fields: Vec<(String, String)>,
) -> bool {
    let mut entries = vec![
        ("name".to_string(), name),
        ("phone".to_string(), phone),
        ("email".to_string(), email),
    ];
    if privacy {
        entries.push(("privacy".to_string(), "on".to_string()));
    }
    entries.extend(fields);
    let snapshot = FormSnapshot::from_entries(entries);

    let mut store = open_store(config);
    match submit(&mut store, snapshot) {
        SubmitOutcome::Rejected(result) => {
            for error in result.errors() {
                eprintln!("{error}");
            }
            false
        }
        SubmitOutcome::Accepted(receipt) => {
            if let Some(warning) = &receipt.storage_warning {
                eprintln!("warning: inquiry was not saved locally: {warning}");
            }
            println!("{}", pinecamp_core::Confirmation::default());
            true
        }
    }
}

/// Print stored inquiries, oldest first.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the records cannot be
/// encoded as JSON.
pub(crate) fn run_list(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    write_list(&mut std::io::stdout().lock(), config, json)
}

fn write_list(out: &mut impl Write, config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let store = open_store(config);
    let records = store.records()?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
        return Ok(());
    }

    if records.is_empty() {
        writeln!(out, "no inquiries stored under '{}'", store.key())?;
        return Ok(());
    }
    for record in &records {
        writeln!(out, "{}", format_record_line(record))?;
    }
    Ok(())
}

fn format_record_line(record: &InquiryRecord) -> String {
    let snapshot = &record.snapshot;
    let mut line = format!(
        "{}  {}  {}",
        record.timestamp.format("%Y-%m-%d %H:%M"),
        snapshot.name,
        snapshot.phone
    );
    if !snapshot.email.is_empty() {
        line.push_str("  ");
        line.push_str(&snapshot.email);
    }
    for (key, value) in &snapshot.extra {
        if !value.is_empty() {
            line.push_str(&format!("  {key}={value}"));
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pinecamp_core::Environment;

    use super::*;

    fn test_config(dir: &tempfile::TempDir) -> AppConfig {
        AppConfig {
            env: Environment::Test,
            log_level: "info".to_string(),
            data_dir: dir.path().to_path_buf(),
            store_key: "pc_inquiries".to_string(),
        }
    }

    fn submit_kim(config: &AppConfig, privacy: bool) -> bool {
        run_submit(
            config,
            "Kim".to_string(),
            "01012345678".to_string(),
            String::new(),
            privacy,
            vec![("checkin".to_string(), "2026-11-01".to_string())],
        )
    }

    fn list_output(config: &AppConfig, json: bool) -> String {
        let mut out = Vec::new();
        write_list(&mut out, config, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn run_submit_without_consent_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);

        assert!(!submit_kim(&config, false));
        assert!(!dir.path().join("pc_inquiries.json").exists());
    }

    #[test]
    fn run_submit_appends_one_record() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);

        assert!(submit_kim(&config, true));

        let records = open_store(&config).records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].snapshot.name, "Kim");
        assert_eq!(records[0].snapshot.phone, "010-1234-5678");
        assert_eq!(records[0].snapshot.field("checkin"), Some("2026-11-01"));
    }

    #[test]
    fn run_list_on_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);

        run_list(&config, false).unwrap();
        assert_eq!(
            list_output(&config, false),
            "no inquiries stored under 'pc_inquiries'\n"
        );
        assert_eq!(list_output(&config, true).trim(), "[]");
    }

    #[test]
    fn run_list_prints_oldest_first() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let mut store = open_store(&config);
        for (name, hour) in [("Kim", 8), ("Lee", 9)] {
            store
                .append_at(
                    FormSnapshot::new(name, "010-1234-5678", "", true),
                    Utc.with_ymd_and_hms(2026, 10, 19, hour, 30, 0).unwrap(),
                )
                .unwrap();
        }

        run_list(&config, true).unwrap();
        assert_eq!(
            list_output(&config, false),
            "2026-10-19 08:30  Kim  010-1234-5678\n2026-10-19 09:30  Lee  010-1234-5678\n"
        );

        let json: serde_json::Value = serde_json::from_str(&list_output(&config, true)).unwrap();
        assert_eq!(json[0]["name"], "Kim");
        assert_eq!(json[1]["name"], "Lee");
    }

    #[test]
    fn parse_field_splits_on_first_equals() {
        assert_eq!(
            parse_field("message=a=b").unwrap(),
            ("message".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_field("checkin=").unwrap(),
            ("checkin".to_string(), String::new())
        );
    }

    #[test]
    fn parse_field_rejects_missing_equals_or_key() {
        assert!(parse_field("checkin").is_err());
        assert!(parse_field("=value").is_err());
    }

    #[test]
    fn record_line_skips_blank_optional_fields() {
        let snapshot = FormSnapshot::new("Kim", "010-1234-5678", "", true)
            .with_field("checkin", "2026-11-01")
            .with_field("message", "");
        let record = InquiryRecord::new(
            snapshot,
            Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap(),
        );
        assert_eq!(
            format_record_line(&record),
            "2026-10-19 08:30  Kim  010-1234-5678  checkin=2026-11-01"
        );
    }
}
