//! JSON backup files
//!
//! A backup is a snapshot of the in-memory list plus the scope it came from.
//! `path_entries` is the authoritative content; `path_value` is written for
//! people reading the file and is never parsed back.

use crate::error::{PathEditorError, Result};
use crate::path_list::PathList;
use crate::scope::Scope;
use chrono::{DateTime, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Format tag written to every backup
pub const BACKUP_VERSION: &str = "1.0";

const INVALID_FORMAT: &str = "Invalid PATH backup file format";
const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupDocument {
    #[serde(default)]
    pub path_value: String,
    pub path_entries: Vec<String>,
    pub backup_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_type: Option<Scope>,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    BACKUP_VERSION.to_string()
}

impl BackupDocument {
    /// Snapshot `list` as it currently is in the session.
    pub fn export(list: &PathList, scope: Scope, now: NaiveDateTime) -> Self {
        Self {
            path_value: list.serialize(),
            path_entries: list.entries().to_vec(),
            backup_date: iso_timestamp(now),
            path_type: Some(scope),
            version: BACKUP_VERSION.to_string(),
        }
    }

    /// Parse and validate a backup.
    ///
    /// A document without `path_entries` is rejected outright; so is one whose
    /// `backup_date` cannot be shown in the restore prompt.
    pub fn parse(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.get("path_entries").is_none() {
            return Err(PathEditorError::InvalidBackup(INVALID_FORMAT.to_string()));
        }
        let doc: Self = serde_json::from_value(value)?;
        doc.timestamp()?;
        Ok(doc)
    }

    pub fn read_from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let doc = Self::parse(&json)?;
        debug!(
            "Read backup {} with {} entries",
            path.display(),
            doc.path_entries.len()
        );
        Ok(doc)
    }

    /// Write as UTF-8 JSON indented with four spaces.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut serializer)?;
        Ok(())
    }

    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.to_writer(&mut buf)?;
        String::from_utf8(buf).map_err(|e| {
            PathEditorError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        info!(
            "Wrote backup {} ({} entries)",
            path.display(),
            self.path_entries.len()
        );
        Ok(())
    }

    /// `backup_date` as a local timestamp.
    pub fn timestamp(&self) -> Result<NaiveDateTime> {
        parse_timestamp(&self.backup_date).ok_or_else(|| {
            PathEditorError::InvalidBackup(format!(
                "Invalid backup date: '{}'",
                self.backup_date
            ))
        })
    }

    /// Text of the "restore this backup?" prompt.
    pub fn confirmation_message(&self) -> Result<String> {
        let date = self.timestamp()?.format(DISPLAY_FORMAT);
        // Anything other than an explicit "user" tag is reported as System.
        let kind = if self.path_type == Some(Scope::User) {
            Scope::User.label()
        } else {
            Scope::System.label()
        };
        Ok(format!(
            "Backup creation date: {date}\nPATH type: {kind}\n\nRestore this PATH copy?"
        ))
    }

    /// Scope to switch to (if the file names one) and the list to install.
    pub fn into_restore(self) -> (Option<Scope>, PathList) {
        (self.path_type, PathList::from_entries(self.path_entries))
    }
}

/// ISO-8601 local time; microseconds are appended only when non-zero.
fn iso_timestamp(now: NaiveDateTime) -> String {
    let micros = now.nanosecond() / 1_000;
    if micros == 0 {
        now.format(ISO_FORMAT).to_string()
    } else {
        format!("{}.{micros:06}", now.format(ISO_FORMAT))
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::from_str(raw)
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

/// Default file name offered by the export dialog.
///
/// `PATH_backup_<user>_<YYYY-MM-DD_HH-MM-SS>.json` for the user scope, with
/// `sys` in place of the user name for the system scope.
pub fn suggested_file_name(scope: Scope, username: Option<&str>, now: NaiveDateTime) -> String {
    let prefix = match scope {
        Scope::User => username.filter(|name| !name.is_empty()).unwrap_or("user"),
        Scope::System => "sys",
    };
    format!("PATH_backup_{prefix}_{}.json", now.format(FILE_STAMP_FORMAT))
}

/// Name of the account running the editor, from `%USERNAME%`.
pub fn current_username() -> Option<String> {
    std::env::var("USERNAME").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 15)
            .unwrap()
            .and_hms_micro_opt(14, 3, 9, 250_000)
            .unwrap()
    }

    fn sample_list() -> PathList {
        PathList::from_raw(r"C:\Windows;C:\Tools\bin")
    }

    #[test]
    fn test_export_fills_every_field() {
        let doc = BackupDocument::export(&sample_list(), Scope::System, fixed_now());
        assert_eq!(doc.path_value, r"C:\Windows;C:\Tools\bin");
        assert_eq!(doc.path_entries, [r"C:\Windows", r"C:\Tools\bin"]);
        assert_eq!(doc.backup_date, "2025-05-15T14:03:09.250000");
        assert_eq!(doc.path_type, Some(Scope::System));
        assert_eq!(doc.version, "1.0");
    }

    #[test]
    fn test_json_layout_uses_four_space_indent_and_field_order() {
        let doc = BackupDocument::export(&sample_list(), Scope::User, fixed_now());
        let json = doc.to_json_string().unwrap();
        let expected = r#"{
    "path_value": "C:\\Windows;C:\\Tools\\bin",
    "path_entries": [
        "C:\\Windows",
        "C:\\Tools\\bin"
    ],
    "backup_date": "2025-05-15T14:03:09.250000",
    "path_type": "user",
    "version": "1.0"
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_non_ascii_is_written_verbatim() {
        let list = PathList::from_raw(r"C:\Użytkownicy\bin");
        let doc = BackupDocument::export(&list, Scope::User, fixed_now());
        let json = doc.to_json_string().unwrap();
        assert!(json.contains(r"Użytkownicy"));
    }

    #[test]
    fn test_parse_round_trip() {
        let doc = BackupDocument::export(&sample_list(), Scope::System, fixed_now());
        let parsed = BackupDocument::parse(&doc.to_json_string().unwrap()).unwrap();
        assert_eq!(parsed, doc);
        let (scope, list) = parsed.into_restore();
        assert_eq!(scope, Some(Scope::System));
        assert_eq!(list, sample_list());
    }

    #[test]
    fn test_parse_requires_path_entries() {
        let json = r#"{"path_value": "C:\\A", "backup_date": "2025-05-15T14:03:09"}"#;
        let err = BackupDocument::parse(json).unwrap_err();
        assert!(matches!(err, PathEditorError::InvalidBackup(_)));
        assert_eq!(err.to_string(), "Invalid PATH backup file format");
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = BackupDocument::parse(r#"["C:\\A"]"#).unwrap_err();
        assert!(matches!(err, PathEditorError::InvalidBackup(_)));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = BackupDocument::parse("{ not json").unwrap_err();
        assert!(matches!(err, PathEditorError::Json(_)));
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let json = r#"{"path_entries": [], "backup_date": "yesterday"}"#;
        let err = BackupDocument::parse(json).unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_parse_rejects_unknown_scope() {
        let json = r#"{"path_entries": [], "backup_date": "2025-05-15T14:03:09", "path_type": "machine"}"#;
        assert!(BackupDocument::parse(json).is_err());
    }

    #[test]
    fn test_path_value_is_not_reparsed() {
        let json = r#"{
            "path_value": "C:\\Ignored",
            "path_entries": ["C:\\Kept"],
            "backup_date": "2025-05-15T14:03:09"
        }"#;
        let (scope, list) = BackupDocument::parse(json).unwrap().into_restore();
        assert_eq!(scope, None);
        assert_eq!(list.entries(), [r"C:\Kept"]);
    }

    #[test]
    fn test_backup_date_omits_zero_fraction() {
        let whole = NaiveDate::from_ymd_opt(2025, 5, 15)
            .unwrap()
            .and_hms_opt(14, 3, 9)
            .unwrap();
        assert_eq!(iso_timestamp(whole), "2025-05-15T14:03:09");

        let micro = NaiveDate::from_ymd_opt(2025, 5, 15)
            .unwrap()
            .and_hms_micro_opt(14, 3, 9, 42)
            .unwrap();
        assert_eq!(iso_timestamp(micro), "2025-05-15T14:03:09.000042");
    }

    #[test]
    fn test_timestamp_accepts_common_iso_forms() {
        for raw in [
            "2025-05-15T14:03:09",
            "2025-05-15T14:03:09.250000",
            "2025-05-15 14:03:09",
            "2025-05-15T14:03:09+02:00",
        ] {
            let parsed = parse_timestamp(raw).unwrap_or_else(|| panic!("{raw} should parse"));
            assert_eq!(parsed.format(DISPLAY_FORMAT).to_string(), "15.05.2025 14:03:09");
        }
    }

    #[test]
    fn test_confirmation_message() {
        let doc = BackupDocument::export(&sample_list(), Scope::User, fixed_now());
        assert_eq!(
            doc.confirmation_message().unwrap(),
            "Backup creation date: 15.05.2025 14:03:09\nPATH type: User\n\nRestore this PATH copy?"
        );

        let mut untagged = doc;
        untagged.path_type = None;
        assert!(untagged
            .confirmation_message()
            .unwrap()
            .contains("PATH type: System"));
    }

    #[test]
    fn test_suggested_file_name() {
        let now = fixed_now();
        assert_eq!(
            suggested_file_name(Scope::User, Some("alice"), now),
            "PATH_backup_alice_2025-05-15_14-03-09.json"
        );
        assert_eq!(
            suggested_file_name(Scope::User, None, now),
            "PATH_backup_user_2025-05-15_14-03-09.json"
        );
        assert_eq!(
            suggested_file_name(Scope::System, Some("alice"), now),
            "PATH_backup_sys_2025-05-15_14-03-09.json"
        );
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backup.json");
        let doc = BackupDocument::export(&sample_list(), Scope::User, fixed_now());
        doc.write_to_file(&path).unwrap();
        assert_eq!(BackupDocument::read_from_file(&path).unwrap(), doc);
    }
}
