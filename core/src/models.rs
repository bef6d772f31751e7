//! Wire and domain models shared by the workflows.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::MultipartForm;
use crate::config::{ACCOUNT_TYPE, SPREADSHEET_TYPE};
use crate::participants::Participant;

// =============================================================================
// Session
// =============================================================================

/// The signed-in user as reported by `/auth/user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// =============================================================================
// Spreadsheets
// =============================================================================

/// Broker metadata attached to a spreadsheet at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpreadsheetMetadata {
    #[serde(default)]
    pub participant_name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub account_type: String,
}

/// A spreadsheet owned by the current user.
///
/// Fields the client does not know about are kept in `extra` so the list can
/// be posted back to `/data/sync` unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spreadsheet {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub date_created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SpreadsheetMetadata>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Spreadsheet {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            date_created: String::new(),
            metadata: None,
            extra: Map::new(),
        }
    }

    pub fn id(&self) -> Option<SpreadsheetId> {
        SpreadsheetId::from_url(&self.url)
    }

    /// Broker identifier, if the spreadsheet carries metadata.
    pub fn participant_name(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .map(|m| m.participant_name.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Creation date parsed from `date_created`.
    pub fn created_on(&self) -> Option<NaiveDate> {
        parse_date(&self.date_created)
    }
}

/// Accepts RFC 3339, RFC 2822 / HTTP-date and naive ISO date-times.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    // HTTP-date ends in "GMT", which RFC 2822 parsing accepts.
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Identifier embedded in a spreadsheet URL (`.../d/<id>/...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpreadsheetId(String);

impl SpreadsheetId {
    /// Extract the id from the path segment following the first `/d/`.
    pub fn from_url(url: &str) -> Option<Self> {
        let rest = url.split("/d/").nth(1)?;
        let id = rest
            .split(|c| c == '/' || c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        if id.is_empty() {
            None
        } else {
            Some(Self(id.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpreadsheetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `POST /spreadsheets/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSpreadsheet {
    pub title: String,
    pub metadata: SpreadsheetMetadata,
}

impl NewSpreadsheet {
    pub fn new(title: &str, participant: &Participant, now: DateTime<Utc>) -> Self {
        Self {
            title: title.to_string(),
            metadata: SpreadsheetMetadata {
                participant_name: participant.value.to_string(),
                created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
                account_type: ACCOUNT_TYPE.to_string(),
            },
        }
    }
}

/// Body of `POST /data/sync`.
#[derive(Debug, Clone, Serialize)]
pub struct SyncRequest<'a> {
    pub spreadsheets: &'a [Spreadsheet],
}

// =============================================================================
// Uploads
// =============================================================================

/// A file selected for upload, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type,
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Everything one `/data/add` submission needs. Consumed by the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadBatch {
    pub files: Vec<UploadFile>,
    pub title: String,
    pub spreadsheet_url: String,
    pub spreadsheet_type: String,
}

impl UploadBatch {
    pub fn new(files: Vec<UploadFile>, title: String, spreadsheet_url: String) -> Self {
        Self {
            files,
            title,
            spreadsheet_url,
            spreadsheet_type: SPREADSHEET_TYPE.to_string(),
        }
    }

    /// Multipart body: one `file[]` part per file, then the text fields.
    pub fn into_form(self) -> MultipartForm {
        let mut form = MultipartForm::new();
        for file in self.files {
            form = form.file("file[]", file);
        }
        form.text("spreadsheet_url", self.spreadsheet_url)
            .text("title", self.title)
            .text("spreadsheet_type", self.spreadsheet_type)
    }
}

/// Pull a human-readable `message` out of a backend JSON reply.
pub fn response_message(value: &Value) -> Option<String> {
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FormPart;
    use crate::participants;
    use chrono::TimeZone;

    #[test]
    fn test_spreadsheet_id_extraction() {
        let id = SpreadsheetId::from_url(
            "https://docs.google.com/spreadsheets/d/1AbC-xyz_09/edit#gid=0",
        );
        assert_eq!(id.unwrap().as_str(), "1AbC-xyz_09");

        let id = SpreadsheetId::from_url("https://docs.google.com/spreadsheets/d/abc");
        assert_eq!(id.unwrap().as_str(), "abc");

        let id = SpreadsheetId::from_url("https://docs.google.com/spreadsheets/d/abc?usp=sharing");
        assert_eq!(id.unwrap().as_str(), "abc");
    }

    #[test]
    fn test_spreadsheet_id_rejects_urls_without_marker() {
        assert!(SpreadsheetId::from_url("https://docs.google.com/spreadsheets/").is_none());
        assert!(SpreadsheetId::from_url("").is_none());
        assert!(SpreadsheetId::from_url("https://example.com/d//edit").is_none());
    }

    #[test]
    fn test_spreadsheet_deserialization_keeps_unknown_fields() {
        let json = r#"{
            "title": "Jan2024",
            "url": "https://docs.google.com/spreadsheets/d/abc/edit",
            "date_created": "Tue, 02 Jan 2024 10:00:00 GMT",
            "metadata": {
                "participant_name": "zerodha",
                "created_at": "2024-01-02T10:00:00.000Z",
                "account_type": "demat"
            },
            "owner_id": 7
        }"#;

        let sheet: Spreadsheet = serde_json::from_str(json).unwrap();
        assert_eq!(sheet.title, "Jan2024");
        assert_eq!(sheet.participant_name(), Some("zerodha"));
        assert_eq!(sheet.id().unwrap().as_str(), "abc");
        assert_eq!(sheet.created_on(), NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(sheet.extra.get("owner_id"), Some(&Value::from(7)));

        let back = serde_json::to_value(&sheet).unwrap();
        assert_eq!(back["owner_id"], 7);
    }

    #[test]
    fn test_spreadsheet_without_metadata() {
        let json = r#"{"title": "Old", "url": "https://x/d/id1/"}"#;
        let sheet: Spreadsheet = serde_json::from_str(json).unwrap();
        assert!(sheet.metadata.is_none());
        assert!(sheet.participant_name().is_none());
        assert!(sheet.created_on().is_none());
    }

    #[test]
    fn test_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9);
        assert_eq!(parse_date("2024-03-09T08:15:00+05:30"), expected);
        assert_eq!(parse_date("2024-03-09T08:15:00.123456"), expected);
        assert_eq!(parse_date("2024-03-09 08:15:00"), expected);
        assert_eq!(parse_date("2024-03-09"), expected);
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn test_upload_file_size() {
        let file = UploadFile::new("trades.csv", None, b"date,symbol,qty\n".to_vec());
        assert_eq!(file.size(), 16);
        assert_eq!(UploadFile::new("empty.csv", None, Vec::new()).size(), 0);
    }

    #[test]
    fn test_new_spreadsheet_body() {
        let zerodha = participants::find("zerodha").unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
        let body = serde_json::to_value(NewSpreadsheet::new("Jan2024", zerodha, now)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "title": "Jan2024",
                "metadata": {
                    "participant_name": "zerodha",
                    "created_at": "2024-01-05T09:30:00.000Z",
                    "account_type": "demat"
                }
            })
        );
    }

    #[test]
    fn test_upload_batch_form_layout() {
        let batch = UploadBatch::new(
            vec![
                UploadFile::new("a.csv", Some("text/csv".into()), b"x".to_vec()),
                UploadFile::new("b.csv", None, b"y".to_vec()),
            ],
            "Jan2024".into(),
            "https://x/d/abc/edit".into(),
        );
        let form = batch.into_form();
        let names: Vec<&str> = form.parts().iter().map(FormPart::name).collect();
        assert_eq!(
            names,
            ["file[]", "file[]", "spreadsheet_url", "title", "spreadsheet_type"]
        );
        assert_eq!(form.text_value("spreadsheet_type"), Some("sheets"));
        assert_eq!(form.text_value("spreadsheet_url"), Some("https://x/d/abc/edit"));
    }

    #[test]
    fn test_response_message() {
        let value = serde_json::json!({"message": "Data uploaded successfully"});
        assert_eq!(
            response_message(&value).as_deref(),
            Some("Data uploaded successfully")
        );
        assert_eq!(response_message(&Value::Null), None);
    }
}
