//! CSV upload into an existing spreadsheet.
//!
//! ```text
//! Idle ──files──▶ Selecting ──title matches──▶ Ready ──submit──▶ Submitting
//!   ▲                                                              │
//!   └────────── reset (after STATUS_RESET_DELAY) ◀── Succeeded | Failed
//! ```
//!
//! The selected files are moved into the [`UploadBatch`] when submission
//! starts, so a finished upload always returns to `Idle`.

use crate::api::{ApiClient, Transport};
use crate::env::Environment;
use crate::error::{ActionError, ActionResult, ApiError, ValidationError};
use crate::models::{Spreadsheet, UploadBatch, UploadFile};
use crate::store::Store;

/// Why an upload failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFailure {
    SessionExpired,
    Rejected,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadStatus {
    /// Nothing selected.
    #[default]
    Idle,
    /// Files selected, no matching spreadsheet yet.
    Selecting,
    /// Files selected and a target spreadsheet resolved.
    Ready,
    Submitting,
    Succeeded,
    Failed(UploadFailure),
}

impl UploadStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadStatus::Succeeded | UploadStatus::Failed(_))
    }

    /// Status line for the UI, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            UploadStatus::Submitting => Some("⏳ Uploading started..."),
            UploadStatus::Succeeded => Some("✅ Uploaded successfully!"),
            UploadStatus::Failed(UploadFailure::SessionExpired) => {
                Some("🔒 Session expired. Please sign in again.")
            }
            UploadStatus::Failed(UploadFailure::Rejected) => Some("❌ Upload failed!"),
            _ => None,
        }
    }
}

/// Identifies one submission, so a delayed reset only touches its own result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploaderState {
    files: Vec<UploadFile>,
    title: String,
    target_url: Option<String>,
    status: UploadStatus,
    submissions: u64,
}

impl UploaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    pub fn files(&self) -> &[UploadFile] {
        &self.files
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn target_url(&self) -> Option<&str> {
        self.target_url.as_deref()
    }

    /// File selection is refused while an upload is in flight.
    pub fn can_select(&self) -> bool {
        self.status != UploadStatus::Submitting
    }

    /// Whether "Add Data" is enabled.
    pub fn can_submit(&self) -> bool {
        self.status == UploadStatus::Ready
    }

    /// Replace the file selection. Returns `false` if the selection was
    /// rejected because an upload is in flight.
    pub fn select_files(&mut self, files: Vec<UploadFile>, spreadsheets: &[Spreadsheet]) -> bool {
        if !self.can_select() {
            log::warn!("Ignoring file selection while an upload is in flight");
            return false;
        }
        self.files = files;
        self.resolve(spreadsheets);
        true
    }

    pub fn set_title(&mut self, title: impl Into<String>, spreadsheets: &[Spreadsheet]) {
        self.title = title.into();
        self.resolve(spreadsheets);
    }

    /// Re-run target resolution, e.g. after the spreadsheet list changed.
    pub fn refresh_target(&mut self, spreadsheets: &[Spreadsheet]) {
        self.resolve(spreadsheets);
    }

    /// Freeze the current selection into a batch and mark it in flight.
    pub fn begin_submit(&mut self) -> Result<(UploadTicket, UploadBatch), ActionError> {
        match self.status {
            UploadStatus::Ready => {}
            UploadStatus::Submitting => return Err(ActionError::Busy),
            _ if self.files.is_empty() => return Err(ValidationError::NoFiles.into()),
            _ => return Err(ValidationError::NoTargetSpreadsheet(self.title.clone()).into()),
        }
        let Some(url) = self.target_url.clone() else {
            return Err(ValidationError::NoTargetSpreadsheet(self.title.clone()).into());
        };

        self.submissions += 1;
        self.status = UploadStatus::Submitting;
        let files = std::mem::take(&mut self.files);
        let batch = UploadBatch::new(files, self.title.clone(), url);
        Ok((UploadTicket(self.submissions), batch))
    }

    /// Record the outcome and clear title and target.
    pub fn finish_submit(&mut self, ticket: UploadTicket, result: &Result<(), ApiError>) {
        if ticket.0 != self.submissions {
            return;
        }
        self.status = match result {
            Ok(()) => UploadStatus::Succeeded,
            Err(e) if e.is_authentication_required() => {
                UploadStatus::Failed(UploadFailure::SessionExpired)
            }
            Err(_) => UploadStatus::Failed(UploadFailure::Rejected),
        };
        self.title.clear();
        self.target_url = None;
    }

    /// Leave the terminal state of `ticket`'s submission. No-op if a newer
    /// submission has started or the result was already cleared.
    pub fn reset_status(&mut self, ticket: UploadTicket) {
        if ticket.0 == self.submissions && self.status.is_terminal() {
            self.status = self.derived_status();
        }
    }

    fn resolve(&mut self, spreadsheets: &[Spreadsheet]) {
        self.target_url = resolve_target(&self.files, &self.title, spreadsheets);
        if !self.status.is_terminal() && self.status != UploadStatus::Submitting {
            self.status = self.derived_status();
        }
    }

    fn derived_status(&self) -> UploadStatus {
        match (self.files.is_empty(), self.target_url.is_some()) {
            (true, _) => UploadStatus::Idle,
            (false, false) => UploadStatus::Selecting,
            (false, true) => UploadStatus::Ready,
        }
    }
}

/// URL of the first spreadsheet titled exactly `title`, if files are selected.
pub fn resolve_target(
    files: &[UploadFile],
    title: &str,
    spreadsheets: &[Spreadsheet],
) -> Option<String> {
    if files.is_empty() {
        return None;
    }
    spreadsheets
        .iter()
        .find(|sheet| sheet.title == title)
        .map(|sheet| sheet.url.clone())
}

/// Submit the current selection to `/data/add`.
///
/// Returns the ticket to pass to [`UploaderState::reset_status`] once
/// [`crate::config::STATUS_RESET_DELAY`] has elapsed.
pub async fn submit<T, E, S>(api: &ApiClient<T, E>, store: &S) -> ActionResult<UploadTicket>
where
    T: Transport,
    E: Environment,
    S: Store<UploaderState>,
{
    let (ticket, batch) = store
        .write(UploaderState::begin_submit)
        .ok_or(ActionError::Detached)??;

    log::info!(
        "📤 Uploading {} file(s) to '{}'...",
        batch.files.len(),
        batch.title
    );
    let result = api.add_data(batch).await.map(|_| ());

    match &result {
        Ok(()) => log::info!("✅ Upload finished"),
        Err(e) => log::error!("Error uploading files: {}", e),
    }
    store.write(|state| state.finish_submit(ticket, &result));
    Ok(ticket)
}
