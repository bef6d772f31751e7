//! Application-wide state shared by the dashboard components.
//!
//! All mutation goes through the methods here; workflows in
//! [`crate::session`], [`crate::registry`] and [`crate::sync`] call them via a
//! [`crate::store::Store`].

use crate::alert::Alert;
use crate::models::Spreadsheet;
use crate::registry::CreateForm;
use crate::session::Session;

/// Ticket for one list request. Newer tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ListTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: Session,
    pub spreadsheets: Vec<Spreadsheet>,
    pub alert: Option<Alert>,
    pub create_form: CreateForm,
    pub show_create_dialog: bool,
    in_flight: u32,
    last_list_issued: u64,
    last_list_applied: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while any action is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn begin_activity(&mut self) {
        self.in_flight += 1;
    }

    pub fn end_activity(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn show_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Start a list request and get its ticket.
    pub fn begin_list(&mut self) -> ListTicket {
        self.begin_activity();
        self.last_list_issued += 1;
        ListTicket(self.last_list_issued)
    }

    /// Apply a list response. Responses issued before the last applied one
    /// are discarded; returns whether `spreadsheets` was replaced.
    pub fn apply_list(&mut self, ticket: ListTicket, spreadsheets: Vec<Spreadsheet>) -> bool {
        self.end_activity();
        if ticket.0 <= self.last_list_applied {
            log::debug!(
                "Discarding stale spreadsheet list (request {}, already applied {})",
                ticket.0,
                self.last_list_applied
            );
            return false;
        }
        self.last_list_applied = ticket.0;
        self.spreadsheets = spreadsheets;
        true
    }

    /// Close a list request that failed.
    pub fn fail_list(&mut self, alert: Alert) {
        self.end_activity();
        self.show_alert(alert);
    }

    /// Forget everything tied to the signed-in user.
    pub fn reset_session(&mut self) {
        self.session = Session::SignedOut;
        self.spreadsheets.clear();
        self.create_form = CreateForm::default();
        self.show_create_dialog = false;
    }

    pub fn open_create_dialog(&mut self) {
        self.show_create_dialog = true;
    }

    pub fn close_create_dialog(&mut self) {
        self.show_create_dialog = false;
    }
}
