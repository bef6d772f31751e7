//! UI components for the portfolio dashboard.
//!
//! # Layout Components
//! - [`Header`] - Navbar with the user menu
//! - [`Hero`] - Welcome card
//! - [`Landing`] - Sign-in card
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`AlertBanner`] - Current alert, dismissible
//! - [`SpreadsheetTable`] - Spreadsheet list with open/delete
//! - [`CreateSpreadsheetDialog`] - New spreadsheet form
//! - [`FileUploader`] - CSV upload into a spreadsheet
//! - [`SyncSection`] - "Sync All Data" trigger

mod alert;
mod create_dialog;
mod footer;
mod header;
mod hero;
mod spreadsheets;
mod sync;
mod uploader;

pub use alert::*;
pub use create_dialog::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use spreadsheets::*;
pub use sync::*;
pub use uploader::*;
