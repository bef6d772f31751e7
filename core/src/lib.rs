//! # Portfolio Core - client logic for the stock portfolio manager
//!
//! Everything the web client does that is not rendering: talking to the
//! backend, tracking who is signed in, the spreadsheet list, CSV uploads and
//! the sync trigger.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  Components  │──▶│  Workflows   │──▶│  ApiClient   │──▶│  Transport   │
//! │  (frontend)  │   │ session/...  │   │ 401 handling │   │ fetch / mock │
//! └──────────────┘   └──────┬───────┘   └──────┬───────┘   └──────────────┘
//!                           │                  │
//!                    ┌──────▼───────┐   ┌──────▼───────┐
//!                    │ Store<State> │   │ Environment  │
//!                    │ signal / cell│   │ storage, tab │
//!                    └──────────────┘   └──────────────┘
//! ```
//!
//! Workflows are plain `async fn`s generic over the transport, the
//! environment and the store, so the browser build and the unit tests run the
//! same code.
//!
//! ## Modules
//!
//! - [`api`] - HTTP client, transport seam, typed endpoints
//! - [`session`] - sign-in bootstrap, sign-out, session debug
//! - [`registry`] - spreadsheet list, create, delete, open
//! - [`uploader`] - CSV upload state machine
//! - [`sync`] - bulk sync trigger
//! - [`alert`] - user notifications
//! - [`state`] - shared dashboard state
//! - [`participants`] - broker catalog

pub mod alert;
pub mod api;
pub mod config;
pub mod env;
pub mod error;
pub mod models;
pub mod participants;
pub mod registry;
pub mod session;
pub mod state;
pub mod store;
pub mod sync;
pub mod uploader;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use alert::{Alert, AlertKind};
pub use api::{ApiClient, HttpRequest, HttpResponse, Method, RequestBody, Transport};
pub use config::{ClientConfig, REQUEST_TIMEOUT, STATUS_RESET_DELAY};
pub use env::Environment;
pub use error::{ActionError, ActionResult, ApiError, ApiResult, ValidationError};
pub use models::{Spreadsheet, SpreadsheetId, SpreadsheetMetadata, UploadFile, User};
pub use participants::Participant;
pub use registry::CreateForm;
pub use session::Session;
pub use state::AppState;
pub use store::Store;
pub use uploader::{UploadStatus, UploadTicket, UploaderState};
