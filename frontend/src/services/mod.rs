//! Browser-facing services.
//!
//! # Services
//!
//! - [`http`] - `fetch` transport for the API client
//! - [`browser`] - storage, cookies, navigation and dialogs
//! - [`files`] - reading selected CSV files
//! - [`store`] - signal-backed state store
//! - [`app`] - shared context and action dispatch

pub mod app;
pub mod browser;
pub mod files;
pub mod http;
pub mod store;

pub use app::*;
pub use browser::*;
pub use files::*;
pub use http::*;
pub use store::*;
