//! Common types used across the frontend application.

use portfolio_core::ApiClient;

use crate::services::{BrowserEnvironment, FetchTransport};

/// The API client as wired in the browser.
pub type PortfolioClient = ApiClient<FetchTransport, BrowserEnvironment>;
