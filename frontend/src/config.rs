//! Application configuration.
//!
//! The backend host is baked in at build time from the
//! `PORTFOLIO_BACKEND_SERVICE` environment variable, e.g.
//!
//! ```bash
//! PORTFOLIO_BACKEND_SERVICE=api.example.org trunk build --release
//! ```

use portfolio_core::ClientConfig;

/// Backend host as given at build time, if any.
pub const BACKEND_SERVICE: Option<&str> = option_env!("PORTFOLIO_BACKEND_SERVICE");

/// Application name, used for the page title and the navbar.
pub const APP_NAME: &str = "Stock Portfolio Manager";

/// Connection settings for the shared API client.
pub fn client_config() -> ClientConfig {
    ClientConfig::from_env_value(BACKEND_SERVICE)
}
