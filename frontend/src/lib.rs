//! Stock Portfolio Manager - Frontend Rust/Leptos Application
//!
//! A WebAssembly client for managing portfolio spreadsheets: sign in with
//! Google, create and delete spreadsheets, upload broker CSV exports and
//! trigger a backend sync.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (user menu: debug session, sign out)                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                │
//! │  ├── AlertBanner                                            │
//! │  ├── Landing (signed out)                                   │
//! │  └── Hero, SpreadsheetTable, FileUploader, SyncSection      │
//! │  CreateSpreadsheetDialog (modal)                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All behaviour lives in `portfolio_core`; this crate wires it to `fetch`,
//! the DOM and Leptos signals.
//!
//! # Modules
//!
//! - [`types`] - Client type aliases
//! - [`components`] - UI components
//! - [`services`] - Transport, browser effects, state store, app context

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use portfolio_core::Session;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

pub use components::*;
pub use config::*;
pub use services::{AppContext, BrowserEnvironment, FetchTransport, SignalStore};
pub use types::PortfolioClient;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Panic hook and console logging.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    log::info!("📊 {} - Starting Leptos App", APP_NAME);
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    let state = ctx.state;

    // Who is signed in decides everything else on the page.
    ctx.bootstrap();

    let signed_in = move || state.with(|s| s.session.is_signed_in());
    let signed_out = move || state.with(|s| s.session == Session::SignedOut);

    view! {
        <Header/>

        <div class="container">
            <AlertBanner/>

            <Show
                when=signed_in
                fallback=move || view! {
                    <Show
                        when=signed_out
                        fallback=|| view! {
                            <div class="text-center text-muted py-5">"Loading..."</div>
                        }
                    >
                        <Landing/>
                    </Show>
                }
            >
                <Hero/>
                <SpreadsheetTable/>
                <FileUploader/>
                <SyncSection/>
            </Show>
        </div>

        <CreateSpreadsheetDialog/>
        <Footer/>
    }
}
