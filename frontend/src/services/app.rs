//! Application context shared by every component.
//!
//! Components take the context from Leptos and call one of the action
//! methods; each spawns the matching workflow from `portfolio_core`.

use std::rc::Rc;

use leptos::*;
use portfolio_core::{registry, session, sync, ActionError, Alert, AppState, Store};

use crate::config::client_config;
use crate::services::browser::BrowserEnvironment;
use crate::services::http::FetchTransport;
use crate::services::store::SignalStore;
use crate::types::PortfolioClient;

#[derive(Clone, Copy)]
pub struct AppContext {
    client: StoredValue<Rc<PortfolioClient>>,
    pub state: SignalStore<AppState>,
}

impl AppContext {
    pub fn new() -> Self {
        let client = PortfolioClient::new(client_config(), FetchTransport, BrowserEnvironment);
        log::info!("🔌 Backend: {}", client.config().base_url());
        Self {
            client: store_value(Rc::new(client)),
            state: SignalStore::new(AppState::new()),
        }
    }

    pub fn client(&self) -> Rc<PortfolioClient> {
        self.client.get_value()
    }

    pub fn login_url(&self) -> String {
        self.client.with_value(|client| client.login_url())
    }

    /// Resolve the signed-in user, then load the list.
    pub fn bootstrap(self) {
        let api = self.client();
        spawn_local(async move { session::bootstrap(&*api, &self.state).await });
    }

    pub fn refresh(self) {
        let api = self.client();
        spawn_local(async move { registry::refresh(&*api, &self.state).await });
    }

    pub fn create(self) {
        let api = self.client();
        spawn_local(async move {
            let result = registry::create(&*api, &self.state).await;
            self.report("create", result);
        });
    }

    pub fn delete(self, url: String) {
        let api = self.client();
        spawn_local(async move {
            let result = registry::delete(&*api, &self.state, &url).await;
            self.report("delete", result);
        });
    }

    pub fn open(self, url: &str) {
        self.client.with_value(|client| registry::open(client.env(), url));
    }

    pub fn sync(self) {
        let api = self.client();
        spawn_local(async move {
            let result = sync::sync_all(&*api, &self.state).await;
            self.report("sync", result);
        });
    }

    pub fn sign_out(self) {
        let api = self.client();
        spawn_local(async move {
            let result = session::sign_out(&*api, &self.state).await;
            self.report("sign out", result);
        });
    }

    pub fn debug_session(self) {
        let api = self.client();
        spawn_local(async move {
            let result = session::debug_session(&*api).await.map(|_| ());
            self.report("debug session", result);
        });
    }

    /// Surface errors the workflow did not alert on itself.
    fn report(self, action: &str, result: Result<(), ActionError>) {
        let Err(e) = result else {
            return;
        };
        match &e {
            ActionError::Api(_) => log::warn!("{} failed: {}", action, e),
            ActionError::Cancelled => log::debug!("{} cancelled", action),
            _ => {
                log::warn!("{} not started: {}", action, e);
                if let Some(alert) = Alert::for_action_error(&e, action) {
                    self.state.write(|state| state.show_alert(alert));
                }
            }
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

