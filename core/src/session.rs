//! Who is signed in, and the workflows that change it.

use serde_json::Value;

use crate::alert::Alert;
use crate::api::{ApiClient, Transport};
use crate::env::Environment;
use crate::error::{ActionError, ActionResult};
use crate::models::User;
use crate::registry;
use crate::state::AppState;
use crate::store::Store;

/// Authentication state of the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// `/auth/user` has not answered yet.
    #[default]
    Pending,
    SignedIn(User),
    SignedOut,
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::SignedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Session::SignedIn(_))
    }
}

/// Ask the backend who we are; on success load the spreadsheet list.
///
/// Any failure leaves the page signed out.
pub async fn bootstrap<T, E, S>(api: &ApiClient<T, E>, store: &S)
where
    T: Transport,
    E: Environment,
    S: Store<AppState>,
{
    match api.current_user().await {
        Ok(user) => {
            log::info!("👤 Signed in as {}", user.name);
            if store
                .write(|state| state.session = Session::SignedIn(user))
                .is_some()
            {
                registry::refresh(api, store).await;
            }
        }
        Err(e) => {
            log::error!("Error fetching user data: {}", e);
            store.write(|state| state.session = Session::SignedOut);
        }
    }
}

/// End the server session, then wipe every trace of it locally and reload.
pub async fn sign_out<T, E, S>(api: &ApiClient<T, E>, store: &S) -> ActionResult<()>
where
    T: Transport,
    E: Environment,
    S: Store<AppState>,
{
    if let Err(e) = api.logout().await {
        log::error!("Error signing out: {}", e);
        store.write(|state| state.show_alert(Alert::for_api_error(&e, "Failed to sign out")));
        return Err(ActionError::Api(e));
    }

    log::info!("Clearing local storage and session storage");
    let env = api.env();
    env.clear_local_storage();
    env.clear_session_storage();
    env.clear_cookies();
    store.write(AppState::reset_session);
    env.reload();
    Ok(())
}

/// Fetch the backend's session dump and log it.
pub async fn debug_session<T, E>(api: &ApiClient<T, E>) -> ActionResult<Value>
where
    T: Transport,
    E: Environment,
{
    let dump = api.debug_session().await?;
    log::info!("Debug session response: {}", dump);
    Ok(dump)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use crate::config::ClientConfig;
    use crate::testing::{Effect, MockTransport, RecordingEnvironment};
    use serde_json::json;
    use std::cell::RefCell;

    fn client() -> ApiClient<MockTransport, RecordingEnvironment> {
        ApiClient::new(
            ClientConfig::default(),
            MockTransport::new(),
            RecordingEnvironment::new(),
        )
    }

    #[tokio::test]
    async fn test_bootstrap_loads_user_then_list() {
        let api = client();
        api.transport().respond_json(200, json!({"name": "Asha"}));
        api.transport().respond_json(
            200,
            json!([{"title": "Jan2024", "url": "https://x/d/a/edit"}]),
        );
        let store = RefCell::new(AppState::new());

        bootstrap(&api, &store).await;

        let state = store.borrow();
        assert_eq!(state.session.user().unwrap().name, "Asha");
        assert_eq!(state.spreadsheets.len(), 1);
        assert!(!state.is_loading());

        let urls: Vec<String> = api.transport().requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            [
                "http://localhost:5000/auth/user",
                "http://localhost:5000/spreadsheets/"
            ]
        );
    }

    #[tokio::test]
    async fn test_bootstrap_failure_leaves_signed_out() {
        let api = client();
        api.transport().respond_json(401, json!({"error": "Unauthorized"}));
        let store = RefCell::new(AppState::new());

        bootstrap(&api, &store).await;

        assert_eq!(store.borrow().session, Session::SignedOut);
        assert_eq!(api.transport().request_count(), 1);
        assert!(store.borrow().alert.is_none());
    }

    #[tokio::test]
    async fn test_bootstrap_network_failure_leaves_signed_out() {
        let api = client();
        api.transport()
            .fail(crate::error::ApiError::Network("offline".into()));
        let store = RefCell::new(AppState::new());

        bootstrap(&api, &store).await;
        assert_eq!(store.borrow().session, Session::SignedOut);
    }

    #[tokio::test]
    async fn test_sign_out_clears_everything() {
        let api = client();
        api.transport()
            .respond_json(200, json!({"message": "Logged out successfully", "redirect": true}));
        let store = RefCell::new(AppState::new());
        store.borrow_mut().session = Session::SignedIn(User {
            name: "Asha".into(),
            email: None,
        });

        sign_out(&api, &store).await.unwrap();

        assert_eq!(store.borrow().session, Session::SignedOut);
        assert_eq!(
            api.env().effects(),
            vec![
                Effect::ClearLocalStorage,
                Effect::ClearSessionStorage,
                Effect::ClearCookies,
                Effect::Reload
            ]
        );
        let request = api.transport().last_request().unwrap();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "http://localhost:5000/auth/logout");
    }

    #[tokio::test]
    async fn test_sign_out_failure_keeps_session() {
        let api = client();
        api.transport().respond_json(500, json!({"error": "Logout failed"}));
        let store = RefCell::new(AppState::new());
        store.borrow_mut().session = Session::SignedIn(User {
            name: "Asha".into(),
            email: None,
        });

        let err = sign_out(&api, &store).await.unwrap_err();
        assert!(matches!(err, ActionError::Api(_)));
        assert!(store.borrow().session.is_signed_in());
        assert_eq!(store.borrow().alert, Some(Alert::danger("Failed to sign out")));
        assert!(api.env().effects().is_empty());
    }

    #[tokio::test]
    async fn test_debug_session_returns_dump() {
        let api = client();
        api.transport()
            .respond_json(200, json!({"session_data": {"user": "Asha"}}));

        let dump = debug_session(&api).await.unwrap();
        assert_eq!(dump["session_data"]["user"], "Asha");
    }
}
