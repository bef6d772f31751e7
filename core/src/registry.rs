//! The user's spreadsheets: list, create, delete, open.
//!
//! Every mutation is followed by a fresh [`refresh`]; the local list is never
//! patched by hand.

use chrono::Utc;

use crate::alert::Alert;
use crate::api::{ApiClient, Transport};
use crate::env::Environment;
use crate::error::{ActionError, ActionResult, ValidationError};
use crate::models::{NewSpreadsheet, SpreadsheetId};
use crate::participants::Participant;
use crate::state::AppState;
use crate::store::Store;

/// Confirmation shown before deleting a spreadsheet.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this spreadsheet?";

/// Inputs of the "create spreadsheet" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub title: String,
    pub participant: Option<&'static Participant>,
}

impl CreateForm {
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check the form and build the request body.
    pub fn to_request(&self) -> Result<NewSpreadsheet, ValidationError> {
        let participant = self.validate()?;
        Ok(NewSpreadsheet::new(&self.title, participant, Utc::now()))
    }

    fn validate(&self) -> Result<&'static Participant, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        self.participant
            .ok_or(ValidationError::MissingField("participant"))
    }
}

/// Replace the local list with the backend's.
pub async fn refresh<T, E, S>(api: &ApiClient<T, E>, store: &S)
where
    T: Transport,
    E: Environment,
    S: Store<AppState>,
{
    let Some(ticket) = store.write(AppState::begin_list) else {
        return;
    };

    match api.list_spreadsheets().await {
        Ok(spreadsheets) => {
            log::debug!("Fetched {} spreadsheets", spreadsheets.len());
            store.write(|state| state.apply_list(ticket, spreadsheets));
        }
        Err(e) => {
            log::error!("Error fetching spreadsheets: {}", e);
            store.write(|state| {
                state.fail_list(Alert::for_api_error(&e, "Failed to fetch spreadsheets"))
            });
        }
    }
}

/// Create a spreadsheet from the dialog form.
///
/// On success the form is cleared, the dialog closed and the list reloaded.
/// On failure the form keeps its contents.
pub async fn create<T, E, S>(api: &ApiClient<T, E>, store: &S) -> ActionResult<()>
where
    T: Transport,
    E: Environment,
    S: Store<AppState>,
{
    let request = store
        .read(|state| state.create_form.to_request())
        .ok_or(ActionError::Detached)??;

    store.write(AppState::begin_activity);
    let result = api.create_spreadsheet(&request).await;
    store.write(AppState::end_activity);

    match result {
        Ok(created) => {
            log::info!("Created spreadsheet: {}", created);
            store.write(|state| {
                state.create_form = CreateForm::default();
                state.close_create_dialog();
                state.show_alert(Alert::success("Spreadsheet created successfully!"));
            });
            refresh(api, store).await;
            Ok(())
        }
        Err(e) => {
            log::error!("Error creating spreadsheet: {}", e);
            store.write(|state| {
                state.show_alert(Alert::for_api_error(&e, "Failed to create spreadsheet"))
            });
            Err(e.into())
        }
    }
}

/// Delete the spreadsheet behind `url` after asking the user.
///
/// A URL without an id aborts before any request is made.
pub async fn delete<T, E, S>(api: &ApiClient<T, E>, store: &S, url: &str) -> ActionResult<()>
where
    T: Transport,
    E: Environment,
    S: Store<AppState>,
{
    if !api.env().confirm(DELETE_CONFIRMATION) {
        return Err(ActionError::Cancelled);
    }

    log::info!("Deleting spreadsheet {}", url);
    let Some(id) = SpreadsheetId::from_url(url) else {
        log::error!("Invalid spreadsheet URL: {}", url);
        return Err(ValidationError::InvalidSpreadsheetUrl(url.to_string()).into());
    };

    store.write(AppState::begin_activity);
    let result = api.delete_spreadsheet(&id).await;
    store.write(AppState::end_activity);

    match result {
        Ok(_) => {
            log::info!("Spreadsheet {} deleted", id);
            store.write(|state| state.show_alert(Alert::success("Spreadsheet deleted successfully!")));
            refresh(api, store).await;
            Ok(())
        }
        Err(e) => {
            log::error!("Error deleting spreadsheet: {}", e);
            store.write(|state| {
                state.show_alert(Alert::for_api_error(&e, "Failed to delete spreadsheet"))
            });
            Err(e.into())
        }
    }
}

/// Open a spreadsheet in a new tab.
pub fn open<E: Environment>(env: &E, url: &str) {
    env.open_in_new_tab(url);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Method, RequestBody};
    use crate::config::ClientConfig;
    use crate::models::Spreadsheet;
    use crate::participants;
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

    fn store_with(sheets: &[(&str, &str)]) -> RefCell<AppState> {
        let mut state = AppState::new();
        let ticket = state.begin_list();
        state.apply_list(
            ticket,
            sheets
                .iter()
                .map(|(title, url)| Spreadsheet::new(*title, *url))
                .collect(),
        );
        RefCell::new(state)
    }

    #[test]
    fn test_form_validation() {
        let mut form = CreateForm::default();
        assert_eq!(
            form.to_request().unwrap_err(),
            ValidationError::MissingField("title")
        );

        form.title = "   ".into();
        assert!(!form.is_valid());

        form.title = "Jan2024".into();
        assert_eq!(
            form.to_request().unwrap_err(),
            ValidationError::MissingField("participant")
        );

        form.participant = participants::find("zerodha");
        assert!(form.is_valid());
    }

    #[test]
    fn test_title_is_sent_as_typed() {
        let form = CreateForm {
            title: " Jan2024 ".into(),
            participant: participants::find("zerodha"),
        };
        assert!(form.is_valid());

        let body = serde_json::to_value(form.to_request().unwrap()).unwrap();
        assert_eq!(body["title"], " Jan2024 ");
    }

    #[tokio::test]
    async fn test_refresh_error_alerts_and_keeps_list() {
        let api = client();
        api.transport().respond_json(500, json!({"error": "Internal server error"}));
        let store = store_with(&[("Jan2024", "https://x/d/a/edit")]);

        refresh(&api, &store).await;

        let state = store.borrow();
        assert_eq!(state.spreadsheets.len(), 1);
        assert_eq!(state.alert, Some(Alert::danger("Failed to fetch spreadsheets")));
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_create_posts_body_then_refreshes() {
        let api = client();
        api.transport()
            .respond_json(201, json!({"title": "Jan2024", "url": "https://x/d/new/edit"}));
        api.transport().respond_json(
            200,
            json!([{
                "title": "Jan2024",
                "url": "https://x/d/new/edit",
                "metadata": {"participant_name": "zerodha", "account_type": "demat", "created_at": "2024-01-05T09:30:00.000Z"}
            }]),
        );
        let store = RefCell::new(AppState::new());
        store.borrow_mut().create_form = CreateForm {
            title: "Jan2024".into(),
            participant: participants::find("zerodha"),
        };
        store.borrow_mut().open_create_dialog();

        create(&api, &store).await.unwrap();

        let requests = api.transport().requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url, "http://localhost:5000/spreadsheets/");
        let RequestBody::Json(body) = &requests[0].body else {
            panic!("expected JSON body");
        };
        assert_eq!(body["title"], "Jan2024");
        assert_eq!(body["metadata"]["participant_name"], "zerodha");
        assert_eq!(body["metadata"]["account_type"], "demat");
        let created_at = body["metadata"]["created_at"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
        assert!(created_at.ends_with('Z'));

        assert_eq!(requests[1].method, Method::Get);
        let state = store.borrow();
        assert_eq!(state.spreadsheets[0].title, "Jan2024");
        assert_eq!(state.spreadsheets[0].participant_name(), Some("zerodha"));
        assert_eq!(state.create_form, CreateForm::default());
        assert!(!state.show_create_dialog);
        assert!(!state.is_loading());
        assert_eq!(state.alert, Some(Alert::success("Spreadsheet created successfully!")));
    }

    #[tokio::test]
    async fn test_create_failure_keeps_form() {
        let api = client();
        api.transport().respond_json(500, json!({"error": "Failed to create spreadsheet"}));
        let store = RefCell::new(AppState::new());
        let form = CreateForm {
            title: "Jan2024".into(),
            participant: participants::find("grow"),
        };
        store.borrow_mut().create_form = form.clone();

        assert!(create(&api, &store).await.is_err());
        let state = store.borrow();
        assert_eq!(state.create_form, form);
        assert_eq!(state.alert, Some(Alert::danger("Failed to create spreadsheet")));
        assert_eq!(api.transport().request_count(), 1);
    }

    #[tokio::test]
    async fn test_create_invalid_form_makes_no_request() {
        let api = client();
        let store = RefCell::new(AppState::new());
        store.borrow_mut().create_form.title = "Jan2024".into();

        let err = create(&api, &store).await.unwrap_err();
        assert_eq!(
            err,
            ActionError::Validation(ValidationError::MissingField("participant"))
        );
        assert_eq!(api.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_by_extracted_id() {
        let api = client();
        api.transport()
            .respond_json(200, json!({"message": "Spreadsheet deleted successfully"}));
        api.transport().respond_json(200, json!([]));
        let store = store_with(&[("Jan2024", "https://docs.google.com/spreadsheets/d/abc/edit")]);

        delete(&api, &store, "https://docs.google.com/spreadsheets/d/abc/edit")
            .await
            .unwrap();

        let requests = api.transport().requests();
        assert_eq!(requests[0].method, Method::Delete);
        assert_eq!(requests[0].url, "http://localhost:5000/spreadsheets/abc");
        assert_eq!(requests[1].url, "http://localhost:5000/spreadsheets/");
        assert!(store.borrow().spreadsheets.is_empty());
        assert_eq!(api.env().count(&Effect::Confirm(DELETE_CONFIRMATION.into())), 1);
    }

    #[tokio::test]
    async fn test_delete_without_marker_is_local_noop() {
        let api = client();
        let store = store_with(&[("Jan2024", "https://example.com/sheet")]);

        let err = delete(&api, &store, "https://example.com/sheet").await.unwrap_err();

        assert!(matches!(
            err,
            ActionError::Validation(ValidationError::InvalidSpreadsheetUrl(_))
        ));
        assert_eq!(api.transport().request_count(), 0);
        assert_eq!(store.borrow().spreadsheets.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_declined() {
        let api = client();
        api.env().answer_confirm(false);
        let store = store_with(&[("Jan2024", "https://x/d/abc/edit")]);

        let err = delete(&api, &store, "https://x/d/abc/edit").await.unwrap_err();
        assert_eq!(err, ActionError::Cancelled);
        assert_eq!(api.transport().request_count(), 0);
    }

    #[test]
    fn test_open_uses_new_tab() {
        let env = RecordingEnvironment::new();
        open(&env, "https://x/d/abc/edit");
        assert_eq!(env.effects(), vec![Effect::Open("https://x/d/abc/edit".into())]);
    }
}
