//! "Sync All Data": hand every spreadsheet to the backend for reprocessing.

use crate::alert::Alert;
use crate::api::{ApiClient, Transport};
use crate::env::Environment;
use crate::error::{ActionError, ActionResult, ValidationError};
use crate::models::response_message;
use crate::state::AppState;
use crate::store::Store;

pub const SYNC_SUCCESS_TEXT: &str = "Data synced successfully!";
pub const SYNC_FAILURE_TEXT: &str = "Failed to sync data";

/// POST the in-memory list to `/data/sync` and report the outcome.
///
/// Only the loading flag and the alert change locally.
pub async fn sync_all<T, E, S>(api: &ApiClient<T, E>, store: &S) -> ActionResult<()>
where
    T: Transport,
    E: Environment,
    S: Store<AppState>,
{
    let spreadsheets = store
        .read(|state| state.spreadsheets.clone())
        .ok_or(ActionError::Detached)?;
    if spreadsheets.is_empty() {
        return Err(ValidationError::NothingToSync.into());
    }

    log::info!("🔄 Syncing {} spreadsheets", spreadsheets.len());
    store.write(AppState::begin_activity);
    let result = api.sync_spreadsheets(&spreadsheets).await;
    store.write(AppState::end_activity);

    match result {
        Ok(reply) => {
            let text = response_message(&reply).unwrap_or_else(|| SYNC_SUCCESS_TEXT.to_string());
            store.write(|state| state.show_alert(Alert::success(text)));
            Ok(())
        }
        Err(e) => {
            log::error!("Error syncing data: {}", e);
            store.write(|state| state.show_alert(Alert::for_api_error(&e, SYNC_FAILURE_TEXT)));
            Err(e.into())
        }
    }
}
